//! Wire contracts shared between the invoice frontend and the HTTP API.

pub mod domain;
pub mod shared;
