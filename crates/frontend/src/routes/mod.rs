pub mod routes;

pub use routes::{navigate, AppRoutes, Route};
