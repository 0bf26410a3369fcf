//! Invoice form for creating and editing
//!
//! - model.rs: form state and conversion to the request body
//! - view_model.rs: commands (load, save) and async state
//! - view.rs: Leptos components

mod model;
mod view;
mod view_model;

pub use model::{InvoiceForm, ItemDraft};
pub use view::InvoiceDetails;
pub use view_model::InvoiceDetailsViewModel;
