pub mod api_utils;
pub mod components;
pub mod date_utils;
pub mod debounce;
pub mod icons;
pub mod modal;
pub mod number_format;
pub mod request_guard;
