use crate::config::load_config;
use crate::routes::AppRoutes;
use crate::shared::modal::ModalService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Configuration is read once per page load and shared via context.
    provide_context(load_config());

    // Single overlay slot shared by every page
    provide_context(ModalService::new());

    view! {
        <AppRoutes />
    }
}
