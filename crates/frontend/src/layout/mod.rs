pub mod sidebar;

use crate::shared::modal::ModalHost;
use leptos::prelude::*;

/// Main application shell.
///
/// ```text
/// +-----------+------------------------------+
/// |  Sidebar  |           Content            |
/// +-----------+------------------------------+
/// ```
///
/// The modal host is mounted here so every page shares one overlay slot.
#[component]
pub fn Shell<S, C>(sidebar: S, content: C) -> impl IntoView
where
    S: Fn() -> AnyView + Send + 'static,
    C: Fn() -> AnyView + Send + 'static,
{
    view! {
        <div class="app-layout">
            <aside class="app-sidebar no-print">
                {sidebar()}
            </aside>
            <main class="app-main no-print">
                {content}
            </main>
            <div id="modal-container">
                <ModalHost />
            </div>
        </div>
    }
}
