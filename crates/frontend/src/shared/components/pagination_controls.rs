use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Previous / next pagination for server-paged lists
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Highest valid page (at least 1)
    #[prop(into)]
    last_page: Signal<u32>,

    #[prop(into)]
    has_prev: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Disable navigation while a page is loading
    #[prop(into)]
    busy: Signal<bool>,

    /// Callback with the requested page
    on_page_change: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <span class="pagination-controls__info">
                {move || format!("Halaman {} dari {}", current_page.get(), last_page.get())}
            </span>
            <div class="pagination-controls__buttons">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if has_prev.get_untracked() {
                            on_page_change.run(current_page.get_untracked() - 1);
                        }
                    }
                    disabled=Signal::derive(move || busy.get() || !has_prev.get())
                >
                    {icon("chevron-left")}
                    "Sebelumnya"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        if has_next.get_untracked() {
                            on_page_change.run(current_page.get_untracked() + 1);
                        }
                    }
                    disabled=Signal::derive(move || busy.get() || !has_next.get())
                >
                    "Berikutnya"
                    {icon("chevron-right")}
                </Button>
            </div>
        </div>
    }
}
