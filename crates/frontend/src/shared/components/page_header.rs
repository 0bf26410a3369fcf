use leptos::prelude::*;

/// Page title block rendered at the top of every screen
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,
) -> impl IntoView {
    view! {
        <header class="page-header">
            <h2 class="page-header__title">{title}</h2>
            {move || subtitle.get().map(|s| view! {
                <p class="page-header__subtitle">{s}</p>
            })}
        </header>
    }
}
