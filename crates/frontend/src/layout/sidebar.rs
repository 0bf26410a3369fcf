use crate::config::use_config;
use crate::routes::Route;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    route: Route,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> [MenuItem; 2] {
    [
        MenuItem {
            route: Route::List,
            label: "Data Invoice",
            icon: "list",
        },
        MenuItem {
            route: Route::New,
            label: "Buat Invoice Baru",
            icon: "plus-circle",
        },
    ]
}

#[component]
pub fn Sidebar(#[prop(into)] active_path: Signal<&'static str>) -> impl IntoView {
    let config = use_config();
    let title = config.branding.app_title.clone();

    view! {
        <div class="app-sidebar__content">
            <div class="app-sidebar__brand">
                <img src=config.logo_url() alt=format!("{} Logo", title) class="app-sidebar__logo" />
                <h1 class="app-sidebar__title">{title.clone()}</h1>
            </div>
            <nav class="app-sidebar__nav">
                {menu_items().into_iter().map(|item| {
                    let path = item.route.nav_path();
                    view! {
                        <a
                            href=item.route.href()
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=move || active_path.get() == path
                        >
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </a>
                    }
                }).collect_view()}
            </nav>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_links_and_highlight_paths() {
        let items = menu_items();
        let links: Vec<String> = items.iter().map(|i| i.route.href()).collect();
        assert_eq!(links, vec!["#/", "#/new"]);

        // editing highlights the create entry
        assert_eq!(Route::Edit("42".into()).nav_path(), items[1].route.nav_path());
    }
}
