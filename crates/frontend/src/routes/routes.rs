//! Hash-based routing: `#/` list, `#/new` create, `#/edit/{id}` edit.

use crate::domain::a001_invoice::ui::details::InvoiceDetails;
use crate::domain::a001_invoice::ui::list::InvoiceList;
use crate::layout::sidebar::Sidebar;
use crate::layout::Shell;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const LIST_PATH: &str = "/";
const NEW_PATH: &str = "/new";
const EDIT_PREFIX: &str = "/edit/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    New,
    Edit(String),
}

impl Route {
    /// Resolve a URL fragment; anything unknown falls back to the list.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let path = if path.is_empty() { LIST_PATH } else { path };

        if let Some(rest) = path.strip_prefix(EDIT_PREFIX) {
            let raw_id = rest.split('/').next().unwrap_or_default();
            if raw_id.is_empty() {
                return Route::New;
            }
            let id = urlencoding::decode(raw_id)
                .map(|id| id.into_owned())
                .unwrap_or_else(|_| raw_id.to_string());
            return Route::Edit(id);
        }

        match path {
            NEW_PATH => Route::New,
            _ => Route::List,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => LIST_PATH.to_string(),
            Route::New => NEW_PATH.to_string(),
            Route::Edit(id) => format!("{}{}", EDIT_PREFIX, urlencoding::encode(id)),
        }
    }

    pub fn href(&self) -> String {
        format!("#{}", self.path())
    }

    /// Sidebar entry to highlight; editing counts as the create page.
    pub fn nav_path(&self) -> &'static str {
        match self {
            Route::List => LIST_PATH,
            Route::New | Route::Edit(_) => NEW_PATH,
        }
    }
}

pub fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// Change the fragment; the `hashchange` listener does the rest.
pub fn navigate(route: &Route) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.location().set_hash(&route.path()) {
            log::error!("failed to navigate to {}: {:?}", route.path(), e);
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let route = RwSignal::new(current_route());

    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |_event: web_sys::Event| {
            let next = current_route();
            log::debug!("route changed: {:?}", next);
            route.set(next);
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
            {
                log::error!("failed to register hashchange listener: {:?}", e);
            }
            // Router lives for the whole app; keep the closure alive.
            closure.forget();
        }
    });

    let active_path = Signal::derive(move || route.with(|r| r.nav_path()));

    view! {
        <Shell
            sidebar=move || view! { <Sidebar active_path=active_path /> }.into_any()
            content=move || match route.get() {
                Route::List => view! { <InvoiceList /> }.into_any(),
                Route::New => view! { <InvoiceDetails id=None /> }.into_any(),
                Route::Edit(id) => view! { <InvoiceDetails id=Some(id) /> }.into_any(),
            }
        />
    }
}
