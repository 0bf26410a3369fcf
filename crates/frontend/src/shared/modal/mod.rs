//! Single-slot modal overlay.
//!
//! At most one modal is visible: showing a modal replaces the current one,
//! hiding clears the slot. Provided once via context and rendered by
//! [`ModalHost`].

mod confirm;
mod status;

pub use confirm::ConfirmDeleteDialog;
pub use status::{Status, StatusDialog};

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::KeyboardEvent;

type ModalBuilder = Arc<dyn Fn() -> AnyView + Send + Sync>;

#[derive(Clone)]
struct ModalEntry {
    id: u64,
    builder: ModalBuilder,
    surface_class: &'static str,
}

/// Identifies one `show` call, so async code can tell whether its modal
/// is still the one on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalId(u64);

#[derive(Clone, Copy)]
pub struct ModalService {
    slot: RwSignal<Option<ModalEntry>>,
    next_id: StoredValue<u64>,
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            slot: RwSignal::new(None),
            next_id: StoredValue::new(1),
        }
    }

    /// Show a modal with the default (narrow) surface.
    pub fn show<F>(&self, builder: F) -> ModalId
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        self.show_with_class("modal--narrow", builder)
    }

    /// Show a modal, replacing whatever is currently visible.
    pub fn show_with_class<F>(&self, surface_class: &'static str, builder: F) -> ModalId
    where
        F: Fn() -> AnyView + Send + Sync + 'static,
    {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.slot.set(Some(ModalEntry {
            id,
            builder: Arc::new(builder),
            surface_class,
        }));
        ModalId(id)
    }

    pub fn hide(&self) {
        self.slot.set(None);
    }

    /// Hide on the next tick.
    ///
    /// Needed when the click that closes the modal is dispatched by an
    /// element inside it.
    pub fn hide_deferred(&self) {
        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            svc.hide();
        });
    }

    pub fn is_open(&self) -> bool {
        self.slot.with_untracked(|s| s.is_some())
    }

    /// Whether the modal opened by `id` is still the one on screen.
    pub fn is_showing(&self, id: ModalId) -> bool {
        self.slot
            .try_with_untracked(|s| s.as_ref().map(|e| e.id) == Some(id.0))
            .unwrap_or(false)
    }
}

pub fn use_modal() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context (provide it in app root)")
}

/// Renders the modal slot at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn ModalHost() -> impl IntoView {
    let svc = use_modal();

    // Escape closes the visible modal
    Effect::new(move |_| {
        let closure = Closure::wrap(Box::new(move |event: web_sys::Event| {
            if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                if keyboard_event.key() == "Escape" && svc.is_open() {
                    svc.hide_deferred();
                }
            }
        }) as Box<dyn FnMut(_)>);

        if let Some(window) = web_sys::window() {
            if let Err(e) = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
            {
                log::error!("failed to register modal keydown listener: {:?}", e);
            }
            // ModalHost lives for the whole app; keep the closure alive.
            closure.forget();
        }
    });

    view! {
        {move || {
            svc.slot.get().map(|entry| {
                let content = (entry.builder)();
                view! {
                    <div class="modal-overlay">
                        <div class=format!("modal-surface {}", entry.surface_class)>
                            {content}
                        </div>
                    </div>
                }
            })
        }}
    }
}
