//! Gallery lightbox
//!
//! `use_lightbox` owns the controller for a page; `LightboxView` renders an
//! open state. The view is only mounted while the controller is open, so a
//! closed lightbox leaves nothing in the DOM.

use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::wasm_utils::BrowserEffects;
use dioxus::prelude::*;
use folio_common::{Lightbox, LightboxState};
use std::cell::Cell;
use std::rc::Rc;

pub type PageLightbox = Lightbox<BrowserEffects>;

/// Lightbox controller scoped to the calling component.
///
/// Keyboard input is routed back into the same signal. The controller's
/// scroll lock and key listener are released when it closes, and also when
/// the owning component unmounts and the signal's value is dropped.
pub fn use_lightbox() -> Signal<PageLightbox> {
    // Filled in once the signal exists; key presses only arrive after that.
    let target = use_hook(|| Rc::new(Cell::new(None::<Signal<PageLightbox>>)));

    let lightbox = use_signal({
        let target = target.clone();
        move || {
            let mut effects = BrowserEffects::default();
            effects.set_dispatch(move |action| {
                if let Some(mut lightbox) = target.get() {
                    lightbox.write().apply(action);
                }
            });
            Lightbox::new(effects)
        }
    });

    use_hook(|| target.set(Some(lightbox)));

    lightbox
}

const NAV_BUTTON_CLASS: &str = "absolute top-1/2 -translate-y-1/2 z-10 p-2 sm:p-3 rounded-full bg-white/10 hover:bg-white/20 text-white transition-colors focus:outline-none focus:ring-2 focus:ring-white/50";

/// Full-screen viewer for one image of a group.
///
/// Clicking the backdrop closes it. Clicks on the image, the navigation
/// buttons and the caption pill stop propagation so they never reach the
/// backdrop handler.
#[component]
pub fn LightboxView(
    state: LightboxState,
    on_close: EventHandler<()>,
    on_previous: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let position = state.index() + 1;
    let total = state.len();
    let url = state.current_url().to_string();
    let icon = state.group_icon().to_string();

    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center p-4 bg-black/80 backdrop-blur-sm",
            role: "dialog",
            "aria-modal": "true",
            "aria-label": "Visualizar imagem",
            onclick: move |_| on_close.call(()),

            button {
                r#type: "button",
                class: "absolute top-4 right-4 z-10 p-2 rounded-full bg-white/10 hover:bg-white/20 text-white transition-colors focus:outline-none focus:ring-2 focus:ring-white/50",
                "aria-label": "Fechar",
                onclick: move |e| {
                    e.stop_propagation();
                    on_close.call(());
                },
                XIcon { class: "w-5 h-5" }
            }

            if state.has_navigation() {
                button {
                    r#type: "button",
                    class: "{NAV_BUTTON_CLASS} left-2 sm:left-4",
                    "aria-label": "Imagem anterior",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_previous.call(());
                    },
                    ChevronLeftIcon { class: "w-6 h-6 sm:w-8 sm:h-8" }
                }
                button {
                    r#type: "button",
                    class: "{NAV_BUTTON_CLASS} right-2 sm:right-4",
                    "aria-label": "Próxima imagem",
                    onclick: move |e| {
                        e.stop_propagation();
                        on_next.call(());
                    },
                    ChevronRightIcon { class: "w-6 h-6 sm:w-8 sm:h-8" }
                }
            }

            img {
                src: "{url}",
                alt: "Imagem {position} de {total}",
                class: "max-w-full max-h-[85vh] w-auto h-auto object-contain rounded-lg shadow-2xl",
                onclick: move |e| e.stop_propagation(),
            }

            // Caption pill
            div {
                class: "absolute bottom-6 left-1/2 -translate-x-1/2 z-10 flex items-center gap-3 px-4 py-1 pl-1 rounded-full bg-black/60 backdrop-blur-xl border border-white/10 shadow-2xl min-w-0 max-w-[90vw]",
                onclick: move |e| e.stop_propagation(),
                img {
                    src: "{icon}",
                    alt: "",
                    class: "w-8 h-8 rounded-full object-cover shrink-0",
                }
                span { class: "text-sm font-medium text-white truncate flex-1 min-w-0",
                    {state.group_label().to_string()}
                }
                span { class: "text-xs text-white/70 tabular-nums shrink-0",
                    "{position}"
                    span { class: "text-white/50", " / " }
                    "{total}"
                }
            }
        }
    }
}

/// Renders the page's lightbox when it is open, wired to its controller.
#[component]
pub fn PageLightboxOverlay(mut lightbox: Signal<PageLightbox>) -> Element {
    let Some(state) = lightbox.read().state().cloned() else {
        return rsx! {};
    };

    rsx! {
        LightboxView {
            state,
            on_close: move |_| lightbox.write().close(),
            on_previous: move |_| lightbox.write().previous(),
            on_next: move |_| lightbox.write().next(),
        }
    }
}
