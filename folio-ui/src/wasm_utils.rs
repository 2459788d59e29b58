//! Browser side of the lightbox: guards for the page's keyboard listener and
//! body scroll lock.
//!
//! Each guard takes hold of its resource when built and releases it in `Drop`.
//! [`BrowserEffects`] hands them to the controller, which keeps them only while
//! the lightbox is open.

use std::rc::Rc;

use folio_common::{LightboxAction, PageEffects};
use wasm_bindgen_x::prelude::*;

/// A document event listener that automatically removes itself when dropped.
pub struct DocumentEventListener {
    document: web_sys_x::Document,
    event_name: &'static str,
    callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)>,
}

impl DocumentEventListener {
    /// Attaches an event listener to the document.
    ///
    /// The listener is automatically removed when this struct is dropped.
    pub fn new(
        document: web_sys_x::Document,
        event_name: &'static str,
        callback: impl FnMut(wasm_bindgen_x::JsValue) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(wasm_bindgen_x::JsValue)> =
            Closure::wrap(Box::new(callback));

        if let Err(e) = document
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
        {
            tracing::warn!("Failed to attach {} listener: {:?}", event_name, e);
        }

        Self {
            document,
            event_name,
            callback,
        }
    }
}

impl Drop for DocumentEventListener {
    fn drop(&mut self) {
        let _ = self.document.remove_event_listener_with_callback(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

/// Hides `document.body` overflow until dropped, then puts back whatever
/// inline value was there before.
pub struct BodyScrollLock {
    body: web_sys_x::HtmlElement,
    previous: String,
}

impl BodyScrollLock {
    pub fn acquire(document: &web_sys_x::Document) -> Option<Self> {
        let body = document.body()?;
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        style.set_property("overflow", "hidden").ok()?;
        Some(Self { body, previous })
    }
}

impl Drop for BodyScrollLock {
    fn drop(&mut self) {
        let style = self.body.style();
        let _ = if self.previous.is_empty() {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", &self.previous)
        };
    }
}

fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window().and_then(|w| w.document())
}

type Dispatch = Rc<dyn Fn(LightboxAction)>;

/// [`PageEffects`] backed by the real document.
///
/// Key presses are decoded with [`LightboxAction::from_key`] and passed to the
/// dispatch function set with [`BrowserEffects::set_dispatch`]. Without a
/// dispatch function no listener is attached. Outside a browser every guard
/// is `None` and the lightbox still works, minus the side effects.
#[derive(Default)]
pub struct BrowserEffects {
    dispatch: Option<Dispatch>,
}

impl BrowserEffects {
    pub fn set_dispatch(&mut self, dispatch: impl Fn(LightboxAction) + 'static) {
        self.dispatch = Some(Rc::new(dispatch));
    }
}

impl PageEffects for BrowserEffects {
    type ScrollGuard = Option<BodyScrollLock>;
    type KeyBinding = Option<DocumentEventListener>;

    fn lock_scroll(&self) -> Self::ScrollGuard {
        BodyScrollLock::acquire(&document()?)
    }

    fn bind_keys(&self) -> Self::KeyBinding {
        let dispatch = self.dispatch.clone()?;
        let document = document()?;
        Some(DocumentEventListener::new(
            document,
            "keydown",
            move |event: wasm_bindgen_x::JsValue| {
                let Some(event) = event.dyn_ref::<web_sys_x::KeyboardEvent>() else {
                    return;
                };
                if let Some(action) = LightboxAction::from_key(&event.key()) {
                    dispatch(action);
                }
            },
        ))
    }
}
