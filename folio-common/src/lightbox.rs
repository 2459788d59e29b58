//! Gallery lightbox controller
//!
//! A single modal image viewer over one group of images. The controller is
//! either closed or holds exactly one [`LightboxState`]. While open it also
//! holds the page's scroll lock and keyboard binding; both are released on
//! every exit path because they are dropped together with the state.

use crate::error::LightboxError;
use tracing::debug;

/// Side effects the page must provide while a lightbox is open.
///
/// Each method acquires a resource and returns a guard. Dropping the guard
/// releases the resource: the scroll guard restores page scrolling and the
/// key binding detaches the keyboard listener.
pub trait PageEffects {
    type ScrollGuard;
    type KeyBinding;

    /// Suspend page scrolling
    fn lock_scroll(&self) -> Self::ScrollGuard;

    /// Start routing Escape / ArrowLeft / ArrowRight to the controller
    fn bind_keys(&self) -> Self::KeyBinding;
}

/// User intent while the lightbox is open
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Previous,
    Next,
}

impl LightboxAction {
    /// Map a DOM `KeyboardEvent.key` value to an action. Other keys are ignored.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Close),
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }
}

/// Input to [`Lightbox::open`]: one group's images and the clicked position
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxGroup {
    pub urls: Vec<String>,
    pub start_index: usize,
    pub label: String,
    pub icon: String,
}

/// What the open lightbox is showing
#[derive(Clone, Debug, PartialEq)]
pub struct LightboxState {
    urls: Vec<String>,
    index: usize,
    group_label: String,
    group_icon: String,
}

impl LightboxState {
    pub fn urls(&self) -> &[String] {
        &self.urls
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn current_url(&self) -> &str {
        &self.urls[self.index]
    }

    pub fn group_label(&self) -> &str {
        &self.group_label
    }

    pub fn group_icon(&self) -> &str {
        &self.group_icon
    }

    /// More than one image, so navigation controls are meaningful
    pub fn has_navigation(&self) -> bool {
        self.urls.len() > 1
    }

    fn advance(&mut self) {
        self.index = (self.index + 1) % self.urls.len();
    }

    fn retreat(&mut self) {
        let len = self.urls.len();
        self.index = (self.index + len - 1) % len;
    }
}

/// Open lightbox: the state plus the resources held on its behalf.
///
/// Fields drop in declaration order, so the key binding is detached before
/// scrolling is restored.
struct Session<E: PageEffects> {
    state: LightboxState,
    _keys: E::KeyBinding,
    _scroll: E::ScrollGuard,
}

/// Lightbox controller
pub struct Lightbox<E: PageEffects> {
    effects: E,
    session: Option<Session<E>>,
}

impl<E: PageEffects> Lightbox<E> {
    pub fn new(effects: E) -> Self {
        Self {
            effects,
            session: None,
        }
    }

    pub fn effects(&self) -> &E {
        &self.effects
    }

    pub fn effects_mut(&mut self) -> &mut E {
        &mut self.effects
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Current state, `None` when closed
    pub fn state(&self) -> Option<&LightboxState> {
        self.session.as_ref().map(|s| &s.state)
    }

    /// Open the viewer on `group`, replacing whatever was showing.
    ///
    /// Invalid input is rejected without touching the current state. When the
    /// lightbox is already open the held scroll lock and key binding are kept.
    pub fn open(&mut self, group: LightboxGroup) -> Result<(), LightboxError> {
        let len = group.urls.len();
        if len == 0 {
            return Err(LightboxError::EmptyGroup);
        }
        if group.start_index >= len {
            return Err(LightboxError::IndexOutOfRange {
                index: group.start_index,
                len,
            });
        }

        debug!(
            "Opening lightbox for {:?} at {}/{}",
            group.label,
            group.start_index + 1,
            len
        );

        let state = LightboxState {
            urls: group.urls,
            index: group.start_index,
            group_label: group.label,
            group_icon: group.icon,
        };

        match &mut self.session {
            Some(session) => session.state = state,
            None => {
                let scroll = self.effects.lock_scroll();
                let keys = self.effects.bind_keys();
                self.session = Some(Session {
                    state,
                    _keys: keys,
                    _scroll: scroll,
                });
            }
        }

        Ok(())
    }

    /// Close the viewer and release page side effects. No-op when closed.
    pub fn close(&mut self) {
        if self.session.take().is_some() {
            debug!("Closed lightbox");
        }
    }

    pub fn next(&mut self) {
        if let Some(session) = &mut self.session {
            session.state.advance();
        }
    }

    pub fn previous(&mut self) {
        if let Some(session) = &mut self.session {
            session.state.retreat();
        }
    }

    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Close => self.close(),
            LightboxAction::Previous => self.previous(),
            LightboxAction::Next => self.next(),
        }
    }

    /// Handle a keyboard `key` value. Returns true if it was consumed.
    ///
    /// Keys are only bound while open, so nothing is consumed when closed.
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.is_open() {
            return false;
        }
        match LightboxAction::from_key(key) {
            Some(action) => {
                self.apply(action);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Held(Rc<Cell<i32>>);

    impl Drop for Held {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[derive(Default)]
    struct Recording {
        scroll_locks: Rc<Cell<i32>>,
        key_bindings: Rc<Cell<i32>>,
    }

    impl PageEffects for Recording {
        type ScrollGuard = Held;
        type KeyBinding = Held;

        fn lock_scroll(&self) -> Held {
            self.scroll_locks.set(self.scroll_locks.get() + 1);
            Held(self.scroll_locks.clone())
        }

        fn bind_keys(&self) -> Held {
            self.key_bindings.set(self.key_bindings.get() + 1);
            Held(self.key_bindings.clone())
        }
    }

    fn group(urls: &[&str], start_index: usize) -> LightboxGroup {
        LightboxGroup {
            urls: urls.iter().map(|u| u.to_string()).collect(),
            start_index,
            label: "Hackathon".into(),
            icon: "logo.png".into(),
        }
    }

    #[test]
    fn test_new_is_closed() {
        let lb = Lightbox::new(Recording::default());
        assert!(!lb.is_open());
        assert!(lb.state().is_none());
    }

    #[test]
    fn test_open_sets_state() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["a", "b", "c"], 1)).unwrap();
        let state = lb.state().unwrap();
        assert_eq!(state.index(), 1);
        assert_eq!(state.current_url(), "b");
        assert_eq!(state.group_label(), "Hackathon");
        assert_eq!(state.group_icon(), "logo.png");
        assert!(state.has_navigation());
        assert_eq!(state.len(), 3);
        assert!(!state.is_empty());
    }

    #[test]
    fn test_next_wraps() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["a", "b", "c"], 1)).unwrap();
        lb.next();
        assert_eq!(lb.state().unwrap().index(), 2);
        lb.next();
        assert_eq!(lb.state().unwrap().index(), 0);
    }

    #[test]
    fn test_previous_wraps() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["a", "b", "c"], 0)).unwrap();
        lb.previous();
        assert_eq!(lb.state().unwrap().index(), 2);
        assert_eq!(lb.state().unwrap().current_url(), "c");
    }

    #[test]
    fn test_single_image_stays_put() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["only"], 0)).unwrap();
        assert!(!lb.state().unwrap().has_navigation());
        lb.next();
        assert_eq!(lb.state().unwrap().index(), 0);
        lb.previous();
        assert_eq!(lb.state().unwrap().index(), 0);
    }

    #[test]
    fn test_navigation_when_closed_is_noop() {
        let mut lb = Lightbox::new(Recording::default());
        lb.next();
        lb.previous();
        assert!(lb.state().is_none());
    }

    #[test]
    fn test_open_empty_rejected() {
        let mut lb = Lightbox::new(Recording::default());
        assert_eq!(lb.open(group(&[], 0)), Err(LightboxError::EmptyGroup));
        assert!(!lb.is_open());
        assert_eq!(lb.effects().scroll_locks.get(), 0);
        assert_eq!(lb.effects().key_bindings.get(), 0);
    }

    #[test]
    fn test_open_out_of_range_rejected() {
        let mut lb = Lightbox::new(Recording::default());
        assert_eq!(
            lb.open(group(&["a", "b"], 2)),
            Err(LightboxError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert!(!lb.is_open());
    }

    #[test]
    fn test_rejected_open_keeps_previous_state() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["a", "b"], 1)).unwrap();
        assert!(lb.open(group(&["x"], 3)).is_err());
        assert_eq!(lb.state().unwrap().current_url(), "b");
        assert_eq!(lb.effects().scroll_locks.get(), 1);
    }

    #[test]
    fn test_open_locks_and_close_restores() {
        let mut lb = Lightbox::new(Recording::default());
        assert_eq!(lb.effects().scroll_locks.get(), 0);
        lb.open(group(&["a"], 0)).unwrap();
        assert_eq!(lb.effects().scroll_locks.get(), 1);
        assert_eq!(lb.effects().key_bindings.get(), 1);
        lb.close();
        assert_eq!(lb.effects().scroll_locks.get(), 0);
        assert_eq!(lb.effects().key_bindings.get(), 0);
    }

    #[test]
    fn test_reopen_keeps_single_lock() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["a", "b"], 0)).unwrap();
        lb.open(group(&["x", "y", "z"], 2)).unwrap();
        assert_eq!(lb.effects().scroll_locks.get(), 1);
        assert_eq!(lb.effects().key_bindings.get(), 1);
        assert_eq!(lb.state().unwrap().current_url(), "z");
        assert_eq!(lb.state().unwrap().len(), 3);
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut lb = Lightbox::new(Recording::default());
        lb.close();
        assert!(!lb.is_open());
        lb.open(group(&["a"], 0)).unwrap();
        lb.close();
        lb.close();
        assert!(!lb.is_open());
        assert_eq!(lb.effects().scroll_locks.get(), 0);
    }

    #[test]
    fn test_drop_releases_effects() {
        let effects = Recording::default();
        let scroll_locks = effects.scroll_locks.clone();
        let key_bindings = effects.key_bindings.clone();
        let mut lb = Lightbox::new(effects);
        lb.open(group(&["a", "b"], 0)).unwrap();
        assert_eq!(scroll_locks.get(), 1);
        drop(lb);
        assert_eq!(scroll_locks.get(), 0);
        assert_eq!(key_bindings.get(), 0);
    }

    #[test]
    fn test_from_key() {
        assert_eq!(LightboxAction::from_key("Escape"), Some(LightboxAction::Close));
        assert_eq!(
            LightboxAction::from_key("ArrowLeft"),
            Some(LightboxAction::Previous)
        );
        assert_eq!(
            LightboxAction::from_key("ArrowRight"),
            Some(LightboxAction::Next)
        );
        assert_eq!(LightboxAction::from_key("Enter"), None);
        assert_eq!(LightboxAction::from_key("escape"), None);
    }

    #[test]
    fn test_escape_closes_only_when_open() {
        let mut lb = Lightbox::new(Recording::default());
        assert!(!lb.handle_key("Escape"));
        assert!(!lb.is_open());

        lb.open(group(&["a", "b"], 0)).unwrap();
        assert!(lb.handle_key("Escape"));
        assert!(!lb.is_open());
        assert_eq!(lb.effects().scroll_locks.get(), 0);
    }

    #[test]
    fn test_arrow_keys_navigate() {
        let mut lb = Lightbox::new(Recording::default());
        lb.open(group(&["a", "b", "c"], 0)).unwrap();
        assert!(lb.handle_key("ArrowRight"));
        assert_eq!(lb.state().unwrap().index(), 1);
        assert!(lb.handle_key("ArrowLeft"));
        assert!(lb.handle_key("ArrowLeft"));
        assert_eq!(lb.state().unwrap().index(), 2);
        assert!(!lb.handle_key("Tab"));
        assert_eq!(lb.state().unwrap().index(), 2);
    }
}
