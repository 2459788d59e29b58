//! Navigation and resource properties of the lightbox controller, exercised
//! through the public API only.

use folio_common::{Lightbox, LightboxAction, LightboxGroup, PageEffects};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::Cell;
use std::rc::Rc;

/// Stand-in for `document.body.style.overflow`
#[derive(Clone, Default)]
struct FakePage {
    overflow_hidden: Rc<Cell<bool>>,
    key_listeners: Rc<Cell<usize>>,
}

struct ScrollLock(Rc<Cell<bool>>);

impl Drop for ScrollLock {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

struct KeyListener(Rc<Cell<usize>>);

impl Drop for KeyListener {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl PageEffects for FakePage {
    type ScrollGuard = ScrollLock;
    type KeyBinding = KeyListener;

    fn lock_scroll(&self) -> ScrollLock {
        self.overflow_hidden.set(true);
        ScrollLock(self.overflow_hidden.clone())
    }

    fn bind_keys(&self) -> KeyListener {
        self.key_listeners.set(self.key_listeners.get() + 1);
        KeyListener(self.key_listeners.clone())
    }
}

fn group_of(n: usize, start_index: usize) -> LightboxGroup {
    LightboxGroup {
        urls: (0..n).map(|i| format!("https://photos.example/{i}.jpg")).collect(),
        start_index,
        label: "Conferência Juntos 2023".to_string(),
        icon: "https://logos.example/juntos.png".to_string(),
    }
}

fn actions(seed: u64, count: usize) -> Vec<LightboxAction> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            if rng.random_bool(0.5) {
                LightboxAction::Next
            } else {
                LightboxAction::Previous
            }
        })
        .collect()
}

#[test]
fn index_stays_in_bounds_for_any_navigation() {
    for n in 1..=7 {
        for start in 0..n {
            for seed in 0..10 {
                let mut lb = Lightbox::new(FakePage::default());
                lb.open(group_of(n, start)).unwrap();
                for action in actions(seed, 50) {
                    lb.apply(action);
                    let index = lb.state().unwrap().index();
                    assert!(index < n, "index {index} escaped group of {n}");
                }
            }
        }
    }
}

#[test]
fn next_then_previous_round_trips() {
    for n in 1..=6 {
        for start in 0..n {
            let mut lb = Lightbox::new(FakePage::default());
            lb.open(group_of(n, start)).unwrap();

            lb.next();
            lb.previous();
            assert_eq!(lb.state().unwrap().index(), start);

            lb.previous();
            lb.next();
            assert_eq!(lb.state().unwrap().index(), start);
        }
    }
}

#[test]
fn full_cycle_returns_to_start() {
    let mut lb = Lightbox::new(FakePage::default());
    lb.open(group_of(5, 3)).unwrap();
    for _ in 0..5 {
        lb.next();
    }
    assert_eq!(lb.state().unwrap().index(), 3);
}

#[test]
fn scroll_lock_follows_open_and_close() {
    let page = FakePage::default();
    let mut lb = Lightbox::new(page.clone());

    assert!(!page.overflow_hidden.get());
    lb.open(group_of(3, 0)).unwrap();
    assert!(page.overflow_hidden.get());
    assert_eq!(page.key_listeners.get(), 1);

    lb.close();
    assert!(!page.overflow_hidden.get());
    assert_eq!(page.key_listeners.get(), 0);
}

#[test]
fn every_close_path_releases_effects() {
    let page = FakePage::default();

    let mut lb = Lightbox::new(page.clone());
    lb.open(group_of(2, 0)).unwrap();
    lb.apply(LightboxAction::Close);
    assert!(!page.overflow_hidden.get());

    lb.open(group_of(2, 1)).unwrap();
    assert!(lb.handle_key("Escape"));
    assert!(!page.overflow_hidden.get());

    lb.open(group_of(2, 1)).unwrap();
    drop(lb);
    assert!(!page.overflow_hidden.get());
    assert_eq!(page.key_listeners.get(), 0);
}

#[test]
fn keys_are_ignored_while_closed() {
    let page = FakePage::default();
    let mut lb = Lightbox::new(page.clone());
    for key in ["Escape", "ArrowLeft", "ArrowRight", "a"] {
        assert!(!lb.handle_key(key));
    }
    assert!(lb.state().is_none());
    assert!(!page.overflow_hidden.get());
}
