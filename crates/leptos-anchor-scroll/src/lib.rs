//! Leptos Anchor Scroll
//!
//! Scroll a section into view by element id. When the section is not mounted
//! yet (e.g. the route that renders it was just selected), retry on the next
//! animation frames up to a fixed budget, then give up silently.

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

/// Remaining retries for one scroll request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryBudget {
    remaining: u32,
}

impl RetryBudget {
    pub fn new(max_frames: u32) -> Self {
        Self { remaining: max_frames }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Use up one retry. `None` once the budget is exhausted.
    pub fn spend(self) -> Option<Self> {
        self.remaining.checked_sub(1).map(|remaining| Self { remaining })
    }
}

/// Handle to a pending scroll; cancelling stops any further retries
#[derive(Clone, Debug, Default)]
pub struct ScrollHandle {
    cancelled: Rc<Cell<bool>>,
}

impl ScrollHandle {
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Scroll `#target_id` into view now, or on one of the next `max_frames` frames
pub fn scroll_to_anchor(target_id: &str, max_frames: u32) -> ScrollHandle {
    let handle = ScrollHandle::default();
    attempt(Rc::from(target_id), RetryBudget::new(max_frames), handle.clone());
    handle
}

fn attempt(target_id: Rc<str>, budget: RetryBudget, handle: ScrollHandle) {
    if handle.is_cancelled() {
        return;
    }
    if try_scroll(&target_id) {
        return;
    }
    match budget.spend() {
        Some(next) => request_animation_frame(move || attempt(target_id, next, handle)),
        None => log::debug!("[NAV] #{} never mounted, giving up", target_id),
    }
}

fn try_scroll(target_id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(target_id))
    else {
        return false;
    };

    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(web_sys::ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Keep the section named by `anchor` in view.
///
/// Re-runs whenever `anchor` changes; a new request cancels the previous one,
/// and unmounting the calling component cancels whatever is still pending.
pub fn use_anchor_scroll<F>(anchor: F, max_frames: u32)
where
    F: Fn() -> Option<String> + 'static,
{
    let pending = StoredValue::new_local(ScrollHandle::default());

    Effect::new(move |_| {
        let target = anchor();
        pending.try_update_value(|current| {
            current.cancel();
            if let Some(id) = target {
                *current = scroll_to_anchor(&id, max_frames);
            }
        });
    });

    on_cleanup(move || {
        pending.try_with_value(ScrollHandle::cancel);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_allows_exact_retries() {
        let mut budget = RetryBudget::new(12);
        let mut retries = 0;
        while let Some(next) = budget.spend() {
            budget = next;
            retries += 1;
        }
        assert_eq!(retries, 12);
        assert_eq!(budget.remaining(), 0);
    }

    #[test]
    fn test_zero_budget_never_retries() {
        assert_eq!(RetryBudget::new(0).spend(), None);
    }

    #[test]
    fn test_cancel_is_shared_between_clones() {
        let handle = ScrollHandle::default();
        let clone = handle.clone();
        assert!(!clone.is_cancelled());
        handle.cancel();
        assert!(clone.is_cancelled());
    }
}
