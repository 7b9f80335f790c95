//! Deterministic cleanup through `Drop`.
//!
//! A [`CleanupGuard`] runs its closure exactly once when it leaves scope,
//! including early returns and unwinding. Several guards attached to one
//! value run in reverse order of creation.

use super::{Demo, DemoContext};
use crate::error::Result;
use std::cell::RefCell;

/// Runs `cleanup` when dropped.
pub struct CleanupGuard<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> CleanupGuard<F> {
    pub fn new(cleanup: F) -> Self {
        Self { cleanup: Some(cleanup) }
    }
}

impl<F: FnOnce()> Drop for CleanupGuard<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

struct Holder {
    value: i32,
}

pub struct ScopedCleanupDemo;

impl Demo for ScopedCleanupDemo {
    fn name(&self) -> &'static str {
        "scoped-cleanup"
    }

    fn title(&self) -> &'static str {
        "Scoped cleanup"
    }

    fn run(&self, _ctx: &DemoContext) -> Result<Vec<String>> {
        let events = RefCell::new(Vec::new());
        {
            let holder = Holder { value: 42 };
            let value = holder.value;
            let _first = CleanupGuard::new(|| {
                events.borrow_mut().push(format!("Cleanup #1 ran for Holder with value: {value}"))
            });
            let _second = CleanupGuard::new(|| {
                events.borrow_mut().push(format!("Cleanup #2 ran for Holder with value: {value}"))
            });
            events
                .borrow_mut()
                .push(format!("Holder in scope with value: {}", holder.value));
        }
        Ok(events.into_inner())
    }
}
