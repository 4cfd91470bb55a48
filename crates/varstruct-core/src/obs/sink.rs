//! Assignment sink boundary.
//!
//! `record` is the only bridge between field code and the counters in
//! `obs::metrics`. With the `obs` feature disabled it compiles to nothing.
use crate::obs::metrics::{self, AssignReport, FieldKey};
use std::cell::RefCell;

thread_local! {
    static SINK_OVERRIDE: RefCell<Option<*const dyn AssignSink>> = RefCell::new(None);
}

///
/// AssignEvent
/// `owner` is the path of the struct that declares `field`.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AssignEvent {
    Accepted {
        owner: &'static str,
        field: &'static str,
        value_type: &'static str,
    },
    Rejected {
        owner: &'static str,
        field: &'static str,
        value_type: &'static str,
    },
}

impl AssignEvent {
    #[must_use]
    pub const fn owner(&self) -> &'static str {
        match self {
            Self::Accepted { owner, .. } | Self::Rejected { owner, .. } => *owner,
        }
    }

    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Accepted { field, .. } | Self::Rejected { field, .. } => *field,
        }
    }

    #[must_use]
    pub const fn key(&self) -> FieldKey {
        FieldKey::new(self.owner(), self.field())
    }
}

///
/// AssignSink
///

pub trait AssignSink {
    fn record(&self, event: AssignEvent);
}

/// GlobalAssignSink
/// Default thread-local sink that writes into the assignment counters.
/// Acts as the concrete sink when no scoped override is installed.

#[cfg_attr(not(feature = "obs"), allow(dead_code))]
pub(crate) struct GlobalAssignSink;

impl AssignSink for GlobalAssignSink {
    fn record(&self, event: AssignEvent) {
        metrics::with_state_mut(|m| match event {
            AssignEvent::Accepted { .. } => {
                m.accepted = m.accepted.saturating_add(1);
                let entry = m.fields.entry(event.key()).or_default();
                entry.accepted = entry.accepted.saturating_add(1);
            }
            AssignEvent::Rejected { .. } => {
                m.rejected = m.rejected.saturating_add(1);
                let entry = m.fields.entry(event.key()).or_default();
                entry.rejected = entry.rejected.saturating_add(1);
            }
        });
    }
}

#[cfg_attr(not(feature = "obs"), allow(dead_code))]
pub(crate) const GLOBAL_ASSIGN_SINK: GlobalAssignSink = GlobalAssignSink;

#[cfg(feature = "obs")]
pub(crate) fn record(event: AssignEvent) {
    let override_ptr = SINK_OVERRIDE.with(|cell| *cell.borrow());
    if let Some(ptr) = override_ptr {
        // SAFETY:
        // - the pointer is only installed by `with_assign_sink` for its dynamic scope
        // - the guard restores the previous slot on every exit path, including unwind
        unsafe { (*ptr).record(event) };
    } else {
        GLOBAL_ASSIGN_SINK.record(event);
    }
}

#[cfg(not(feature = "obs"))]
#[allow(clippy::missing_const_for_fn)]
pub(crate) fn record(_event: AssignEvent) {}

/// Snapshot the assignment counters for the current thread.
#[must_use]
pub fn assign_report() -> AssignReport {
    metrics::report()
}

/// Reset the assignment counters for the current thread.
pub fn assign_reset() {
    metrics::reset();
}

/// Run a closure with a temporary assignment sink override.
pub fn with_assign_sink<T>(sink: &dyn AssignSink, f: impl FnOnce() -> T) -> T {
    struct Guard(Option<*const dyn AssignSink>);

    impl Drop for Guard {
        fn drop(&mut self) {
            SINK_OVERRIDE.with(|cell| {
                *cell.borrow_mut() = self.0;
            });
        }
    }

    // SAFETY:
    // - `sink_ptr` is installed only for this dynamic scope
    // - `Guard` restores the previous slot on all exits, including panic
    // - `record` dereferences synchronously and never persists `sink_ptr`
    let sink_ptr = unsafe { std::mem::transmute::<&dyn AssignSink, *const dyn AssignSink>(sink) };
    let prev = SINK_OVERRIDE.with(|cell| {
        let mut slot = cell.borrow_mut();
        slot.replace(sink_ptr)
    });
    let _guard = Guard(prev);

    f()
}

///
/// TESTS
///
