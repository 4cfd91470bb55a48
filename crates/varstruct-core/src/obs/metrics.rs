use std::{cell::RefCell, collections::BTreeMap};

///
/// AssignState
/// Ephemeral, thread-local counters for checked field assignment.
///

#[derive(Clone, Debug, Default)]
pub(crate) struct AssignState {
    pub accepted: u64,
    pub rejected: u64,
    pub fields: BTreeMap<FieldKey, FieldCounters>,
}

///
/// FieldKey
/// Declaring struct path plus field name.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FieldKey {
    pub owner: &'static str,
    pub field: &'static str,
}

impl FieldKey {
    #[must_use]
    pub const fn new(owner: &'static str, field: &'static str) -> Self {
        Self { owner, field }
    }
}

///
/// FieldCounters
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldCounters {
    pub accepted: u64,
    pub rejected: u64,
}

///
/// AssignReport
/// Point-in-time snapshot of the assignment counters for this thread.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AssignReport {
    pub accepted: u64,
    pub rejected: u64,

    /// Per declared field, sorted by rejection count (highest first), then
    /// owner and name.
    pub fields: Vec<(FieldKey, FieldCounters)>,
}

impl AssignReport {
    /// Counters for `name` as declared by the struct at `owner`.
    #[must_use]
    pub fn field(&self, owner: &str, name: &str) -> Option<FieldCounters> {
        self.fields
            .iter()
            .find(|(key, _)| key.owner == owner && key.field == name)
            .map(|(_, counters)| *counters)
    }

    /// Every entry for `name`, whichever struct declares it.
    pub fn fields_named<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = (FieldKey, FieldCounters)> + 'a {
        self.fields
            .iter()
            .filter(move |(key, _)| key.field == name)
            .copied()
    }
}

thread_local! {
    static ASSIGN_STATE: RefCell<AssignState> = RefCell::new(AssignState::default());
}

/// Borrow counters immutably.
pub(crate) fn with_state<R>(f: impl FnOnce(&AssignState) -> R) -> R {
    ASSIGN_STATE.with(|m| f(&m.borrow()))
}

/// Borrow counters mutably.
pub(crate) fn with_state_mut<R>(f: impl FnOnce(&mut AssignState) -> R) -> R {
    ASSIGN_STATE.with(|m| f(&mut m.borrow_mut()))
}

/// Reset all counters (useful in tests).
pub(crate) fn reset() {
    with_state_mut(|m| *m = AssignState::default());
}

/// Build a sorted report from the current counters.
pub(crate) fn report() -> AssignReport {
    let snap = with_state(Clone::clone);

    let mut fields: Vec<_> = snap.fields.into_iter().collect();
    fields.sort_by(|(a_key, a), (b_key, b)| {
        b.rejected.cmp(&a.rejected).then_with(|| a_key.cmp(b_key))
    });

    AssignReport {
        accepted: snap.accepted,
        rejected: snap.rejected,
        fields,
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    const OWNER: &str = "crate::Sample";

    #[test]
    fn reset_clears_state() {
        with_state_mut(|m| {
            m.accepted = 3;
            m.rejected = 2;
            m.fields.insert(
                FieldKey::new(OWNER, "alpha"),
                FieldCounters {
                    accepted: 3,
                    rejected: 2,
                },
            );
        });

        reset();

        with_state(|m| {
            assert_eq!(m.accepted, 0);
            assert_eq!(m.rejected, 0);
            assert!(m.fields.is_empty());
        });
    }

    #[test]
    fn report_sorts_fields_by_rejections() {
        reset();
        with_state_mut(|m| {
            m.fields.insert(
                FieldKey::new(OWNER, "alpha"),
                FieldCounters {
                    accepted: 5,
                    rejected: 1,
                },
            );
            m.fields.insert(
                FieldKey::new(OWNER, "beta"),
                FieldCounters {
                    accepted: 0,
                    rejected: 4,
                },
            );
            m.fields.insert(
                FieldKey::new(OWNER, "gamma"),
                FieldCounters {
                    accepted: 1,
                    rejected: 1,
                },
            );
        });

        let report = report();
        let order: Vec<_> = report.fields.iter().map(|(key, _)| key.field).collect();

        assert_eq!(order, ["beta", "alpha", "gamma"]);
        assert_eq!(report.field(OWNER, "beta").map(|c| c.rejected), Some(4));
        assert_eq!(report.field(OWNER, "delta"), None);
        assert_eq!(report.field("crate::Other", "beta"), None);
    }

    #[test]
    fn same_name_under_different_owners_stays_apart() {
        reset();
        with_state_mut(|m| {
            m.fields.insert(
                FieldKey::new("crate::Base", "field1"),
                FieldCounters {
                    accepted: 1,
                    rejected: 0,
                },
            );
            m.fields.insert(
                FieldKey::new("crate::Other", "field1"),
                FieldCounters {
                    accepted: 0,
                    rejected: 1,
                },
            );
        });

        let report = report();

        assert_eq!(report.fields_named("field1").count(), 2);
        assert_eq!(
            report.field("crate::Base", "field1"),
            Some(FieldCounters {
                accepted: 1,
                rejected: 0,
            })
        );
        assert_eq!(
            report.field("crate::Other", "field1"),
            Some(FieldCounters {
                accepted: 0,
                rejected: 1,
            })
        );
    }
}
