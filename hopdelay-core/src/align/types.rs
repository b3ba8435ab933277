use crate::align::cadence::MatchClass;
use crate::event::CompositeTimestamp;
use serde::Serialize;

/// One accepted before/after pair. Only the aligner creates these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchedPair {
    before: CompositeTimestamp,
    after: CompositeTimestamp,
    delay: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<MatchClass>,
}

impl MatchedPair {
    pub(crate) fn new(
        before: CompositeTimestamp,
        after: CompositeTimestamp,
        class: Option<MatchClass>,
    ) -> Self {
        Self {
            before,
            after,
            delay: before.delay_to(after),
            class,
        }
    }

    pub fn before(&self) -> CompositeTimestamp {
        self.before
    }

    pub fn after(&self) -> CompositeTimestamp {
        self.after
    }

    /// `after - before`, in nanoseconds. Negative when the after side logged first.
    pub fn delay(&self) -> i64 {
        self.delay
    }

    /// Present only when a cadence check was configured.
    pub fn class(&self) -> Option<MatchClass> {
        self.class
    }
}
