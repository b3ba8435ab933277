use crate::align::cadence::CadenceCheck;
use crate::align::decision::AlignDecision;
use crate::align::strategy::AlignmentStrategy;
use crate::align::types::MatchedPair;
use crate::event::{Channel, Event};
use serde::Serialize;
use tracing::debug;

/// Two-pointer walk over the before/after sequences.
pub struct StreamAligner {
    strategy: Box<dyn AlignmentStrategy>,
    cadence: CadenceCheck,
}

/// Cursor pair for a single pass. Both indexes only ever move forward.
#[derive(Debug, Clone, Copy, Default)]
struct AlignerCursor {
    i: usize,
    j: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentCounts {
    pub before_events: usize,
    pub after_events: usize,
    pub dropped_before: usize,
    pub dropped_after: usize,
    /// Left unconsumed once the other side ran out.
    pub trailing_before: usize,
    pub trailing_after: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Alignment {
    pub pairs: Vec<MatchedPair>,
    pub counts: AlignmentCounts,
}

impl StreamAligner {
    pub fn new(strategy: impl AlignmentStrategy + 'static) -> Self {
        Self {
            strategy: Box::new(strategy),
            cadence: CadenceCheck::Off,
        }
    }

    pub fn with_cadence(mut self, cadence: CadenceCheck) -> Self {
        self.cadence = cadence;
        self
    }

    /// Pairs `before[i]` with `after[j]` until either side is exhausted.
    ///
    /// Running out of events is the normal end of the pass; whatever is left on the longer
    /// side is counted as trailing and discarded.
    pub fn align(&self, before: &[Event], after: &[Event]) -> Alignment {
        let mut cursor = AlignerCursor::default();
        let mut pairs: Vec<MatchedPair> = Vec::with_capacity(before.len().min(after.len()));
        let mut counts = AlignmentCounts {
            before_events: before.len(),
            after_events: after.len(),
            ..AlignmentCounts::default()
        };

        while cursor.i < before.len() && cursor.j < after.len() {
            let b = before[cursor.i].composite_time;
            let a = after[cursor.j].composite_time;
            let delay = b.delay_to(a);

            match self.strategy.decide(delay) {
                AlignDecision::Match => {
                    let class = self.cadence.classify(pairs.last(), a, delay);
                    pairs.push(MatchedPair::new(b, a, class));
                    cursor.i += 1;
                    cursor.j += 1;
                }
                AlignDecision::Drop(Channel::Before) => {
                    counts.dropped_before += 1;
                    cursor.i += 1;
                }
                AlignDecision::Drop(Channel::After) => {
                    counts.dropped_after += 1;
                    cursor.j += 1;
                }
            }
        }

        counts.trailing_before = before.len() - cursor.i;
        counts.trailing_after = after.len() - cursor.j;

        debug!(
            matched = pairs.len(),
            dropped_before = counts.dropped_before,
            dropped_after = counts.dropped_after,
            trailing_before = counts.trailing_before,
            trailing_after = counts.trailing_after,
            "alignment pass finished"
        );

        Alignment { pairs, counts }
    }
}
