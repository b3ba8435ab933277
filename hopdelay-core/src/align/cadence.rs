use crate::align::types::MatchedPair;
use crate::event::CompositeTimestamp;
use serde::Serialize;

/// Optional secondary signal computed from consecutive matches.
///
/// It never changes which pairs match; it only tags each pair so the summary can split
/// back-to-back bursts ("fast" packets) from evenly spaced traffic ("interval" packets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CadenceCheck {
    #[default]
    Off,
    /// Interval when the delay strictly increased over the previous match.
    IncreasingDelay,
    /// Interval when the after-side gap to the previous match is below `max_gap` nanoseconds.
    AfterGap { max_gap: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "class", rename_all = "snake_case")]
pub enum MatchClass {
    Fast,
    Interval { step: i64 },
}

impl CadenceCheck {
    pub(crate) fn classify(
        &self,
        previous: Option<&MatchedPair>,
        after: CompositeTimestamp,
        delay: i64,
    ) -> Option<MatchClass> {
        match self {
            CadenceCheck::Off => None,
            CadenceCheck::IncreasingDelay => Some(match previous {
                Some(prev) if delay > prev.delay() => MatchClass::Interval {
                    step: delay.saturating_sub(prev.delay()),
                },
                _ => MatchClass::Fast,
            }),
            CadenceCheck::AfterGap { max_gap } => Some(match previous {
                Some(prev) => {
                    let gap = prev.after().delay_to(after);
                    if gap < *max_gap {
                        MatchClass::Interval { step: gap }
                    } else {
                        MatchClass::Fast
                    }
                }
                None => MatchClass::Fast,
            }),
        }
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, CadenceCheck::Off)
    }
}
