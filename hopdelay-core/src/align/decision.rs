use crate::event::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignDecision {
    /// Emit the current pair and advance both cursors.
    Match,
    /// Discard the current event of this channel without emitting anything.
    Drop(Channel),
}
