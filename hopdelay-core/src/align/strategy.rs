use crate::align::decision::AlignDecision;

/// Decides, from the signed `after - before` delay of the current pair, whether the pair is
/// a true match or which side to skip.
pub trait AlignmentStrategy: Send + Sync {
    fn decide(&self, delay: i64) -> AlignDecision;
}
