use crate::error::DelayError;
use crate::run::pipeline::{RunReport, execute};
use crate::run::profile::RunProfile;
use std::thread;

pub struct BatchOutcome {
    pub name: String,
    pub result: Result<RunReport, DelayError>,
}

/// Executes every profile on its own scoped thread.
///
/// Outcomes come back in profile order. A failed run does not affect the others.
pub fn execute_batch(profiles: &[RunProfile]) -> Vec<BatchOutcome> {
    thread::scope(|scope| {
        let handles: Vec<_> = profiles
            .iter()
            .map(|profile| scope.spawn(move || execute(profile)))
            .collect();

        handles
            .into_iter()
            .zip(profiles)
            .map(|(handle, profile)| BatchOutcome {
                name: profile.name.clone(),
                result: handle
                    .join()
                    .unwrap_or_else(|panic| std::panic::resume_unwind(panic)),
            })
            .collect()
    })
}
