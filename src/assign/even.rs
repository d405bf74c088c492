use super::Engine;
use crate::error::AssignError;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Cut `items` into `parts` contiguous chunks whose sizes differ by at most one
pub(crate) fn split_evenly<T: Clone>(items: &[T], parts: usize) -> Vec<Vec<T>> {
    if parts == 0 {
        return Vec::new();
    }

    let div = items.len() as f64 / parts as f64;
    let bound = |i: usize| ((div * i as f64).round() as usize).min(items.len());

    (0..parts)
        .map(|i| items[bound(i)..bound(i + 1)].to_vec())
        .collect()
}

impl Engine {
    /// Hand every committer to exactly one reviewer. Chunks are paired with
    /// reviewers at random, and groups are not taken into account.
    pub fn assign_evenly(&mut self) -> Result<(), AssignError> {
        if self.reviewers.is_empty() {
            return Err(AssignError::NoReviewers);
        }

        self.committers.shuffle(&mut self.rng);
        let mut chunks = split_evenly(&self.committers, self.assignments.entries.len());

        let mut reviewers: Vec<_> = self.assignments.iter().map(|a| a.reviewer.clone()).collect();
        reviewers.shuffle(&mut self.rng);

        for reviewer in reviewers {
            let pick = self.rng.gen_range(0..chunks.len());
            let chunk = chunks.swap_remove(pick);
            debug!("{} gets {} committers", reviewer, chunk.len());

            for committer in &chunk {
                if reviewer.shares_group_with(committer) {
                    warn!(
                        "{} and {} are both in group {}",
                        reviewer,
                        committer,
                        committer.group()
                    );
                }
            }
            self.assignments.extend(&reviewer, chunk);
        }

        Ok(())
    }
}
