use super::Assignments;
use crate::roster::Person;
use std::collections::HashMap;

/// Which reviewers may still be handed each committer
#[derive(Debug, Clone, Default)]
pub struct Eligibility {
    by_committer: HashMap<Person, Vec<Person>>,
}

impl Eligibility {
    /// Reviewers from a different group who don't already review the committer,
    /// in reviewer roster order
    pub fn compute(committers: &[Person], reviewers: &[Person], assignments: &Assignments) -> Self {
        let by_committer = committers
            .iter()
            .map(|committer| {
                let eligible = reviewers
                    .iter()
                    .filter(|reviewer| {
                        !reviewer.shares_group_with(committer)
                            && !assignments.contains(reviewer, committer)
                    })
                    .cloned()
                    .collect();
                (committer.clone(), eligible)
            })
            .collect();

        Self { by_committer }
    }

    pub fn eligible_for(&self, committer: &Person) -> &[Person] {
        self.by_committer
            .get(committer)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Drop a reviewer so it isn't offered to this committer again
    pub fn remove(&mut self, committer: &Person, reviewer: &Person) {
        if let Some(eligible) = self.by_committer.get_mut(committer) {
            if let Some(pos) = eligible.iter().position(|r| r == reviewer) {
                eligible.remove(pos);
            }
        }
    }
}
