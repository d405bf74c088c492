mod eligibility;
mod even;
mod greedy;

use eligibility::Eligibility;

use crate::error::AssignError;
use crate::roster::Person;
use rand::rngs::StdRng;
use std::collections::HashMap;
use std::fmt;

/// How committers get spread over reviewers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Partition committers into near-equal chunks, one chunk per reviewer
    EvenSplit,
    /// Give every committer up to `min_reviews` reviewers from other groups
    MinimumCoverage { min_reviews: u32 },
}

impl Strategy {
    pub fn from_reviews_per_commit(reviews_per_commit: Option<u32>) -> Self {
        match reviews_per_commit {
            Some(min_reviews) => Strategy::MinimumCoverage { min_reviews },
            None => Strategy::EvenSplit,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::EvenSplit => write!(f, "even_split"),
            Strategy::MinimumCoverage { min_reviews } => {
                write!(f, "minimum_coverage({})", min_reviews)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub reviewer: Person,
    pub committers: Vec<Person>,
}

/// Reviewer -> committers, kept in reviewer roster order
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    entries: Vec<Assignment>,
    index: HashMap<Person, usize>,
}

impl Assignments {
    pub fn new(reviewers: &[Person]) -> Self {
        let mut assignments = Self::default();
        for reviewer in reviewers {
            if assignments.index.contains_key(reviewer) {
                continue;
            }
            assignments
                .index
                .insert(reviewer.clone(), assignments.entries.len());
            assignments.entries.push(Assignment {
                reviewer: reviewer.clone(),
                committers: Vec::new(),
            });
        }
        assignments
    }

    pub fn committers_for(&self, reviewer: &Person) -> &[Person] {
        self.index
            .get(reviewer)
            .map(|&i| self.entries[i].committers.as_slice())
            .unwrap_or(&[])
    }

    /// Number of committers currently assigned to a reviewer
    pub fn load(&self, reviewer: &Person) -> usize {
        self.committers_for(reviewer).len()
    }

    pub fn contains(&self, reviewer: &Person, committer: &Person) -> bool {
        self.committers_for(reviewer).contains(committer)
    }

    /// All reviewers, including those with nothing to review
    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter()
    }

    /// Reviewers with at least one committer
    pub fn non_empty(&self) -> impl Iterator<Item = &Assignment> {
        self.entries.iter().filter(|a| !a.committers.is_empty())
    }

    fn entry_mut(&mut self, reviewer: &Person) -> Option<&mut Assignment> {
        let idx = *self.index.get(reviewer)?;
        self.entries.get_mut(idx)
    }

    pub(crate) fn push(&mut self, reviewer: &Person, committer: Person) {
        if let Some(entry) = self.entry_mut(reviewer) {
            entry.committers.push(committer);
        }
    }

    pub(crate) fn extend(&mut self, reviewer: &Person, committers: Vec<Person>) {
        if let Some(entry) = self.entry_mut(reviewer) {
            entry.committers.extend(committers);
        }
    }
}

/// Owns everything one run needs: rosters, eligibility and the growing
/// assignment map.
pub struct Engine {
    committers: Vec<Person>,
    reviewers: Vec<Person>,
    eligibility: Eligibility,
    assignments: Assignments,
    rng: StdRng,
}

impl Engine {
    pub fn new(committers: Vec<Person>, reviewers: Vec<Person>, rng: StdRng) -> Self {
        let assignments = Assignments::new(&reviewers);
        let eligibility = Eligibility::compute(&committers, &reviewers, &assignments);

        Self {
            committers,
            reviewers,
            eligibility,
            assignments,
            rng,
        }
    }

    pub fn run(&mut self, strategy: Strategy) -> Result<(), AssignError> {
        match strategy {
            Strategy::EvenSplit => self.assign_evenly(),
            Strategy::MinimumCoverage { min_reviews } => {
                self.divide_reviews(min_reviews);
                Ok(())
            }
        }
    }

    #[cfg(test)]
    pub fn eligibility(&self) -> &Eligibility {
        &self.eligibility
    }

    #[cfg(test)]
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn into_assignments(self) -> Assignments {
        self.assignments
    }
}
