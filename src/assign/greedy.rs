use super::{Assignments, Engine};
use crate::roster::Person;
use tracing::{debug, warn};

/// Index of the least-loaded reviewer; the earliest one wins a tie
fn least_loaded(eligible: &[Person], assignments: &Assignments) -> Option<usize> {
    eligible
        .iter()
        .enumerate()
        .min_by_key(|(_, reviewer)| assignments.load(reviewer))
        .map(|(idx, _)| idx)
}

impl Engine {
    /// Greedy load balancing: `min_reviews` rounds, each giving every
    /// committer one more reviewer from another group when one is left.
    /// Order-dependent and not optimal.
    pub fn divide_reviews(&mut self, min_reviews: u32) {
        for round in 0..min_reviews {
            debug!("Assignment round {}", round + 1);
            self.assign_round();
        }
    }

    fn assign_round(&mut self) {
        for committer in &self.committers {
            let eligible = self.eligibility.eligible_for(committer);
            let Some(idx) = least_loaded(eligible, &self.assignments) else {
                warn!("no more reviewers for {}", committer);
                continue;
            };

            let reviewer = eligible[idx].clone();
            self.eligibility.remove(committer, &reviewer);
            self.assignments.push(&reviewer, committer.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::{HashMap, HashSet};

    fn engine(committers: Vec<Person>, reviewers: Vec<Person>) -> Engine {
        Engine::new(committers, reviewers, StdRng::seed_from_u64(0))
    }

    fn people(prefix: &str, count: usize, groups: usize) -> Vec<Person> {
        (0..count)
            .map(|i| Person::new(format!("{}{}", prefix, i), format!("team{}", i % groups)))
            .collect()
    }

    fn reviewers_of(assignments: &Assignments) -> HashMap<Person, Vec<Person>> {
        let mut by_committer: HashMap<Person, Vec<Person>> = HashMap::new();
        for assignment in assignments.iter() {
            for committer in &assignment.committers {
                by_committer
                    .entry(committer.clone())
                    .or_default()
                    .push(assignment.reviewer.clone());
            }
        }
        by_committer
    }

    #[test]
    fn test_single_reviewer_takes_everyone() {
        let alice = Person::new("alice", "team1");
        let bob = Person::new("bob", "team2");
        let carl = Person::new("carl", "team3");

        let mut engine = engine(vec![alice.clone(), bob.clone()], vec![carl.clone()]);
        engine.divide_reviews(1);

        let assigned = engine.assignments().committers_for(&carl);
        assert_eq!(assigned.len(), 2);
        assert!(assigned.contains(&alice));
        assert!(assigned.contains(&bob));
    }

    #[test]
    fn test_tie_goes_to_first_eligible() {
        let alice = Person::new("alice", "team1");
        let carl = Person::new("carl", "team3");
        let eve = Person::new("eve", "team2");

        let mut engine = engine(vec![alice.clone()], vec![carl.clone(), eve.clone()]);
        engine.divide_reviews(1);

        assert_eq!(engine.assignments().committers_for(&carl), &[alice]);
        assert!(engine.assignments().committers_for(&eve).is_empty());
    }

    #[test]
    fn test_picks_least_loaded() {
        let carl = Person::new("carl", "team3");
        let eve = Person::new("eve", "team2");
        let committers = vec![
            Person::new("alice", "team1"),
            Person::new("bob", "team1"),
            Person::new("fred", "team1"),
        ];

        let mut engine = engine(committers, vec![carl.clone(), eve.clone()]);
        engine.divide_reviews(1);

        // carl, eve, carl
        assert_eq!(engine.assignments().load(&carl), 2);
        assert_eq!(engine.assignments().load(&eve), 1);
    }

    #[test]
    fn test_same_group_is_never_chosen() {
        let alice = Person::new("alice", "team1");
        let dana = Person::new("dana", "team1");

        let mut engine = engine(vec![alice], vec![dana.clone()]);
        engine.divide_reviews(3);

        assert!(engine.assignments().committers_for(&dana).is_empty());
    }

    #[test]
    fn test_runs_out_of_reviewers() {
        let alice = Person::new("alice", "team1");
        let carl = Person::new("carl", "team3");

        let mut engine = engine(vec![alice.clone()], vec![carl.clone()]);
        engine.divide_reviews(3);

        assert_eq!(engine.assignments().committers_for(&carl), &[alice]);
    }

    #[test]
    fn test_coverage_properties() {
        let committers = people("c", 17, 4);
        let reviewers = people("r", 9, 5);
        let k = 3;

        for seed in 0..5 {
            let mut engine = Engine::new(
                committers.clone(),
                reviewers.clone(),
                StdRng::seed_from_u64(seed),
            );
            engine.divide_reviews(k);

            let by_committer = reviewers_of(engine.assignments());
            for (committer, assigned) in &by_committer {
                let unique: HashSet<_> = assigned.iter().collect();
                assert_eq!(unique.len(), assigned.len(), "duplicate reviewer for {committer}");
                assert!(assigned.len() <= k as usize);
                assert!(assigned.iter().all(|r| !r.shares_group_with(committer)));
            }
            // 9 reviewers over 5 groups leaves every committer at least 7 candidates
            for committer in &committers {
                assert_eq!(by_committer[committer].len(), k as usize);
            }
        }
    }

    #[test]
    fn test_eligibility_never_grows() {
        let committers = people("c", 8, 3);
        let reviewers = people("r", 4, 4);
        let mut engine = engine(committers.clone(), reviewers);

        let mut previous: Vec<usize> = committers
            .iter()
            .map(|c| engine.eligibility().eligible_for(c).len())
            .collect();

        for _ in 0..5 {
            engine.assign_round();
            let current: Vec<usize> = committers
                .iter()
                .map(|c| engine.eligibility().eligible_for(c).len())
                .collect();
            for (before, after) in previous.iter().zip(&current) {
                assert!(after <= before);
            }
            previous = current;
        }
        assert!(previous.iter().all(|&n| n == 0));
    }
}
