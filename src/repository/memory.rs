use super::{validate_all, RuleRepository};
use crate::error::Result;
use crate::models::FlightRule;
use std::sync::{Arc, RwLock};

/// In-process rule set. `load` copies the current rules out, so an `append`
/// after the copy never shows up in an evaluation already running on it.
#[derive(Debug, Default)]
pub struct MemoryRuleRepository {
    rules: Arc<RwLock<Vec<FlightRule>>>,
}

impl MemoryRuleRepository {
    pub fn new(rules: Vec<FlightRule>) -> Result<Self> {
        validate_all(&rules)?;
        Ok(Self {
            rules: Arc::new(RwLock::new(rules)),
        })
    }

    pub fn len(&self) -> usize {
        self.rules
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RuleRepository for MemoryRuleRepository {
    fn load(&self) -> Result<Vec<FlightRule>> {
        Ok(self
            .rules
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone())
    }

    fn append(&self, rule: FlightRule) -> Result<()> {
        rule.validate()?;
        self.rules
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(rule);
        Ok(())
    }
}

impl Clone for MemoryRuleRepository {
    fn clone(&self) -> Self {
        Self {
            rules: Arc::clone(&self.rules),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::DecisionEngine;
    use crate::models::{CargoQuery, Decision};
    use chrono::NaiveDate;

    #[test]
    fn rejects_malformed_seed() {
        let bad = vec![FlightRule::new("F1", "", 1.0, "10:00", 1.0)];
        assert!(MemoryRuleRepository::new(bad).is_err());
    }

    #[test]
    fn snapshot_is_unaffected_by_later_append() {
        let repo =
            MemoryRuleRepository::new(vec![FlightRule::new("F1", "Paris", 500.0, "23:59", 10.0)])
                .unwrap();
        let snapshot = repo.load().unwrap();
        repo.append(FlightRule::new("F2", "Paris", 450.0, "23:59", 1.0))
            .unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(repo.len(), 2);
    }

    #[test]
    fn concurrent_decisions_with_appends() {
        let repo = MemoryRuleRepository::new(vec![
            FlightRule::new("F1", "Paris", 500.0, "23:59", 10.0),
            FlightRule::new("F2", "Paris", 480.0, "23:59", 5.0),
        ])
        .unwrap();
        let engine = DecisionEngine::new();
        let now = NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        let query = CargoQuery::new(450.0, "Paris").unwrap();

        std::thread::scope(|s| {
            let writer = repo.clone();
            s.spawn(move || {
                for i in 0..50 {
                    // Larger capacity than F2, so never the winner.
                    writer
                        .append(FlightRule::new(format!("X{}", i), "Paris", 900.0, "23:59", 0.0))
                        .unwrap();
                }
            });

            for _ in 0..4 {
                let reader = repo.clone();
                let query = query.clone();
                s.spawn(move || {
                    for _ in 0..50 {
                        let rules = reader.load().unwrap();
                        let decision = engine.decide(&rules, &query, now).unwrap();
                        match decision {
                            Decision::Selected { flight, surplus, .. } => {
                                assert_eq!(flight.flight, "F2");
                                assert_eq!(surplus, 30.0);
                            }
                            other => panic!("unexpected {:?}", other),
                        }
                    }
                });
            }
        });

        assert_eq!(repo.len(), 52);
    }
}
