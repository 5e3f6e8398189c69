pub mod json_file;
pub mod memory;

pub use json_file::JsonRuleRepository;
pub use memory::MemoryRuleRepository;

use crate::error::{FlightMatchError, Result};
use crate::models::FlightRule;

/// Storage for the flight rule set.
///
/// `load` returns an owned snapshot; callers evaluate against it while other
/// threads may `append`.
pub trait RuleRepository: Send + Sync {
    fn load(&self) -> Result<Vec<FlightRule>>;

    fn append(&self, rule: FlightRule) -> Result<()>;
}

/// Rejects the whole set if any record is malformed, naming the first one.
fn validate_all(rules: &[FlightRule]) -> Result<()> {
    for (index, rule) in rules.iter().enumerate() {
        rule.validate().map_err(|e| match e {
            FlightMatchError::InvalidRule(msg) => {
                FlightMatchError::InvalidRule(format!("record {}: {}", index, msg))
            }
            other => other,
        })?;
    }
    Ok(())
}
