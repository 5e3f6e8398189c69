use super::{validate_all, RuleRepository};
use crate::error::{FlightMatchError, Result};
use crate::models::FlightRule;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Rule set stored as a pretty-printed JSON array.
///
/// Every `load` re-reads the file. Appends from clones of the same
/// repository are serialized.
pub struct JsonRuleRepository {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl JsonRuleRepository {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, rules: &[FlightRule]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        rules.serialize(&mut ser)?;

        // Write beside the target and rename so readers never see a torn file.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, &buf)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl RuleRepository for JsonRuleRepository {
    fn load(&self) -> Result<Vec<FlightRule>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Rules file not found, starting empty");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&self.path)?;
        let rules: Vec<FlightRule> = serde_json::from_str(&content).map_err(|e| {
            FlightMatchError::InvalidRule(format!("{}: {}", self.path.display(), e))
        })?;
        validate_all(&rules)?;

        debug!(path = %self.path.display(), count = rules.len(), "Loaded flight rules");
        Ok(rules)
    }

    fn append(&self, rule: FlightRule) -> Result<()> {
        rule.validate()?;

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut rules = self.load()?;
        info!(flight = %rule.flight, path = %self.path.display(), "Adding flight rule");
        rules.push(rule);
        self.write(&rules)
    }
}

impl Clone for JsonRuleRepository {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            write_lock: Arc::clone(&self.write_lock),
        }
    }
}
