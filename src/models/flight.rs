use crate::error::{FlightMatchError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Format used for `departure_time` in the rules file and on the command line.
pub const DEPARTURE_FORMAT: &str = "%H:%M";

/// A scheduled cargo flight, the record the decision engine matches against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightRule {
    pub flight: String,
    pub destination: String,
    /// Cargo capacity in kilograms.
    pub max_weight: f64,
    #[serde(default)]
    pub airport_code: String,
    /// Time of day, `HH:MM`. Kept as text so a malformed value only makes
    /// this flight unavailable instead of failing the whole rule set.
    pub departure_time: String,
    pub carbon_footprint: f64,
}

impl FlightRule {
    pub fn new(
        flight: impl Into<String>,
        destination: impl Into<String>,
        max_weight: f64,
        departure_time: impl Into<String>,
        carbon_footprint: f64,
    ) -> Self {
        Self {
            flight: flight.into(),
            destination: destination.into(),
            max_weight,
            airport_code: String::new(),
            departure_time: departure_time.into(),
            carbon_footprint,
        }
    }

    pub fn with_airport_code(mut self, code: impl Into<String>) -> Self {
        self.airport_code = code.into();
        self
    }

    /// Parsed departure time, `None` when the stored text is not `HH:MM`.
    pub fn departure(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.departure_time.trim(), DEPARTURE_FORMAT).ok()
    }

    /// Lower-cased key used for destination comparison.
    pub fn destination_key(&self) -> String {
        self.destination.to_lowercase()
    }

    /// Structural checks applied when a record enters or leaves the repository.
    ///
    /// The departure time is deliberately not checked here; see
    /// [`crate::logic::availability::is_available`].
    pub fn validate(&self) -> Result<()> {
        if self.flight.trim().is_empty() {
            return Err(FlightMatchError::InvalidRule("flight is empty".into()));
        }
        if self.destination.trim().is_empty() {
            return Err(FlightMatchError::InvalidRule(format!(
                "flight {} has an empty destination",
                self.flight
            )));
        }
        if !self.max_weight.is_finite() || self.max_weight < 0.0 {
            return Err(FlightMatchError::InvalidRule(format!(
                "flight {} has invalid max_weight {}",
                self.flight, self.max_weight
            )));
        }
        if !self.carbon_footprint.is_finite() {
            return Err(FlightMatchError::InvalidRule(format!(
                "flight {} has invalid carbon_footprint {}",
                self.flight, self.carbon_footprint
            )));
        }
        Ok(())
    }
}

/// Raw administrative input for a new flight, as typed by an operator.
#[derive(Debug, Clone, Default)]
pub struct NewFlightInput {
    pub flight: String,
    pub destination: String,
    pub max_weight: String,
    pub airport_code: String,
    pub departure_time: String,
    pub carbon_footprint: String,
}

impl NewFlightInput {
    pub fn into_rule(self) -> Result<FlightRule> {
        let max_weight = parse_number("max weight", &self.max_weight)?;
        let carbon_footprint = parse_number("carbon footprint", &self.carbon_footprint)?;

        let departure_time = self.departure_time.trim().to_string();
        if NaiveTime::parse_from_str(&departure_time, DEPARTURE_FORMAT).is_err() {
            return Err(FlightMatchError::InvalidRule(format!(
                "departure time '{}' is not HH:MM",
                departure_time
            )));
        }

        let rule = FlightRule {
            flight: self.flight.trim().to_string(),
            destination: self.destination.trim().to_string(),
            max_weight,
            airport_code: self.airport_code.trim().to_string(),
            departure_time,
            carbon_footprint,
        };
        rule.validate()?;
        Ok(rule)
    }
}

fn parse_number(field: &str, value: &str) -> Result<f64> {
    value.trim().parse::<f64>().map_err(|_| {
        FlightMatchError::InvalidRule(format!("{} '{}' is not a number", field, value.trim()))
    })
}
