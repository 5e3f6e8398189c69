use crate::error::{FlightMatchError, Result};

/// A shipment looking for a flight: cargo weight in kilograms and destination.
#[derive(Debug, Clone, PartialEq)]
pub struct CargoQuery {
    pub weight: f64,
    pub destination: String,
}

impl CargoQuery {
    pub fn new(weight: f64, destination: impl Into<String>) -> Result<Self> {
        let query = Self {
            weight,
            destination: destination.into().trim().to_string(),
        };
        query.validate()?;
        Ok(query)
    }

    /// Build a query from user-entered text.
    pub fn parse(weight: &str, destination: &str) -> Result<Self> {
        let weight = weight.trim().parse::<f64>().map_err(|_| {
            FlightMatchError::InvalidQuery(format!("weight '{}' is not a number", weight.trim()))
        })?;
        Self::new(weight, destination)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.weight.is_finite() {
            return Err(FlightMatchError::InvalidQuery(format!(
                "weight {} is not a finite number",
                self.weight
            )));
        }
        if self.weight < 0.0 {
            return Err(FlightMatchError::InvalidQuery(format!(
                "weight {} is negative",
                self.weight
            )));
        }
        if self.destination.trim().is_empty() {
            return Err(FlightMatchError::InvalidQuery(
                "destination is empty".into(),
            ));
        }
        Ok(())
    }

    pub fn destination_key(&self) -> String {
        self.destination.to_lowercase()
    }
}
