use crate::config::Config;
use crate::error::{FlightMatchError, Result};
use crate::logic::explain::format_quantity;
use crate::logic::{summary, DecisionEngine};
use crate::models::{CargoQuery, Decision, FlightRule, DEPARTURE_FORMAT};
use crate::repository::RuleRepository;
use crate::ui::components::{BoardingPass, FlightTable, SurplusChart};
use crate::ui::render_to_string;
use chrono::{Local, NaiveDateTime, NaiveTime};

const TABLE_WIDTH: u16 = 72;
const PASS_WIDTH: u16 = 48;

/// Ties the rule repository, the decision engine and the text views together.
/// Every command reads a fresh snapshot of the rules.
pub struct App {
    pub config: Config,
    repository: Box<dyn RuleRepository>,
    engine: DecisionEngine,
}

impl App {
    pub fn new(config: Config, repository: Box<dyn RuleRepository>) -> Self {
        Self {
            config,
            repository,
            engine: DecisionEngine::new(),
        }
    }

    fn unit(&self) -> &str {
        &self.config.display.weight_unit
    }

    pub fn decide(&self, query: &CargoQuery, now: NaiveDateTime) -> Result<Decision> {
        let rules = self.repository.load()?;
        self.engine.decide(&rules, query, now)
    }

    pub fn find(&self, query: &CargoQuery, now: NaiveDateTime) -> Result<String> {
        Ok(match self.decide(query, now)? {
            Decision::Selected {
                flight,
                explanation,
                ..
            } => format!("Recommended Flight: {}\n{}", flight.flight, explanation),
            Decision::NoMatch { reason } => format!("No match: {}", reason),
        })
    }

    pub fn list(&self, query: &CargoQuery, now: NaiveDateTime) -> Result<String> {
        let rules = self.repository.load()?;
        let ranked = self.engine.ranked(&rules, query, now)?;
        if ranked.is_empty() {
            return Ok("No available flights match the criteria.".to_string());
        }

        let table = FlightTable::new(&ranked)
            .unit(self.unit())
            .title(format!(
                "Available Flights to {} for {} {}",
                query.destination,
                format_quantity(query.weight),
                self.unit()
            ));
        let height = table.height();
        Ok(render_to_string(table, TABLE_WIDTH, height))
    }

    pub fn chart(&self, query: &CargoQuery, now: NaiveDateTime) -> Result<String> {
        let rules = self.repository.load()?;
        let ranked = self.engine.ranked(&rules, query, now)?;
        if ranked.is_empty() {
            return Ok("No available flights to chart.".to_string());
        }

        let display = &self.config.display;
        let chart = SurplusChart::new(&ranked).unit(self.unit());
        Ok(render_to_string(
            chart,
            display.chart_width.max(10),
            display.chart_height.max(5),
        ))
    }

    pub fn book(&self, query: &CargoQuery, now: NaiveDateTime) -> Result<String> {
        match self.decide(query, now)? {
            Decision::Selected { flight, .. } => Ok(render_to_string(
                BoardingPass::new(&flight).unit(self.unit()),
                PASS_WIDTH,
                BoardingPass::HEIGHT,
            )),
            Decision::NoMatch { reason } => Ok(format!("No flight recommended to book: {}", reason)),
        }
    }

    pub fn destinations(&self) -> Result<String> {
        let rules = self.repository.load()?;
        let names = summary::destinations(&rules);
        if names.is_empty() {
            return Ok("No flights on record.".to_string());
        }

        let width = names.iter().map(|n| n.chars().count()).max().unwrap_or(0);
        let lines: Vec<String> = names
            .iter()
            .filter_map(|name| {
                summary::capacity_range(&rules, name).map(|range| {
                    format!(
                        "{:<width$}  Allowed weight: {}–{} {} ({} flights)",
                        name,
                        format_quantity(range.min),
                        format_quantity(range.max),
                        self.unit(),
                        range.flights,
                        width = width
                    )
                })
            })
            .collect();

        Ok(lines.join("\n"))
    }

    pub fn add_flight(&self, rule: FlightRule) -> Result<()> {
        self.repository.append(rule)
    }
}

/// Evaluation instant: now, or today at `HH:MM` when given.
pub fn resolve_now(at: Option<&str>) -> Result<NaiveDateTime> {
    let now = Local::now().naive_local();
    match at {
        None => Ok(now),
        Some(text) => {
            let time = NaiveTime::parse_from_str(text.trim(), DEPARTURE_FORMAT).map_err(|_| {
                FlightMatchError::InvalidQuery(format!("time '{}' is not HH:MM", text.trim()))
            })?;
            Ok(now.date().and_time(time))
        }
    }
}
