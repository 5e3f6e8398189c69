//! Airline cargo expert system.
//!
//! [`logic::DecisionEngine`] picks the flight with the least spare capacity
//! for a shipment, breaking ties on carbon footprint. Rules come from a
//! [`repository::RuleRepository`]; the [`ui`] widgets render results as text.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logic;
pub mod models;
pub mod repository;
pub mod ui;
