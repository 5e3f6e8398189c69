pub mod availability;
pub mod engine;
pub mod explain;
pub mod filter;
pub mod ranking;
pub mod summary;

pub use engine::DecisionEngine;
