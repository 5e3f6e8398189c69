use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "flightmatch",
    version,
    about = "Airline cargo expert system: find the best flight for a shipment"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the flight rules JSON file
    #[arg(short, long, global = true)]
    pub rules: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend the best flight for a shipment
    Find(QueryArgs),
    /// List every eligible flight, best first
    List(QueryArgs),
    /// Chart surplus capacity of every eligible flight
    Chart(QueryArgs),
    /// Recommend a flight and print its boarding pass
    Book(QueryArgs),
    /// Show known destinations and their allowed cargo weight
    Destinations,
    /// Add a flight rule (prompts for missing fields)
    Add(AddArgs),
    /// Interactive configuration setup
    Init,
}

#[derive(Args)]
pub struct QueryArgs {
    /// Cargo weight in kilograms
    #[arg(allow_hyphen_values = true)]
    pub weight: String,

    /// Destination city
    pub destination: String,

    /// Evaluate as of today at HH:MM instead of now
    #[arg(long)]
    pub at: Option<String>,
}

#[derive(Args, Default)]
pub struct AddArgs {
    #[arg(long)]
    pub flight: Option<String>,

    #[arg(long)]
    pub destination: Option<String>,

    #[arg(long)]
    pub max_weight: Option<String>,

    #[arg(long)]
    pub airport_code: Option<String>,

    /// Departure time, HH:MM
    #[arg(long)]
    pub departure_time: Option<String>,

    #[arg(long)]
    pub carbon_footprint: Option<String>,
}
