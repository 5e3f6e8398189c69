use anyhow::Context;
use clap::Parser;
use dialoguer::Input;
use flightmatch::app::{resolve_now, App};
use flightmatch::cli::{AddArgs, Cli, Commands, QueryArgs};
use flightmatch::config::Config;
use flightmatch::error;
use flightmatch::models::{CargoQuery, NewFlightInput};
use flightmatch::repository::JsonRuleRepository;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let build_app = || -> anyhow::Result<App> {
        let config =
            Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
        let rules_path = config.rules_path(cli.rules.as_ref())?;
        tracing::debug!(path = %rules_path.display(), "Using rules file");
        Ok(App::new(config, Box::new(JsonRuleRepository::open(rules_path))))
    };

    let output = match cli.command {
        Commands::Find(args) => {
            let app = build_app()?;
            run_query(&args, |q, now| app.find(q, now))?
        }
        Commands::List(args) => {
            let app = build_app()?;
            run_query(&args, |q, now| app.list(q, now))?
        }
        Commands::Chart(args) => {
            let app = build_app()?;
            run_query(&args, |q, now| app.chart(q, now))?
        }
        Commands::Book(args) => {
            let app = build_app()?;
            run_query(&args, |q, now| app.book(q, now))?
        }
        Commands::Destinations => build_app()?.destinations()?,
        Commands::Add(args) => {
            let app = build_app()?;
            let rule = prompt_new_flight(args)?
                .into_rule()
                .context("Check the flight fields")?;
            let id = rule.flight.clone();
            app.add_flight(rule).context("Failed to save flight rule")?;
            format!("Flight {} added.", id)
        }
        Commands::Init => {
            // Existing config is not read, so a broken file can be replaced.
            let (_, path) = Config::setup_interactive().context("Setup failed")?;
            format!("Run `flightmatch add` to record flights. Config: {}", path.display())
        }
    };

    println!("{}", output);
    Ok(())
}

fn run_query<F>(args: &QueryArgs, run: F) -> anyhow::Result<String>
where
    F: FnOnce(&CargoQuery, chrono::NaiveDateTime) -> error::Result<String>,
{
    let query = CargoQuery::parse(&args.weight, &args.destination)?;
    let now = resolve_now(args.at.as_deref())?;
    Ok(run(&query, now)?)
}

/// Fill in any field not given on the command line.
fn prompt_new_flight(args: AddArgs) -> anyhow::Result<NewFlightInput> {
    let ask = |value: Option<String>, prompt: &str, allow_empty: bool| -> anyhow::Result<String> {
        match value {
            Some(v) => Ok(v),
            None => Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(allow_empty)
                .interact_text()
                .with_context(|| format!("Failed to read {}", prompt)),
        }
    };

    Ok(NewFlightInput {
        flight: ask(args.flight, "Flight", false)?,
        destination: ask(args.destination, "Destination", false)?,
        max_weight: ask(args.max_weight, "Max Weight", false)?,
        airport_code: ask(args.airport_code, "Airport Code", true)?,
        departure_time: ask(args.departure_time, "Departure Time (HH:MM)", false)?,
        carbon_footprint: ask(args.carbon_footprint, "Carbon Footprint", false)?,
    })
}
