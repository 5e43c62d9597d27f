mod config;
mod wiring;

use std::error::Error;

use clap::Parser;
use submit::{FormInput, SimulationForm};

/// Live stock simulation console: subscribes to the price feed, submits one
/// simulation request, and renders the resulting series as a text chart.
#[derive(Debug, Parser)]
#[command(name = "sim-console")]
struct Args {
    /// Stock name
    #[arg(long)]
    name: String,

    /// Initial price
    #[arg(long)]
    initial_price: String,

    /// Number of users subscribed to the stock
    #[arg(long)]
    subscribers: String,

    /// Simulation duration in seconds
    #[arg(long)]
    duration: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = config::Config::from_env()?;
    let form = SimulationForm::parse(&FormInput {
        name: args.name,
        initial_price: args.initial_price,
        subscribers: args.subscribers,
        duration: args.duration,
    })?;

    wiring::run_session(config, form).await
}
