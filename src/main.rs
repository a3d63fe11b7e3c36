use clap::Parser;

use compound::api::{self, Cli};
use compound::telemetry;

#[tokio::main]
async fn main() {
    if !telemetry::init_tracing() {
        tracing::debug!("tracing subscriber already installed; keeping it");
    }
    let cli = Cli::parse();
    if let Err(e) = api::run(cli).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
