//! Quiz Server Binary
//!
//! Serves the evaluation, explanation and dealing endpoints over HTTP.
//! The coach is enabled only when a usable completion API key is set.

use clap::Parser;
use preflop_quiz::coaching::Coach;
use preflop_quiz::coaching::Explainer;
use preflop_quiz::coaching::OpenAi;
use preflop_quiz::hosting::Server;
use preflop_quiz::settings::Settings;
use preflop_quiz::*;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Serve the preflop quiz API", long_about = None)]
struct Args {
    /// Address to listen on, overriding BIND_ADDR.
    #[arg(long)]
    bind: Option<String>,
    /// Worker threads, overriding SERVER_WORKERS.
    #[arg(long)]
    workers: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    let args = Args::parse();
    let mut settings = Settings::from_env();
    settings.bind = args.bind.unwrap_or(settings.bind);
    settings.workers = args.workers.unwrap_or(settings.workers);
    let coach = match OpenAi::new(&settings.coach) {
        Ok(coach) => {
            log::info!("coach enabled with model {}", settings.coach.model);
            Some(Arc::new(coach) as Arc<dyn Coach>)
        }
        Err(e) => {
            log::warn!("{}; explanations will use the fallback text", e);
            None
        }
    };
    let explainer = Explainer::new(coach, settings.coach.deadline);
    Server::run(settings, explainer).await?;
    Ok(())
}
