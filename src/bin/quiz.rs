//! Terminal Quiz Binary
//!
//! Deals preflop spots, asks for an action, and grades the answer with the
//! same judge and coach the server uses.

use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use preflop_quiz::coaching::Coach;
use preflop_quiz::coaching::Context;
use preflop_quiz::coaching::Explainer;
use preflop_quiz::coaching::OpenAi;
use preflop_quiz::quiz::Round;
use preflop_quiz::quiz::Score;
use preflop_quiz::settings::Settings;
use preflop_quiz::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Practice preflop decisions in the terminal", long_about = None)]
struct Args {
    /// Seed for a reproducible sequence of deals.
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many questions.
    #[arg(long)]
    rounds: Option<usize>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    let args = Args::parse();
    let settings = Settings::from_env();
    let coach = OpenAi::new(&settings.coach)
        .inspect_err(|e| log::warn!("{}; explanations will use the fallback text", e))
        .ok()
        .map(|coach| Arc::new(coach) as Arc<dyn Coach>);
    let explainer = Explainer::new(coach, settings.coach.deadline);
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut score = Score::default();
    while args.rounds.is_none_or(|n| score.answered() < n) {
        let round = Round::deal(&mut rng)?;
        println!();
        println!("{} {}", "SEAT".bold(), round.seat());
        println!("{} {}", "VS".bold(), round.opponent());
        println!("   {}", round.opponent().notes().dimmed());
        let options = round.options();
        let selection = Select::new()
            .with_prompt(format!("YOU HOLD {}", round.hole()))
            .report(false)
            .items(&options)
            .default(0)
            .interact_opt()?;
        let Some(selection) = selection else {
            break;
        };
        let answer = options[selection].as_str();
        let table = round.table();
        let verdict = round.judge(answer);
        score.record(&verdict);
        match verdict.is_correct() {
            true => println!("{}", verdict.to_string().green()),
            false => println!("{}", verdict.to_string().red()),
        }
        print!("{}", table);
        let context = Context::judged(
            round.hole(),
            answer,
            round.seat(),
            round.opponent().clone(),
            table,
            &verdict,
        );
        println!("{}", explainer.explain(&context).await.text.italic());
        println!("{} {}", "SCORE".bold(), score);
    }
    log::info!("final score {}", score);
    Ok(())
}
