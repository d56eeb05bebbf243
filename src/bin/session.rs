//! Session Binary
//!
//! Runs one complete session in-process: bots (and optionally one person
//! at the terminal) play every round, then the admin report, payments,
//! and the full JSON export are printed.

use clap::Parser;
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;
use trustgame::config::Config;
use trustgame::participants::Bot;
use trustgame::participants::Human;
use trustgame::report::Report;
use trustgame::room::Room;
use trustgame::session::Session;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "JSON session config (defaults to the demo session)")]
    config: Option<PathBuf>,
    #[arg(long, help = "Number of participants (defaults to the config's demo count)")]
    participants: Option<usize>,
    #[arg(long, help = "Seed for grouping and bots")]
    seed: Option<u64>,
    #[arg(long, help = "Play seat 0 from this terminal")]
    human: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    trustgame::log()?;
    let args = Args::parse();
    let config = match args.config {
        Some(ref path) => Config::load(path)?,
        None => Config::default(),
    };
    let participants = args.participants.unwrap_or(config.num_demo_participants);
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);
    let ref mut rng = SmallRng::seed_from_u64(seed);
    let session = Session::create(config, participants, rng)?;
    let mut room = Room::from(session);
    for position in 0..participants {
        match (position, args.human) {
            (0, true) => room.sit(Human),
            _ => room.sit(Bot::from(seed.wrapping_add(position as u64 + 1))),
        }
    }
    let session = room.run().await?;
    let report = Report::from(&session);
    for round in report.rounds.iter() {
        println!("{}", round.to_string().cyan());
    }
    for payment in report.payments.iter() {
        println!("{}", payment.to_string().green());
    }
    println!("{}", report.to_json()?);
    Ok(())
}
