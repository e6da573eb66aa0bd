//! Play a round of lotto in the terminal.

use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use rust_lotto::console::{render_cards, Prompt, Seat};
use rust_lotto::core::{LottoConfig, DEFAULT_MISTAKE_RATE};
use rust_lotto::round::{RoundBuilder, RoundEvent, WinReason};

/// Terminal lotto round for humans and bots.
#[derive(Debug, Parser)]
#[command(name = "lotto_cli", version, about = "Play a round of lotto")]
struct Cli {
    /// Seat a player: human:NAME, bot:NAME or bot:NAME@RATE.
    /// Repeat in turn order.
    #[arg(long = "player", value_name = "KIND:NAME", required = true)]
    seats: Vec<Seat>,

    /// Seed for cards, draws and bot mistakes.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Probability that a bot gets a decision wrong.
    #[arg(long, value_name = "RATE", default_value_t = DEFAULT_MISTAKE_RATE)]
    mistake_rate: f64,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    let config = LottoConfig::default()
        .with_seed(seed)
        .with_mistake_rate(cli.mistake_rate);

    let mut round = cli
        .seats
        .into_iter()
        .fold(RoundBuilder::new(config), |builder, seat| seat.register(builder))
        .build()
        .context("setting up the round")?;

    let names: Vec<String> = round.players().iter().map(|p| p.name().to_string()).collect();
    let roster: Vec<String> = round
        .players()
        .iter()
        .map(|p| format!("{} ({})", p.name(), if p.is_human() { "human" } else { "bot" }))
        .collect();
    println!("Round starts (seed {}). Players: {}", seed, roster.join(", "));
    println!("{}\n", render_cards(&round.active_views()));

    let mut prompt = Prompt::new(io::stdin().lock(), io::stdout());
    let mut report = |event: &RoundEvent| report_event(&names, event);

    while !round.state().is_terminal() {
        round.step(&mut prompt, &mut report)?;
        if let Some(err) = prompt.take_error() {
            bail!("stopped after draw {}: {}", round.draws(), err);
        }
        if !round.state().is_terminal() {
            println!("{}\n", render_cards(&round.active_views()));
        }
    }

    let outcome = round.outcome().context("round ended without an outcome")?;
    println!("{}", render_cards(&round.players().iter().map(|p| p.view()).collect::<Vec<_>>()));
    match outcome.winner_name {
        Some(name) => println!("{} wins after {} draws.", name, outcome.draws),
        None => println!("No winner after {} draws.", outcome.draws),
    }

    Ok(())
}

fn report_event(names: &[String], event: &RoundEvent) {
    let name = |id: rust_lotto::PlayerId| names.get(id.index()).map_or("?", String::as_str);

    match event {
        RoundEvent::NumberDrawn { draw, number } => println!("Draw {}: number {}", draw, number),
        RoundEvent::Struck { player, number, pos } => {
            println!("{} strikes {} at {}", name(*player), number, pos)
        }
        RoundEvent::Missed { player, number, .. } => {
            println!("{} missed {}, which is on their card", name(*player), number)
        }
        RoundEvent::FalseStrike { player, number } => {
            println!("{} tried to strike {}, which is not on their card", name(*player), number)
        }
        RoundEvent::Eliminated { player, .. } => println!("{} is out of the round!", name(*player)),
        RoundEvent::Won { player, reason: WinReason::CompletedCard } => {
            println!("Congratulations! {} filled their card!", name(*player))
        }
        RoundEvent::Won { player, reason: WinReason::Attrition } => {
            println!("Only {} is left and takes the round.", name(*player))
        }
        RoundEvent::PoolExhausted => println!("The bag is empty. It's a draw."),
        RoundEvent::NoPlayersLeft => println!("Nobody is left. It's a draw."),
        RoundEvent::RoundStarted { .. } | RoundEvent::Skipped { .. } | RoundEvent::CardsUpdated { .. } => {}
    }
}
