// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Estimates win rates for up to five players, for example:
//
// ```bash
// $ cargo r --release --example equity -- \
//     --hand Ace_of_Spades,Ace_of_Hearts \
//     --hand King_of_Spades,King_of_Hearts \
//     --board 2_of_Clubs,7_of_Clubs,Jack_of_Diamonds
// AS AH           82.47%
// KS KH           17.53%
// ```
use clap::Parser;
use rand::{SeedableRng, rngs::SmallRng};

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// Comma separated hole cards for one player, repeat per player.
    #[clap(long, short = 'H', required = true)]
    hand: Vec<String>,
    /// Comma separated community cards.
    #[clap(long, short)]
    board: Option<String>,
    /// Number of simulation trials.
    #[clap(long, short, default_value_t = DEFAULT_TRIALS)]
    trials: u32,
    /// Simulation seed.
    #[clap(long, short, default_value_t = 42)]
    seed: u64,
}

fn parse_cards(list: &str) -> anyhow::Result<Vec<Card>> {
    list.split(',')
        .map(|name| Ok(Card::from_name(name.trim())?))
        .collect()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let mut players = Vec::with_capacity(cli.hand.len());
    for hand in &cli.hand {
        players.push(PlayerHand::new(&parse_cards(hand)?)?);
    }

    let board = match &cli.board {
        Some(board) => parse_cards(board)?,
        None => Vec::default(),
    };

    let mut rng = SmallRng::seed_from_u64(cli.seed);
    let equities = simulate_equity(&players, &board, cli.trials, &mut rng)?;

    for (player, equity) in players.iter().zip(&equities) {
        println!("{:<14} {:6.2}%", player.to_string(), equity.win_rate() * 100.0);
    }

    Ok(())
}
