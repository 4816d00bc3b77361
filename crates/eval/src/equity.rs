// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo equity estimation.
//!
//! Every trial builds a fresh deck without the known cards, completes
//! the board with random cards, and credits a win to every player whose
//! best hand ties the trial maximum. With multi-way ties each tied
//! player gets full credit, so reported win rates may sum above 1.0.
use ahash::AHashSet;
use log::debug;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use showdown_cards::{Card, Deck};

use crate::{error::EvalError, hand::PlayerHand};

/// Default number of simulation trials.
pub const DEFAULT_TRIALS: u32 = 10_000;

/// Maximum number of players in a simulation, the table layer seats up
/// to five.
pub const MAX_PLAYERS: usize = 5;

/// Number of community cards on a complete board.
const BOARD_SIZE: usize = 5;

/// Win statistics for one player over a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerEquity {
    wins: u32,
    trials: u32,
}

impl PlayerEquity {
    /// Number of trials this player won or tied.
    pub fn wins(&self) -> u32 {
        self.wins
    }

    /// Number of trials simulated.
    pub fn trials(&self) -> u32 {
        self.trials
    }

    /// The fraction of trials this player won or tied.
    pub fn win_rate(&self) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            f64::from(self.wins) / f64::from(self.trials)
        }
    }
}

/// Estimates each player's probability of winning the showdown.
///
/// `community` holds the board cards already revealed, up to 5; the
/// rest of the board is drawn fresh every trial from `rng`. Returns one
/// entry per player, in player order. No state survives the call, every
/// simulation recomputes from its inputs.
pub fn simulate_equity<R: Rng>(
    players: &[PlayerHand],
    community: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<Vec<PlayerEquity>, EvalError> {
    let used = validate(players, community)?;

    debug!(
        "simulating {trials} trials for {} players with {} board cards",
        players.len(),
        community.len()
    );

    let wins = run_trials(players, community, &used, trials, rng)?;

    Ok(wins
        .into_iter()
        .map(|wins| PlayerEquity { wins, trials })
        .collect())
}

/// Estimates win probabilities over `num_tasks` threads.
///
/// Each task runs its share of the trials with its own small RNG seeded
/// from `seed` and counts wins locally; the per task counts merge once
/// every task joins. The same seed and task count reproduce the same
/// estimates.
///
/// Panics if `num_tasks` is zero.
#[cfg(feature = "parallel")]
pub fn par_simulate_equity(
    players: &[PlayerHand],
    community: &[Card],
    trials: u32,
    num_tasks: usize,
    seed: u64,
) -> Result<Vec<PlayerEquity>, EvalError> {
    assert!(num_tasks > 0);

    let used = validate(players, community)?;

    debug!(
        "simulating {trials} trials on {num_tasks} tasks for {} players",
        players.len()
    );

    let mut wins = vec![0u32; players.len()];
    std::thread::scope(|s| -> Result<(), EvalError> {
        let tasks = (0..num_tasks)
            .map(|task_id| {
                // Spread the trials remainder over the first tasks.
                let task_trials = trials / num_tasks as u32
                    + u32::from((task_id as u32) < trials % num_tasks as u32);

                let used = &used;
                s.spawn(move || {
                    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64));
                    run_trials(players, community, used, task_trials, &mut rng)
                })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            let task_wins = task.join().expect("equity task panicked")?;
            for (total, wins) in wins.iter_mut().zip(task_wins) {
                *total += wins;
            }
        }

        Ok(())
    })?;

    Ok(wins
        .into_iter()
        .map(|wins| PlayerEquity { wins, trials })
        .collect())
}

/// Runs the trial loop and returns the win counts in player order.
fn run_trials<R: Rng>(
    players: &[PlayerHand],
    community: &[Card],
    used: &[Card],
    trials: u32,
    rng: &mut R,
) -> Result<Vec<u32>, EvalError> {
    let mut wins = vec![0u32; players.len()];
    let mut board = Vec::with_capacity(BOARD_SIZE);
    let mut values = Vec::with_capacity(players.len());

    for _ in 0..trials {
        let mut deck = Deck::excluding(used);
        deck.shuffle(rng);

        board.clear();
        board.extend_from_slice(community);
        while board.len() < BOARD_SIZE {
            board.push(deck.deal());
        }

        values.clear();
        for player in players {
            values.push(player.best_hand(&board)?.value());
        }

        // Every player tying the best hand gets full win credit.
        let best = *values.iter().max().expect("at least one player");
        for (wins, value) in wins.iter_mut().zip(&values) {
            if *value == best {
                *wins += 1;
            }
        }
    }

    Ok(wins)
}

/// Checks the simulation preconditions and collects the known cards.
fn validate(players: &[PlayerHand], community: &[Card]) -> Result<Vec<Card>, EvalError> {
    if players.is_empty() || players.len() > MAX_PLAYERS {
        return Err(EvalError::InvalidPlayerCount(players.len()));
    }

    if community.len() > BOARD_SIZE {
        return Err(EvalError::HandNotFormed(community.len()));
    }

    // All players play the same game, 2 hole cards each or 4.
    let hole_size = players[0].cards().len();
    if let Some(player) = players.iter().find(|p| p.cards().len() != hole_size) {
        return Err(EvalError::InvalidHoleCards(player.cards().len()));
    }

    let mut seen = AHashSet::with_capacity(Deck::SIZE);
    let mut used = Vec::with_capacity(players.len() * hole_size + community.len());
    for &card in players.iter().flat_map(|p| p.cards()).chain(community) {
        if !seen.insert(card) {
            return Err(EvalError::DuplicateCard(card));
        }

        used.push(card);
    }

    if Deck::SIZE - used.len() < BOARD_SIZE - community.len() {
        return Err(EvalError::InsufficientCards);
    }

    Ok(used)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::SmallRng};

    fn hand(cards: &str) -> PlayerHand {
        let cards = cards
            .split_whitespace()
            .map(|c| c.parse().unwrap())
            .collect::<Vec<_>>();
        PlayerHand::new(&cards).unwrap()
    }

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn straight_on_fixed_board_wins_every_trial() {
        // The board completes the straight for the eights only, with all
        // five community cards fixed every trial plays the same showdown.
        let players = [hand("8S 8C"), hand("AS AC")];
        let board = cards("5D 6H 7D 9C 2S");

        let mut rng = SmallRng::seed_from_u64(1);
        let equities = simulate_equity(&players, &board, 100, &mut rng).unwrap();

        assert_eq!(equities[0].wins(), 100);
        assert_eq!(equities[0].trials(), 100);
        assert_eq!(equities[0].win_rate(), 1.0);
        assert_eq!(equities[1].win_rate(), 0.0);
    }

    #[test]
    fn board_played_by_all_ties_all() {
        // Both players play the board, every trial is a tie and both get
        // full credit: the reported rates sum above 1.0.
        let players = [hand("2C 3C"), hand("2D 3D")];
        let board = cards("TS JS QS KS AS");

        let mut rng = SmallRng::seed_from_u64(1);
        let equities = simulate_equity(&players, &board, 50, &mut rng).unwrap();

        assert_eq!(equities[0].win_rate(), 1.0);
        assert_eq!(equities[1].win_rate(), 1.0);
    }

    #[test]
    fn seeded_runs_reproduce() {
        let players = [hand("AS AH"), hand("7D 2C")];

        let run = |seed| {
            let mut rng = SmallRng::seed_from_u64(seed);
            simulate_equity(&players, &[], 500, &mut rng).unwrap()
        };

        assert_eq!(run(7), run(7));

        // Pocket aces dominate seven deuce offsuit.
        let equities = run(7);
        assert!(equities[0].win_rate() > equities[1].win_rate());
    }

    #[test]
    fn partial_board_drives_the_draw() {
        let players = [hand("AS AH"), hand("KD KC")];
        let board = cards("2C 7D JH");

        let mut rng = SmallRng::seed_from_u64(3);
        let equities = simulate_equity(&players, &board, 300, &mut rng).unwrap();

        assert!(equities.iter().all(|e| e.trials() == 300));
        assert!(equities.iter().all(|e| e.wins() <= 300));
        assert!(equities[0].win_rate() > equities[1].win_rate());
    }

    #[test]
    fn omaha_hands_simulate() {
        let players = [hand("AS AH KS KH"), hand("7D 2C 8H 3S")];

        let mut rng = SmallRng::seed_from_u64(5);
        let equities = simulate_equity(&players, &[], 200, &mut rng).unwrap();

        assert_eq!(equities.len(), 2);
        assert!(equities[0].win_rate() > equities[1].win_rate());
    }

    #[test]
    fn rejects_invalid_player_counts() {
        let mut rng = SmallRng::seed_from_u64(1);

        let err = simulate_equity(&[], &[], 10, &mut rng).unwrap_err();
        assert_eq!(err, EvalError::InvalidPlayerCount(0));

        let players = [
            hand("2C 3C"),
            hand("4C 5C"),
            hand("6C 7C"),
            hand("8C 9C"),
            hand("TC JC"),
            hand("QC KC"),
        ];
        let err = simulate_equity(&players, &[], 10, &mut rng).unwrap_err();
        assert_eq!(err, EvalError::InvalidPlayerCount(6));
    }

    #[test]
    fn rejects_bad_pools() {
        let mut rng = SmallRng::seed_from_u64(1);

        // The same card in two hands.
        let players = [hand("AS AH"), hand("AS KD")];
        let err = simulate_equity(&players, &[], 10, &mut rng).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard("AS".parse().unwrap()));

        // A hole card on the board.
        let players = [hand("AS AH"), hand("KD KC")];
        let err = simulate_equity(&players, &cards("AS 2D 3H"), 10, &mut rng).unwrap_err();
        assert_eq!(err, EvalError::DuplicateCard("AS".parse().unwrap()));

        // Mixed Hold'em and Omaha hands.
        let players = [hand("AS AH"), hand("KD KC QD QC")];
        let err = simulate_equity(&players, &[], 10, &mut rng).unwrap_err();
        assert_eq!(err, EvalError::InvalidHoleCards(4));

        // An oversized board.
        let players = [hand("AS AH"), hand("KD KC")];
        let err = simulate_equity(&players, &cards("2C 3C 4C 5C 6C 7C"), 10, &mut rng).unwrap_err();
        assert_eq!(err, EvalError::HandNotFormed(6));
    }

    #[test]
    fn zero_trials_report_zero_rate() {
        let players = [hand("AS AH"), hand("KD KC")];

        let mut rng = SmallRng::seed_from_u64(1);
        let equities = simulate_equity(&players, &[], 0, &mut rng).unwrap();

        assert!(equities.iter().all(|e| e.wins() == 0));
        assert!(equities.iter().all(|e| e.win_rate() == 0.0));
    }

    #[cfg(feature = "parallel")]
    mod parallel {
        use super::*;

        #[test]
        fn fixed_board_is_exact_on_any_task_count() {
            let players = [hand("8S 8C"), hand("AS AC")];
            let board = cards("5D 6H 7D 9C 2S");

            for num_tasks in [1, 2, 3] {
                let equities =
                    par_simulate_equity(&players, &board, 99, num_tasks, 42).unwrap();
                assert_eq!(equities[0].wins(), 99);
                assert_eq!(equities[0].win_rate(), 1.0);
                assert_eq!(equities[1].win_rate(), 0.0);
            }
        }

        #[test]
        fn same_seed_and_tasks_reproduce() {
            let players = [hand("AS AH"), hand("7D 2C")];

            let a = par_simulate_equity(&players, &[], 400, 4, 7).unwrap();
            let b = par_simulate_equity(&players, &[], 400, 4, 7).unwrap();
            assert_eq!(a, b);

            assert!(a[0].win_rate() > a[1].win_rate());
        }
    }
}
