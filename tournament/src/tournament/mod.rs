use crate::consts::GENERATION_SIZE;
use crate::strategies::genome::{self, Genome};
use crate::strategies::strategy::{builtin_strategies, Decision, DecisionTable};
use grid::Grid;
use log::debug;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Outcome scores for both sides given their decisions in one round.
pub type RewardFunc = fn(&Decision, &Decision) -> (i32, i32);

/// The canonical prisoner's dilemma payoff matrix.
pub fn prisoners_dilemma_rules(first: &Decision, second: &Decision) -> (i32, i32) {
    use Decision::*;
    match (first, second) {
        (Cooperate, Cooperate) => (-1, -1),
        (Cooperate, Defect) => (-3, 0),
        (Defect, Cooperate) => (0, -3),
        (Defect, Defect) => (-2, -2),
    }
}

/// One participant with an independent previous-move memory per
/// counterpart, keyed by the counterpart's name.
struct Player {
    name: String,
    table: DecisionTable,
    own_moves: HashMap<String, Option<Decision>>,
    other_moves: HashMap<String, Option<Decision>>,
}

impl Player {
    fn new(name: String, table: DecisionTable, counterparts: &[String]) -> Self {
        let blank: HashMap<String, Option<Decision>> = counterparts
            .iter()
            .map(|counterpart| (counterpart.clone(), None))
            .collect();
        Self {
            name,
            table,
            own_moves: blank.clone(),
            other_moves: blank,
        }
    }

    fn decide(&self, counterpart: &str) -> Decision {
        // The memory is seeded for every counterpart at construction.
        (self.table)(self.own_moves[counterpart], self.other_moves[counterpart])
    }

    fn remember(&mut self, counterpart: &str, own: Decision, other: Decision) {
        self.own_moves.insert(counterpart.to_string(), Some(own));
        self.other_moves.insert(counterpart.to_string(), Some(other));
    }
}

/// A round-robin tournament between the ten built-in strategies and a
/// population of genome-encoded opponents.
pub struct Tournament {
    players: Vec<Player>,
    opponents: Vec<Player>,
    population: Vec<u8>,
    /// One cell per (opponent, player) pairing; `(opponent total, player total)`.
    scores: Grid<(i32, i32)>,
    rounds: u32,
    rules: RewardFunc,
}

impl Tournament {
    /// Instantiates a tournament that plays every pairing for `rounds`
    /// rounds under the given reward rules, against the opponents encoded
    /// in `population`.
    pub fn from(rounds: u32, rules: RewardFunc, population: &[u8]) -> Self {
        let strategies = builtin_strategies();
        let player_names: Vec<String> = strategies
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        // Index the opponent names so equal genomes keep separate memories.
        let opponent_names: Vec<String> = population
            .iter()
            .enumerate()
            .map(|(i, byte)| format!("g{i}-{byte}"))
            .collect();

        let players: Vec<Player> = strategies
            .into_iter()
            .map(|(name, table)| Player::new(name.to_string(), table, &opponent_names))
            .collect();
        let opponents: Vec<Player> = population
            .iter()
            .zip(opponent_names)
            .map(|(&byte, name)| {
                let table = genome::decision_table(&genome::decode(byte));
                Player::new(name, table, &player_names)
            })
            .collect();

        Self {
            scores: Grid::new(opponents.len(), players.len()),
            players,
            opponents,
            population: population.to_vec(),
            rounds,
            rules,
        }
    }

    fn play_round(&mut self, i: usize, j: usize) {
        let player = &mut self.players[j];
        let opponent = &mut self.opponents[i];

        let player_move = player.decide(&opponent.name);
        let opponent_move = opponent.decide(&player.name);

        let (opponent_points, player_points) = (self.rules)(&opponent_move, &player_move);
        let (opponent_total, player_total) = self.scores[(i, j)];
        self.scores[(i, j)] = (opponent_total + opponent_points, player_total + player_points);

        player.remember(&opponent.name, player_move, opponent_move);
        opponent.remember(&player.name, opponent_move, player_move);
    }

    /// Plays every pairing for the configured number of rounds,
    /// accumulating both sides' scores.
    pub fn run(&mut self) {
        for _ in 0..self.rounds {
            for j in 0..self.players.len() {
                for i in 0..self.opponents.len() {
                    self.play_round(i, j);
                }
            }
        }
        debug!(
            "tournament finished: {} rounds, {} opponents",
            self.rounds,
            self.opponents.len()
        );
    }

    /// Returns the summed score of every built-in strategy against all
    /// opponents, in registry order.
    pub fn player_totals(&self) -> Vec<(String, i32)> {
        self.players
            .iter()
            .enumerate()
            .map(|(j, player)| {
                let total = (0..self.opponents.len())
                    .map(|i| self.scores[(i, j)].1)
                    .sum();
                (player.name.clone(), total)
            })
            .collect()
    }

    /// Returns the genomes of the best-scoring opponents (the parents of
    /// the next generation) together with the best opponent total.
    pub fn fittest(&self) -> (Vec<Genome>, i32) {
        let mut totals: Vec<(u8, i32)> = self
            .population
            .iter()
            .enumerate()
            .map(|(i, &byte)| {
                let total = (0..self.players.len())
                    .map(|j| self.scores[(i, j)].0)
                    .sum();
                (byte, total)
            })
            .collect();
        totals.sort_by_key(|&(_, total)| Reverse(total));
        totals.truncate(GENERATION_SIZE);

        let best = totals.first().map(|&(_, total)| total).unwrap_or(0);
        let genomes = totals.iter().map(|&(byte, _)| genome::decode(byte)).collect();
        (genomes, best)
    }
}
