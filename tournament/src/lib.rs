//! This is the library that contains all needed functionalities to run an
//! iterated prisoner's dilemma [`tournament`] between ten named strategies
//! and a population of genome-encoded opponents.
//!
//! # Quick Start
//!
//! A single tournament against the identity population can be run like the
//! following:
//!
//! ```rust
//! use tournament::consts::POPULATION_SIZE;
//! use tournament::report::ScoreHistory;
//! use tournament::tournament::{prisoners_dilemma_rules, Tournament};
//!
//! let population: Vec<u8> = (0..POPULATION_SIZE as u8).collect();
//!
//! let mut game = Tournament::from(10, prisoners_dilemma_rules, &population);
//! game.run(); // Play every pairing for 10 rounds
//!
//! let mut history = ScoreHistory::new();
//! history.record(&game.player_totals());
//!
//! let summary = history.summarize(); // mean/stddev per strategy
//! assert_eq!(10, summary.len());
//! ```
//!
//! # Available Strategies
//!
//! | Name             | Function                                              | Behavior                                  |
//! |------------------|-------------------------------------------------------|-------------------------------------------|
//! | `trusting-t4t`   | [`strategies::strategy::trusting_tit_for_tat`]        | Cooperates first, then echoes the opponent |
//! | `suspicious-t4t` | [`strategies::strategy::suspicious_tit_for_tat`]      | Defects first, then echoes the opponent    |
//! | `naive`          | [`strategies::strategy::naive`]                       | Always cooperates                          |
//! | `evil`           | [`strategies::strategy::evil`]                        | Always defects                             |
//! | `random`         | [`strategies::strategy::random`]                      | Fair coin flip                             |
//! | `xor`            | [`strategies::strategy::xor`]                         | Cooperates when the previous moves differ  |
//! | `opposite-t4t`   | [`strategies::strategy::opposite_tit_for_tat`]        | Negation of `trusting-t4t`                 |
//! | `xnor`           | [`strategies::strategy::xnor`]                        | Cooperates when the previous moves match   |
//! | `nand`           | [`strategies::strategy::nand`]                        | Defects only after mutual cooperation, negated |
//! | `bernoulli`      | [`strategies::strategy::random_biased`]               | Cooperates with probability 0.3            |
//!
//! The opponents are not named strategies: each one is a five-gene
//! [`strategies::genome::Genome`] selecting a move for every possible
//! previous-move pair, and the population evolves between tournaments via
//! [`strategies::genome::next_generation`].

pub mod consts;
pub mod report;
pub mod strategies;
pub mod tournament;
