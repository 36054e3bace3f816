use crate::consts::{
    STRATEGY_NAME_BERNOULLI, STRATEGY_NAME_EVIL, STRATEGY_NAME_NAIVE, STRATEGY_NAME_NAND,
    STRATEGY_NAME_OPPOSITE_T4T, STRATEGY_NAME_RANDOM, STRATEGY_NAME_SUSPICIOUS_T4T,
    STRATEGY_NAME_TRUSTING_T4T, STRATEGY_NAME_XNOR, STRATEGY_NAME_XOR,
};
use rand::distributions::{Bernoulli, Distribution};
use std::ops::Not;

/// A single move in the iterated prisoner's dilemma.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Cooperate,
    Defect,
}

impl Not for Decision {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Cooperate => Self::Defect,
            Self::Defect => Self::Cooperate,
        }
    }
}

/// A strategy decides the next move from the previous move pair of a
/// pairing: `(own previous move, counterpart's previous move)`. Both are
/// `None` on the first round of a pairing.
pub type DecisionTable = Box<dyn Fn(Option<Decision>, Option<Decision>) -> Decision>;

/// Returns the ten built-in strategies paired with their names, in the
/// order they are reported and charted.
pub fn builtin_strategies() -> Vec<(&'static str, DecisionTable)> {
    vec![
        (
            STRATEGY_NAME_TRUSTING_T4T,
            Box::new(trusting_tit_for_tat) as DecisionTable,
        ),
        (STRATEGY_NAME_SUSPICIOUS_T4T, Box::new(suspicious_tit_for_tat)),
        (STRATEGY_NAME_NAIVE, Box::new(naive)),
        (STRATEGY_NAME_EVIL, Box::new(evil)),
        (STRATEGY_NAME_RANDOM, Box::new(random)),
        (STRATEGY_NAME_XOR, Box::new(xor)),
        (STRATEGY_NAME_OPPOSITE_T4T, Box::new(opposite_tit_for_tat)),
        (STRATEGY_NAME_XNOR, Box::new(xnor)),
        (STRATEGY_NAME_NAND, Box::new(nand)),
        (STRATEGY_NAME_BERNOULLI, Box::new(random_biased)),
    ]
}

/// Cooperates on the first round, afterwards plays whatever the
/// counterpart played last.
pub fn trusting_tit_for_tat(_own: Option<Decision>, other: Option<Decision>) -> Decision {
    match other {
        None => Decision::Cooperate,
        Some(previous) => previous,
    }
}

/// Like [`trusting_tit_for_tat`], but opens with a defection.
pub fn suspicious_tit_for_tat(_own: Option<Decision>, other: Option<Decision>) -> Decision {
    match other {
        None => Decision::Defect,
        Some(previous) => previous,
    }
}

pub fn naive(_own: Option<Decision>, _other: Option<Decision>) -> Decision {
    Decision::Cooperate
}

pub fn evil(_own: Option<Decision>, _other: Option<Decision>) -> Decision {
    Decision::Defect
}

/// Fair coin flip between cooperation and defection.
pub fn random(_own: Option<Decision>, _other: Option<Decision>) -> Decision {
    let coin = Bernoulli::new(0.5).unwrap();
    match coin.sample(&mut rand::thread_rng()) {
        true => Decision::Cooperate,
        false => Decision::Defect,
    }
}

/// Cooperates whenever the previous moves of the pairing differ.
pub fn xor(own: Option<Decision>, other: Option<Decision>) -> Decision {
    match (own, other) {
        (None, None) => Decision::Cooperate,
        (Some(own), Some(other)) => {
            if own == other {
                Decision::Defect
            } else {
                Decision::Cooperate
            }
        }
        _ => unreachable!("a pairing remembers both moves or neither"),
    }
}

/// Negation of [`trusting_tit_for_tat`].
pub fn opposite_tit_for_tat(own: Option<Decision>, other: Option<Decision>) -> Decision {
    !trusting_tit_for_tat(own, other)
}

/// Cooperates whenever the previous moves of the pairing match.
pub fn xnor(own: Option<Decision>, other: Option<Decision>) -> Decision {
    match (own, other) {
        (None, None) => Decision::Cooperate,
        (Some(own), Some(other)) => {
            if own == other {
                Decision::Cooperate
            } else {
                Decision::Defect
            }
        }
        _ => unreachable!("a pairing remembers both moves or neither"),
    }
}

/// Not a strategy on its own, just the helper for [`nand`].
fn and(own: Option<Decision>, other: Option<Decision>) -> Decision {
    match (own, other) {
        (None, None) => Decision::Cooperate,
        (Some(Decision::Cooperate), Some(Decision::Cooperate)) => Decision::Cooperate,
        (Some(_), Some(_)) => Decision::Defect,
        _ => unreachable!("a pairing remembers both moves or neither"),
    }
}

pub fn nand(own: Option<Decision>, other: Option<Decision>) -> Decision {
    !and(own, other)
}

/// Cooperates with probability 0.3.
pub fn random_biased(_own: Option<Decision>, _other: Option<Decision>) -> Decision {
    let coin = Bernoulli::new(0.3).unwrap();
    match coin.sample(&mut rand::thread_rng()) {
        true => Decision::Cooperate,
        false => Decision::Defect,
    }
}
