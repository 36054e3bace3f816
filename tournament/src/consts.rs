//! Shared constants of the tournament library.

/// Number of genes in an opponent genome.
pub const GENOME_LENGTH: usize = 5;
/// Number of genome opponents taking part in every tournament.
pub const POPULATION_SIZE: usize = 20;
/// Number of genomes that survive into the next generation.
pub const GENERATION_SIZE: usize = 10;

// Strategy names double as results-file labels and chart tick labels, so
// they must not contain ':' or newlines.
pub const STRATEGY_NAME_TRUSTING_T4T: &str = "trusting-t4t";
pub const STRATEGY_NAME_SUSPICIOUS_T4T: &str = "suspicious-t4t";
pub const STRATEGY_NAME_NAIVE: &str = "naive";
pub const STRATEGY_NAME_EVIL: &str = "evil";
pub const STRATEGY_NAME_RANDOM: &str = "random";
pub const STRATEGY_NAME_XOR: &str = "xor";
pub const STRATEGY_NAME_OPPOSITE_T4T: &str = "opposite-t4t";
pub const STRATEGY_NAME_XNOR: &str = "xnor";
pub const STRATEGY_NAME_NAND: &str = "nand";
pub const STRATEGY_NAME_BERNOULLI: &str = "bernoulli";
