//! Genome-encoded opponent strategies and the evolutionary operators that
//! breed them between tournaments.

use crate::consts::GENOME_LENGTH;
use crate::strategies::strategy::{Decision, DecisionTable};
use rand::distributions::{Bernoulli, Distribution};
use rand::Rng;

/// Boolean genes selecting the move for each possible previous-move pair
/// of a pairing: `(first round, CC, CD, DC, DD)`. `true` cooperates.
pub type Genome = Box<[bool]>;

/// Decodes the five low bits of a byte into a genome, most significant
/// bit first.
pub fn decode(byte: u8) -> Genome {
    let mut genes = [false; GENOME_LENGTH];
    for (i, gene) in genes.iter_mut().enumerate() {
        *gene = byte & (1 << (GENOME_LENGTH - 1 - i)) != 0;
    }
    Box::new(genes)
}

/// Encodes a genome back into a byte, the inverse of [`decode`].
pub fn encode(genome: &Genome) -> u8 {
    genome.iter().fold(0, |acc, &gene| (acc << 1) | gene as u8)
}

/// Materialises a genome as a [`DecisionTable`].
pub fn decision_table(genome: &Genome) -> DecisionTable {
    let moves: Vec<Decision> = genome
        .iter()
        .map(|&gene| {
            if gene {
                Decision::Cooperate
            } else {
                Decision::Defect
            }
        })
        .collect();
    Box::new(move |own, other| {
        use Decision::*;
        match (own, other) {
            (None, None) => moves[0],
            (Some(Cooperate), Some(Cooperate)) => moves[1],
            (Some(Cooperate), Some(Defect)) => moves[2],
            (Some(Defect), Some(Cooperate)) => moves[3],
            (Some(Defect), Some(Defect)) => moves[4],
            _ => unreachable!("a pairing remembers both moves or neither"),
        }
    })
}

/// Flips one random gene.
pub fn mutate(genes: &mut [bool]) {
    let i = rand::thread_rng().gen_range(0..genes.len());
    genes[i] = !genes[i];
}

/// Alternating-index crossover of two parent genomes, with a 10% chance
/// of a single-gene mutation in the child.
pub fn reproduce(first: &Genome, second: &Genome) -> Genome {
    let mut child = [false; GENOME_LENGTH];
    for (i, gene) in child.iter_mut().enumerate() {
        *gene = if i % 2 == 0 { first[i] } else { second[i] };
    }
    let mutation = Bernoulli::new(0.1).unwrap();
    if mutation.sample(&mut rand::thread_rng()) {
        mutate(&mut child);
    }
    Box::new(child)
}

/// Builds the next population from the fittest genomes of the previous
/// generation: the survivors themselves plus one child per adjacent pair
/// of parents, encoded back to bytes.
pub fn next_generation(fittest: &[Genome]) -> Vec<u8> {
    let mut population: Vec<Genome> = fittest.to_vec();
    for i in 0..fittest.len() {
        let child = reproduce(&fittest[i], &fittest[(i + 1) % fittest.len()]);
        population.push(child);
    }
    population.iter().map(encode).collect()
}
