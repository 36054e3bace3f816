pub mod genome;
pub mod strategy;
