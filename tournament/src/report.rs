//! Per-strategy score aggregation across generations.

use log::debug;

/// Mean and standard deviation of a strategy's totals across all recorded
/// generations. These are exactly the values a results file carries.
#[derive(Debug, Clone, PartialEq)]
pub struct StrategyScore {
    pub name: String,
    pub mean: f64,
    pub std_dev: f64,
}

/// Collects the per-generation totals of every strategy and reduces them
/// to one [`StrategyScore`] per strategy.
#[derive(Debug, Default)]
pub struct ScoreHistory {
    names: Vec<String>,
    rows: Vec<Vec<i32>>,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the totals of one generation. The first call fixes the
    /// strategy order; later calls must pass the same strategies in the
    /// same order.
    pub fn record(&mut self, totals: &[(String, i32)]) {
        if self.names.is_empty() {
            self.names = totals.iter().map(|(name, _)| name.clone()).collect();
        }
        debug_assert_eq!(self.names.len(), totals.len());
        self.rows.push(totals.iter().map(|(_, total)| *total).collect());
        debug!("recorded generation {}", self.rows.len());
    }

    pub fn generations(&self) -> usize {
        self.rows.len()
    }

    /// Reduces the recorded generations to one score per strategy, in
    /// recording order.
    pub fn summarize(&self) -> Vec<StrategyScore> {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let series: Vec<f64> = self.rows.iter().map(|row| row[i] as f64).collect();
                StrategyScore {
                    name: name.clone(),
                    mean: mean(&series),
                    std_dev: std_dev(&series),
                }
            })
            .collect()
    }
}

fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Population standard deviation.
fn std_dev(series: &[f64]) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let mean = mean(series);
    let variance = series.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / series.len() as f64;
    variance.sqrt()
}
