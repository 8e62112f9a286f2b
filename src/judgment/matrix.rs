use anyhow::{bail, Result};

/// Square matrix of pairwise comparison judgments over one sibling group.
///
/// Row/column `i` corresponds to the i-th group member in entry order.
/// `raw[i][j]` states how strongly member `i` is preferred over member `j`.
/// All n² entries come from the caller, diagonal included; reciprocity
/// (`raw[j][i] == 1/raw[i][j]`) is deliberately not enforced.
#[derive(Debug, Clone)]
pub struct JudgmentMatrix {
    raw: Vec<Vec<f64>>,
}

impl JudgmentMatrix {
    /// Build a matrix from row vectors. Requires at least a 2x2 and that
    /// every row has exactly as many entries as there are rows.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n < 2 {
            bail!("A judgment matrix needs at least 2 members, got {}", n);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                bail!(
                    "Judgment row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                );
            }
        }
        Ok(JudgmentMatrix { raw: rows })
    }

    pub fn size(&self) -> usize {
        self.raw.len()
    }

    /// Divide every entry by its column sum so that each column sums to 1.
    ///
    /// # Errors
    ///
    /// A column summing to zero means the caller broke the strictly-positive
    /// input contract; that is surfaced as an error rather than retried.
    pub fn normalize(&self) -> Result<Vec<Vec<f64>>> {
        let n = self.size();
        let mut column_sums = vec![0.0; n];
        for row in &self.raw {
            for (j, value) in row.iter().enumerate() {
                column_sums[j] += value;
            }
        }
        for (j, sum) in column_sums.iter().enumerate() {
            if *sum == 0.0 {
                bail!("Judgment column {} sums to zero; values must be positive", j);
            }
        }

        let normalized = self
            .raw
            .iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .map(|(j, value)| value / column_sums[j])
                    .collect()
            })
            .collect();
        Ok(normalized)
    }

    /// Derive the group's priority vector: each member's priority is the
    /// average of its normalized row. Entries sum to 1 up to rounding.
    pub fn priority_vector(&self) -> Result<Vec<f64>> {
        let n = self.size();
        let normalized = self.normalize()?;
        let priorities = normalized
            .iter()
            .map(|row| row.iter().sum::<f64>() / n as f64)
            .collect();
        Ok(priorities)
    }

    /// Measure how internally contradictory the judgments are.
    ///
    /// Uses the row-sum approximation of lambda-max and a closed-form
    /// random-index approximation `(1.98(n-2) + e^-8) / n` instead of the
    /// principal-eigenvalue method and the classical random-index table.
    /// Changing either changes every downstream weight, so both stay as-is.
    pub fn consistency_ratio(&self, priorities: &[f64]) -> f64 {
        let n = self.size();
        let lambda_max: f64 = self
            .raw
            .iter()
            .map(|row| {
                row.iter()
                    .zip(priorities)
                    .map(|(value, priority)| value * priority)
                    .sum::<f64>()
            })
            .sum();

        let consistency_index = (lambda_max - n as f64) / (n as f64 - 1.0);
        let random_index = (1.98 * (n as f64 - 2.0) + (-8.0_f64).exp()) / n as f64;
        consistency_index / random_index
    }
}
