use crate::stats::{average, variance};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Descriptive statistics report of a single dataset.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub average: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Compute all three statistics of `data` in one report.
    ///
    /// The `std_dev` field is the square root of the rounded `variance`
    /// field, so the report agrees with the standalone functions.
    ///
    /// # Errors
    /// Returns an error if `data` is empty.
    pub fn from_data(data: &[f64]) -> Result<Self> {
        if data.is_empty() {
            bail!("List must contain at least one value");
        }

        let average = average(data)?;
        let variance = variance(data)?;
        let std_dev = variance.sqrt();

        log::debug!("summarized {} values", data.len());

        Ok(Self {
            average,
            variance,
            std_dev,
        })
    }
}
