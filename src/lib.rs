//! Descriptive statistics of finite numeric datasets.
//!
//! Three stateless functions over a slice of values: [`average`],
//! [`variance`] (population variance, divided by `n`), and [`std_dev`].
//! [`Summary`] bundles all three into a serializable report.
//!
//! Every operation requires at least one value and fails otherwise;
//! there are no sentinel results.

mod stats;
mod summary;

pub use crate::stats::{average, std_dev, variance};
pub use crate::summary::Summary;
