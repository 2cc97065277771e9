/// Data layer: launch records, loading, and the two chart computations.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → LaunchDataset (or LoadError)
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, sites, payload bounds
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  site / payload selection → PieChart, ScatterChart
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod range;
