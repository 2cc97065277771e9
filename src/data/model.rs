use std::fmt;

use super::error::LoadError;
use super::range::PayloadBounds;

// ---------------------------------------------------------------------------
// Outcome – the `class` column
// ---------------------------------------------------------------------------

/// Launch outcome class: `1` = success, `0` = failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Interpret an integer class value. Only `0` and `1` are valid.
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            0 => Some(Outcome::Failure),
            1 => Some(Outcome::Success),
            _ => None,
        }
    }

    /// Accept integral floats (`1.0`) as written by most data-frame exporters.
    pub fn from_class_f64(class: f64) -> Option<Self> {
        if class.fract() != 0.0 || !class.is_finite() {
            return None;
        }
        Self::from_class(class as i64)
    }

    /// The numeric class as stored in the table.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    /// Pie-chart label for a single-site breakdown.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Failure => "Failed",
            Outcome::Success => "Success",
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class())
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub launch_site: String,
    /// Payload mass in kilograms, finite and non-negative.
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    /// Booster hardware family, used as the scatter colour dimension.
    pub booster_version_category: String,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full, read-only launch table with values derived once at load time.
///
/// There is no way to mutate the records after construction, so the payload
/// bounds always describe the records they were computed from.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Launch sites in order of first appearance.
    sites: Vec<String>,
    /// Booster categories in order of first appearance.
    booster_categories: Vec<String>,
    bounds: PayloadBounds,
}

impl LaunchDataset {
    /// Build the dataset and its derived columns. An empty table has no
    /// payload bounds and is rejected.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        let bounds =
            PayloadBounds::from_payloads(records.iter().map(|r| r.payload_mass_kg))
                .ok_or(LoadError::Empty)?;

        let mut sites: Vec<String> = Vec::new();
        let mut booster_categories: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
            if !booster_categories.contains(&rec.booster_version_category) {
                booster_categories.push(rec.booster_version_category.clone());
            }
        }

        Ok(LaunchDataset {
            records,
            sites,
            booster_categories,
            bounds,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn booster_categories(&self) -> &[String] {
        &self.booster_categories
    }

    /// Global min/max payload, computed once from the full table.
    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn is_known_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// Number of launches.
    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LaunchDataset {
        LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("KSC", 3000.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("CCAFS", 2000.0, Outcome::Success, "v1.1"),
        ])
        .unwrap()
    }

    #[test]
    fn derived_columns_follow_first_appearance() {
        let ds = sample();
        assert_eq!(ds.sites(), ["CCAFS", "KSC"]);
        assert_eq!(ds.booster_categories(), ["v1.0", "v1.1"]);
        assert_eq!(ds.len(), 3);
        assert!(ds.is_known_site("KSC"));
        assert!(!ds.is_known_site("VAFB"));
    }

    #[test]
    fn bounds_cover_every_record() {
        let ds = sample();
        let b = ds.payload_bounds();
        assert_eq!((b.min, b.max), (500.0, 3000.0));
        assert!(ds
            .records()
            .iter()
            .all(|r| b.min <= r.payload_mass_kg && r.payload_mass_kg <= b.max));
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(matches!(
            LaunchDataset::from_records(Vec::new()),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn outcome_class_parsing() {
        assert_eq!(Outcome::from_class(0), Some(Outcome::Failure));
        assert_eq!(Outcome::from_class(1), Some(Outcome::Success));
        assert_eq!(Outcome::from_class(2), None);
        assert_eq!(Outcome::from_class_f64(1.0), Some(Outcome::Success));
        assert_eq!(Outcome::from_class_f64(0.5), None);
        assert_eq!(Outcome::from_class_f64(f64::NAN), None);
        assert_eq!(Outcome::Success.label(), "Success");
        assert_eq!(Outcome::Failure.to_string(), "0");
    }
}
