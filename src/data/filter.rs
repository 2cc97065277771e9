use std::fmt;

use super::model::{LaunchDataset, Outcome};
use super::range::PayloadRange;

/// Dropdown value meaning "every launch site".
pub const ALL_SITES: &str = "ALL";

pub const SCATTER_X_LABEL: &str = "Payload Mass (kg)";
pub const SCATTER_Y_LABEL: &str = "Launch Success (1=Success, 0=Failure)";

// ---------------------------------------------------------------------------
// Site selection: the dropdown value
// ---------------------------------------------------------------------------

/// The site dropdown's current value: the `ALL` sentinel or a site name.
///
/// A site name is not checked against the dataset; an unknown name simply
/// matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Interpret a raw dropdown value, `"ALL"` being the sentinel.
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record at `site` passes this selection.
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }
}

/// Formats back to the raw dropdown value, so `All` prints as `ALL`.
impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => f.write_str(ALL_SITES),
            SiteSelection::Site(site) => f.write_str(site),
        }
    }
}

// ---------------------------------------------------------------------------
// Chart descriptors
// ---------------------------------------------------------------------------

/// One category of the pie chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
}

/// Category → count mapping plus the chart title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }
}

/// One scatter point: `(payload, outcome class, booster category)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub outcome_class: u8,
    pub booster_version_category: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    /// Surviving records in dataset order.
    pub points: Vec<ScatterPoint>,
}

// ---------------------------------------------------------------------------
// Success-rate aggregator (pie chart)
// ---------------------------------------------------------------------------

/// Pie data for the current site selection.
///
/// * `ALL` – successful launches counted per site.
/// * a site – that site's launches split into `Failed` / `Success`.
///
/// Only categories with at least one launch are emitted, so an unknown site
/// yields no slices at all.
pub fn update_pie(dataset: &LaunchDataset, site: &SiteSelection) -> PieChart {
    match site {
        SiteSelection::All => {
            let successes = dataset
                .records()
                .iter()
                .filter(|r| r.outcome.is_success())
                .map(|r| r.launch_site.as_str());
            PieChart {
                title: "Total Successful Launches by Site".to_string(),
                slices: count_in_order(successes)
                    .into_iter()
                    .map(|(site, count)| PieSlice {
                        label: site.to_string(),
                        count,
                    })
                    .collect(),
            }
        }
        SiteSelection::Site(name) => {
            let (mut failed, mut succeeded) = (0usize, 0usize);
            for rec in dataset.records().iter().filter(|r| r.launch_site == *name) {
                match rec.outcome {
                    Outcome::Failure => failed += 1,
                    Outcome::Success => succeeded += 1,
                }
            }
            let slices = [(Outcome::Failure, failed), (Outcome::Success, succeeded)]
                .into_iter()
                .filter(|(_, count)| *count > 0)
                .map(|(outcome, count)| PieSlice {
                    label: outcome.label().to_string(),
                    count,
                })
                .collect();
            PieChart {
                title: format!("Success vs Failure for site {name}"),
                slices,
            }
        }
    }
}

/// Group-by count that keeps keys in order of first appearance.
fn count_in_order<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for key in keys {
        match counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, n)) => *n += 1,
            None => counts.push((key, 1)),
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Payload / outcome filter (scatter chart)
// ---------------------------------------------------------------------------

/// Scatter data: launches whose payload lies in `range` (both ends inclusive)
/// and, unless `ALL`, whose site matches. The title keeps the raw selection
/// value, so it reads "Payload vs. Success for ALL" for every site.
pub fn update_scatter(
    dataset: &LaunchDataset,
    site: &SiteSelection,
    range: PayloadRange,
) -> ScatterChart {
    let points = dataset
        .records()
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| site.matches(&r.launch_site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome_class: r.outcome.class(),
            booster_version_category: r.booster_version_category.clone(),
        })
        .collect();

    ScatterChart {
        title: format!("Payload vs. Success for {site}"),
        x_label: SCATTER_X_LABEL,
        y_label: SCATTER_Y_LABEL,
        points,
    }
}
