use std::sync::Arc;

use crate::color::CategoryColors;
use crate::config::DashboardConfig;
use crate::data::filter::{update_pie, update_scatter, PieChart, ScatterChart, SiteSelection};
use crate::data::model::LaunchDataset;
use crate::data::range::{PayloadBounds, PayloadRange};

/// Dropdown label of the `ALL` entry.
pub const ALL_SITES_LABEL: &str = "All Sites";

/// Dropdown label for a selection.
pub fn site_label(site: &SiteSelection) -> String {
    match site {
        SiteSelection::All => ALL_SITES_LABEL.to_string(),
        SiteSelection::Site(name) => name.clone(),
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The dashboard state, independent of rendering.
///
/// Each control has one change handler. The site handler recomputes both
/// charts (both read the site); the payload handler recomputes only the
/// scatter chart.
pub struct DashboardState {
    /// Loaded once at startup and never replaced.
    pub dataset: Arc<LaunchDataset>,

    pub selected_site: SiteSelection,
    /// Search text typed into the site dropdown.
    pub site_query: String,
    pub payload_range: PayloadRange,

    /// Payload selector granularity, kg.
    pub payload_step: f64,
    /// Tick labels under the payload selector.
    pub slider_marks: Vec<(f64, String)>,

    pub pie: PieChart,
    pub scatter: ScatterChart,

    pub site_colors: CategoryColors,
    pub booster_colors: CategoryColors,
}

impl DashboardState {
    pub fn new(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Self {
        let bounds = dataset.payload_bounds();
        let selected_site = SiteSelection::All;
        let payload_range = bounds.full_range();

        Self {
            pie: update_pie(&dataset, &selected_site),
            scatter: update_scatter(&dataset, &selected_site, payload_range),
            slider_marks: bounds.slider_marks(config.slider_marks),
            site_colors: CategoryColors::new(dataset.sites()),
            booster_colors: CategoryColors::new(dataset.booster_categories()),
            payload_step: config.payload_step,
            selected_site,
            site_query: String::new(),
            payload_range,
            dataset,
        }
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.dataset.payload_bounds()
    }

    /// Dropdown entries whose label contains the search text, ignoring case.
    pub fn site_options(&self) -> Vec<SiteSelection> {
        let query = self.site_query.trim().to_lowercase();
        std::iter::once(SiteSelection::All)
            .chain(self.dataset.sites().iter().cloned().map(SiteSelection::Site))
            .filter(|option| site_label(option).to_lowercase().contains(&query))
            .collect()
    }

    /// Site dropdown changed. No-op when the value is unchanged.
    pub fn on_site_changed(&mut self, site: SiteSelection) {
        if site == self.selected_site {
            return;
        }
        if let SiteSelection::Site(name) = &site {
            if !self.dataset.is_known_site(name) {
                log::warn!("unknown launch site '{name}' selected, charts will be empty");
            }
        }
        self.selected_site = site;
        self.pie = update_pie(&self.dataset, &self.selected_site);
        self.refresh_scatter();
        log::debug!(
            "site -> {}: {} pie slices, {} scatter points",
            self.selected_site,
            self.pie.slices.len(),
            self.scatter.points.len()
        );
    }

    /// Payload selector moved. Ends are snapped to the step grid or a tick
    /// mark and kept ordered; the end that was not moved wins a crossing.
    pub fn on_payload_changed(&mut self, low: f64, high: f64) {
        let bounds = self.bounds();
        let mut low = bounds.snap(low, self.payload_step, &self.slider_marks);
        let mut high = bounds.snap(high, self.payload_step, &self.slider_marks);
        if low > high {
            if low != self.payload_range.low {
                low = high;
            } else {
                high = low;
            }
        }

        let range = PayloadRange::new(low, high);
        if range == self.payload_range {
            return;
        }
        self.payload_range = range;
        self.refresh_scatter();
        log::debug!(
            "payload -> [{low}, {high}]: {} scatter points",
            self.scatter.points.len()
        );
    }

    fn refresh_scatter(&mut self) {
        self.scatter = update_scatter(&self.dataset, &self.selected_site, self.payload_range);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn state() -> DashboardState {
        let ds = LaunchDataset::from_records(vec![
            LaunchRecord::new("CCAFS", 500.0, Outcome::Success, "v1.0"),
            LaunchRecord::new("CCAFS", 3000.0, Outcome::Failure, "v1.1"),
            LaunchRecord::new("KSC", 2000.0, Outcome::Success, "v1.1"),
        ])
        .unwrap();
        DashboardState::new(Arc::new(ds), &DashboardConfig::default())
    }

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let s = state();
        assert_eq!(s.selected_site, SiteSelection::All);
        assert_eq!(s.payload_range, PayloadRange::new(500.0, 3000.0));
        assert_eq!(s.pie.total(), 2);
        assert_eq!(s.scatter.points.len(), 3);
        assert_eq!(s.scatter.title, "Payload vs. Success for ALL");
        assert_eq!(s.slider_marks.len(), 5);
        assert_eq!(s.slider_marks[0].1, "500");
        assert_eq!(s.slider_marks[4].1, "3000");
    }

    #[test]
    fn site_change_recomputes_both_charts() {
        let mut s = state();
        s.on_site_changed(SiteSelection::Site("KSC".into()));
        assert_eq!(s.pie.title, "Success vs Failure for site KSC");
        assert_eq!(s.pie.total(), 1);
        assert_eq!(s.scatter.points.len(), 1);
        assert_eq!(s.scatter.title, "Payload vs. Success for KSC");
    }

    #[test]
    fn payload_change_only_touches_scatter() {
        let mut s = state();
        let pie_before = s.pie.clone();
        s.on_payload_changed(1000.0, 2600.0);
        assert_eq!(s.pie, pie_before);
        // 1000 lands on the 1125 tick, 2600 on the 500 + 2 * 1000 grid stop.
        assert_eq!(s.payload_range, PayloadRange::new(1125.0, 2500.0));
        let payloads: Vec<f64> = s.scatter.points.iter().map(|p| p.payload_mass_kg).collect();
        assert_eq!(payloads, [2000.0]);
    }

    #[test]
    fn site_search_filters_dropdown_entries() {
        let mut s = state();
        assert_eq!(s.site_options().len(), 3);

        s.site_query = "  ksc ".into();
        assert_eq!(s.site_options(), vec![SiteSelection::Site("KSC".into())]);

        s.site_query = "all".into();
        assert_eq!(s.site_options(), vec![SiteSelection::All]);

        s.site_query = "vafb".into();
        assert!(s.site_options().is_empty());
    }

    #[test]
    fn crossing_ends_are_kept_ordered() {
        let mut s = state();
        s.on_payload_changed(2500.0, 3000.0);
        // High dragged below low: it stops at low.
        s.on_payload_changed(2500.0, 1500.0);
        assert_eq!(s.payload_range, PayloadRange::new(2500.0, 2500.0));

        s.on_payload_changed(1500.0, 2500.0);
        // Low dragged above high: it stops at high.
        s.on_payload_changed(3000.0, 2500.0);
        assert_eq!(s.payload_range, PayloadRange::new(2500.0, 2500.0));
    }
}
