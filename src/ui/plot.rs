use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{Color32, RichText, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

use crate::data::filter::SiteSelection;
use crate::state::DashboardState;

/// Arc segments per full turn; a wedge gets its share, at least two.
const PIE_RESOLUTION: usize = 180;

// ---------------------------------------------------------------------------
// Pie chart (success rate)
// ---------------------------------------------------------------------------

/// Vertices of a unit-circle wedge covering the fractions `[start, end]` of
/// the full turn, starting at twelve o'clock and running clockwise.
pub fn wedge_points(start: f64, end: f64) -> Vec<[f64; 2]> {
    let segments = (((end - start) * PIE_RESOLUTION as f64).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(segments + 2);
    points.push([0.0, 0.0]);
    for i in 0..=segments {
        let frac = start + (end - start) * i as f64 / segments as f64;
        let angle = FRAC_PI_2 - TAU * frac;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

pub fn pie_chart(ui: &mut Ui, state: &DashboardState, height: f32) {
    let pie = &state.pie;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&pie.title);
    });

    let total = pie.total();
    if total == 0 {
        ui.allocate_ui(eframe::egui::vec2(ui.available_width(), height), |ui: &mut Ui| {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.label(RichText::new("No launches match this selection").weak());
            });
        });
        return;
    }

    // Single-site breakdowns colour by outcome, the overview by site.
    let by_outcome = matches!(state.selected_site, SiteSelection::Site(_));

    Plot::new("success_pie")
        .height(height)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .show_y(false)
        .include_x(-1.2)
        .include_x(1.2)
        .include_y(-1.2)
        .include_y(1.2)
        .show(ui, |plot_ui| {
            let mut start = 0.0;
            for slice in &pie.slices {
                let share = slice.count as f64 / total as f64;
                let end = start + share;

                let color = if by_outcome {
                    outcome_color(&slice.label)
                } else {
                    state.site_colors.color_for(&slice.label)
                };

                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge_points(start, end)))
                        .name(&slice.label)
                        .fill_color(color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                let mid = FRAC_PI_2 - TAU * (start + end) / 2.0;
                plot_ui.text(Text::new(
                    PlotPoint::new(0.65 * mid.cos(), 0.65 * mid.sin()),
                    RichText::new(format!("{:.1}%", share * 100.0)).color(Color32::WHITE),
                ));

                start = end;
            }
        });
}

fn outcome_color(label: &str) -> Color32 {
    match label {
        "Success" => Color32::from_rgb(0x2c, 0xa0, 0x2c),
        _ => Color32::from_rgb(0xd6, 0x27, 0x28),
    }
}

// ---------------------------------------------------------------------------
// Scatter chart (payload vs. outcome)
// ---------------------------------------------------------------------------

/// Payload on x, outcome class on y, one coloured series per booster category.
pub fn scatter_chart(ui: &mut Ui, state: &DashboardState, height: f32) {
    let scatter = &state.scatter;
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&scatter.title);
    });

    let b = state.bounds();

    Plot::new("payload_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label(scatter.x_label)
        .y_axis_label(scatter.y_label)
        .include_x(b.min)
        .include_x(b.max)
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for category in state.dataset.booster_categories() {
                let points: Vec<[f64; 2]> = scatter
                    .points
                    .iter()
                    .filter(|p| &p.booster_version_category == category)
                    .map(|p| [p.payload_mass_kg, f64::from(p.outcome_class)])
                    .collect();
                if points.is_empty() {
                    continue;
                }

                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .name(category)
                        .color(state.booster_colors.color_for(category))
                        .radius(4.0)
                        .filled(true),
                );
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f64; 2], b: [f64; 2]) -> bool {
        (a[0] - b[0]).abs() < 1e-9 && (a[1] - b[1]).abs() < 1e-9
    }

    #[test]
    fn wedge_starts_at_centre_and_twelve_oclock() {
        let pts = wedge_points(0.0, 0.25);
        assert_eq!(pts[0], [0.0, 0.0]);
        assert!(close(pts[1], [0.0, 1.0]));
        // A quarter turn clockwise ends at three o'clock.
        assert!(close(*pts.last().unwrap(), [1.0, 0.0]));
    }

    #[test]
    fn full_circle_closes_on_itself() {
        let pts = wedge_points(0.0, 1.0);
        assert!(close(pts[1], *pts.last().unwrap()));
        assert_eq!(pts.len(), PIE_RESOLUTION + 2);
    }

    #[test]
    fn thin_wedges_keep_a_minimum_resolution() {
        let pts = wedge_points(0.5, 0.5001);
        assert_eq!(pts.len(), 4);
    }
}
