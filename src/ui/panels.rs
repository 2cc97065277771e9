use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, Ui};

use crate::state::{site_label, DashboardState};

const HEADER_COLOR: Color32 = Color32::from_rgb(0x50, 0x3D, 0x36);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Dashboard title and a one-line status.
pub fn header(ui: &mut Ui, state: &DashboardState, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).size(40.0).color(HEADER_COLOR));
    });
    ui.horizontal(|ui: &mut Ui| {
        let b = state.bounds();
        ui.label(format!(
            "{} launches from {} sites, payload {:.0}–{:.0} kg",
            state.dataset.len(),
            state.dataset.sites().len(),
            b.min,
            b.max
        ));
        ui.separator();
        ui.label(format!("{} points shown", state.scatter.points.len()));
    });
}

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Site dropdown and payload range selector.
pub fn controls(ui: &mut Ui, state: &mut DashboardState) {
    ui.heading("Filters");
    ui.separator();

    site_dropdown(ui, state);
    ui.add_space(12.0);
    payload_selector(ui, state);
}

fn site_dropdown(ui: &mut Ui, state: &mut DashboardState) {
    ui.strong("Launch site");

    let mut picked = None;
    egui::ComboBox::from_id_salt("launch_site")
        .selected_text(site_label(&state.selected_site))
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.add(
                egui::TextEdit::singleline(&mut state.site_query)
                    .hint_text("Search sites")
                    .desired_width(f32::INFINITY),
            );
            let options = state.site_options();
            if options.is_empty() {
                ui.weak("No matching sites");
            }
            for option in options {
                let label = site_label(&option);
                if ui
                    .selectable_label(state.selected_site == option, label)
                    .clicked()
                {
                    picked = Some(option);
                }
            }
        });

    if let Some(site) = picked {
        state.on_site_changed(site);
    }
}

fn payload_selector(ui: &mut Ui, state: &mut DashboardState) {
    ui.strong("Payload range (kg)");

    let b = state.bounds();
    let mut low = state.payload_range.low;
    let mut high = state.payload_range.high;

    ui.spacing_mut().slider_width = (ui.available_width() - 60.0).max(80.0);
    let low_changed = ui
        .add(egui::Slider::new(&mut low, b.min..=b.max).text("min").fixed_decimals(0))
        .changed();
    let high_changed = ui
        .add(egui::Slider::new(&mut high, b.min..=b.max).text("max").fixed_decimals(0))
        .changed();
    if low_changed || high_changed {
        state.on_payload_changed(low, high);
    }

    slider_ticks(ui, state);
}

/// Tick labels painted at their proportional position under the sliders.
fn slider_ticks(ui: &mut Ui, state: &DashboardState) {
    let b = state.bounds();
    let width = ui.spacing().slider_width;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 16.0), Sense::hover());
    let span = b.max - b.min;
    let painter = ui.painter();
    let color = ui.visuals().weak_text_color();

    for (tick, label) in &state.slider_marks {
        let frac = if span > 0.0 { (tick - b.min) / span } else { 0.0 };
        let x = rect.left() + rect.width() * frac.clamp(0.0, 1.0) as f32;
        painter.text(
            egui::pos2(x, rect.top()),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(11.0),
            color,
        );
    }
}
