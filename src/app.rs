use eframe::egui;

use crate::state::DashboardState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: DashboardState,
    title: String,
}

impl LaunchDashApp {
    pub fn new(state: DashboardState, title: impl Into<String>) -> Self {
        Self {
            state,
            title: title.into(),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title + status ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.state, &self.title);
        });

        // ---- Left side panel: site + payload controls ----
        egui::SidePanel::left("controls")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::controls(ui, &mut self.state);
            });

        // ---- Central panel: pie above scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            // Two headings plus spacing share the height with the plots.
            let chart_height = ((ui.available_height() - 90.0) / 2.0).max(160.0);
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    plot::pie_chart(ui, &self.state, chart_height);
                    ui.add_space(12.0);
                    plot::scatter_chart(ui, &self.state, chart_height);
                });
        });
    }
}
