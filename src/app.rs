use std::path::PathBuf;

use eframe::egui;

use crate::data::DEFAULT_DATA_FILE;
use crate::state::AppState;
use crate::ui::panels;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct SalesScopeApp {
    pub state: AppState,
}

impl Default for SalesScopeApp {
    fn default() -> Self {
        // Load the fixed demo source straight away, so launching the binary
        // shows either the dashboard or the targeted not-found state.
        Self {
            state: AppState::with_source(PathBuf::from(DEFAULT_DATA_FILE)),
        }
    }
}

impl eframe::App for SalesScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: control panel ----
        egui::SidePanel::left("control_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::central_panel(ui, &self.state);
        });
    }
}
