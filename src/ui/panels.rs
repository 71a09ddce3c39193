use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;
use crate::ui::{metrics, plot, table};

// ---------------------------------------------------------------------------
// Left side panel – control panel
// ---------------------------------------------------------------------------

/// Render the left control panel: status line, region filter, footer.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Control Panel");

    if state.table.is_some() {
        ui.label(RichText::new("System Status: Online").color(Color32::from_rgb(46, 160, 67)));
    } else {
        ui.label(RichText::new("System Status: Offline").color(Color32::RED));
    }
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // Clone what we need so we can mutate state inside the loop.
    let entries: Vec<(String, Color32)> = state
        .table
        .as_ref()
        .map(|t| {
            t.regions()
                .iter()
                .map(|region| {
                    let color = state
                        .color_map
                        .as_ref()
                        .map(|cm| cm.color_for(region))
                        .unwrap_or(Color32::GRAY);
                    (region.clone(), color)
                })
                .collect()
        })
        .unwrap_or_default();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            if !entries.is_empty() {
                let header_text = format!(
                    "Regions  ({}/{})",
                    state.region_filter.len(),
                    entries.len()
                );
                egui::CollapsingHeader::new(RichText::new(header_text).strong())
                    .id_salt("region_filter")
                    .default_open(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.horizontal(|ui: &mut Ui| {
                            if ui.small_button("All").clicked() {
                                state.select_all_regions();
                            }
                            if ui.small_button("None").clicked() {
                                state.select_no_regions();
                            }
                        });

                        for (region, color) in &entries {
                            let mut checked = state.region_filter.contains(region);
                            let text = RichText::new(region).color(*color);
                            if ui.checkbox(&mut checked, text).changed() {
                                state.toggle_region(region);
                            }
                        }
                    });
            }

            ui.separator();
            ui.small("© 2025 SalesScope");
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(state.source.display().to_string());
        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} records loaded, {} visible",
                table.len(),
                state.visible_indices.len()
            ));
        } else if let Some(err) = &state.load_error {
            ui.label(RichText::new(format!("Error: {err}")).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central panel – the dashboard body
// ---------------------------------------------------------------------------

/// Render the dashboard: targeted empty states for the two failure modes,
/// otherwise title, KPI metrics, trend chart, and the record inspector.
pub fn central_panel(ui: &mut Ui, state: &AppState) {
    if let Some(err) = &state.load_error {
        if err.is_source_missing() {
            empty_state(
                ui,
                "Data source not found",
                &state.source.display().to_string(),
                Some("Run the generate_sample tool to create a demo dataset."),
            );
        } else {
            empty_state(ui, "Data processing error", &error_chain(err), None);
        }
        return;
    }

    if state.table.is_none() {
        empty_state(ui, "No data loaded", "Open a sales CSV (File → Open…)", None);
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("SalesScope Analytics");
            ui.label(RichText::new("Sales Intelligence Dashboard").weak());
            ui.add_space(8.0);

            metrics::metrics_row(ui, state);

            ui.separator();
            ui.strong("Sales Trend Analysis");
            plot::sales_trend_plot(ui, state);

            ui.add_space(8.0);
            table::raw_records(ui, state);
        });
}

fn empty_state(ui: &mut Ui, title: &str, detail: &str, hint: Option<&str>) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(ui.available_height() * 0.35);
        ui.heading(title);
        ui.label(RichText::new(detail).weak());
        if let Some(hint) = hint {
            ui.small(hint);
        }
    });
}

/// Flatten an error and its source chain into one display line.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        message.push_str(&format!(": {cause}"));
        current = cause.source();
    }
    message
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open sales data")
        .add_filter("CSV files", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.open(path);
    }
}
