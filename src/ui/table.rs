use eframe::egui::{CollapsingHeader, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::SalesRecord;
use crate::state::AppState;
use crate::ui::metrics::format_currency;

// ---------------------------------------------------------------------------
// Raw-record inspector
// ---------------------------------------------------------------------------

/// Collapsed table listing every visible cleaned record, with missing
/// values rendered as explicit markers rather than blanks.
pub fn raw_records(ui: &mut Ui, state: &AppState) {
    let rows: Vec<&SalesRecord> = state.visible_rows().collect();

    CollapsingHeader::new("View Raw Database Records")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if rows.is_empty() {
                ui.label("No records to display.");
                return;
            }

            TableBuilder::new(ui)
                .striped(true)
                .vscroll(false)
                .columns(Column::auto().at_least(100.0), 5)
                .header(20.0, |mut header| {
                    for title in ["TransactionID", "Date", "Sales", "Profit", "Region"] {
                        header.col(|ui: &mut Ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, rows.len(), |mut row| {
                        let record = rows[row.index()];
                        row.col(|ui: &mut Ui| {
                            ui.label(record.transaction_id.to_string());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(record.date_label());
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(money_or_missing(record.sales));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(money_or_missing(record.profit));
                        });
                        row.col(|ui: &mut Ui| {
                            ui.label(record.region.clone().unwrap_or_default());
                        });
                    });
                });
        });
}

fn money_or_missing(value: Option<f64>) -> String {
    value
        .map(format_currency)
        .unwrap_or_else(|| "<missing>".to_string())
}
