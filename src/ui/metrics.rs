use eframe::egui::{Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// KPI metrics row
// ---------------------------------------------------------------------------

/// Render the three top-level KPIs over the currently visible rows:
/// Total Revenue, Net Profit (Est.), Avg. Transaction.
pub fn metrics_row(ui: &mut Ui, state: &AppState) {
    let mut count = 0usize;
    let mut sales_sum = 0.0;
    let mut profit_sum = 0.0;
    let mut any_visible = false;

    for row in state.visible_rows() {
        any_visible = true;
        if let Some(sales) = row.sales {
            count += 1;
            sales_sum += sales;
        }
        if let Some(profit) = row.profit {
            profit_sum += profit;
        }
    }

    if count == 0 {
        let table_is_empty = state.table.as_ref().map_or(true, |t| t.is_empty());
        let message = empty_metrics_message(any_visible, table_is_empty);
        ui.label(RichText::new(message).italics());
        return;
    }

    let avg = sales_sum / count as f64;

    ui.columns(3, |columns: &mut [Ui]| {
        metric(&mut columns[0], "Total Revenue", &format_currency(sales_sum), None);
        metric(
            &mut columns[1],
            "Net Profit (Est.)",
            &format_currency(profit_sum),
            Some("20% margin"),
        );
        metric(&mut columns[2], "Avg. Transaction", &format_currency(avg), None);
    });
}

/// Pick the placeholder shown when no visible row has a summable Sales
/// value. The all-unparseable edge (mean was undefined) reads differently
/// from an empty file or a filter that hides everything.
fn empty_metrics_message(any_visible: bool, table_is_empty: bool) -> &'static str {
    if any_visible {
        "Insufficient sales data: no Sales value in this file could be parsed."
    } else if table_is_empty {
        "No records in this file."
    } else {
        "No records match the current region selection."
    }
}

fn metric(ui: &mut Ui, label: &str, value: &str, caption: Option<&str>) {
    ui.group(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.label(RichText::new(label).small().weak());
            ui.label(RichText::new(value).size(22.0).strong());
            if let Some(caption) = caption {
                ui.label(
                    RichText::new(caption)
                        .small()
                        .color(Color32::from_rgb(46, 160, 67)),
                );
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Currency formatting
// ---------------------------------------------------------------------------

/// Format a dollar amount with thousands separators and two decimals,
/// e.g. `1234567.891` → `$1,234,567.89`. Rounding happens here only; the
/// underlying values keep full precision.
pub fn format_currency(value: f64) -> String {
    let total_cents = (value.abs() * 100.0).round() as u128;
    let dollars = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(dollars.len() + dollars.len() / 3);
    for (i, ch) in dollars.chars().enumerate() {
        if i > 0 && (dollars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && total_cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(7.5), "$7.50");
        assert_eq!(format_currency(700.0), "$700.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn rounds_to_cents_for_display_only() {
        let third = 1100.0 / 3.0;
        assert_eq!(format_currency(third), "$366.67");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_currency(-42.0), "-$42.00");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
        // Rounds away the sign entirely for sub-cent negatives.
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn placeholder_distinguishes_why_metrics_are_absent() {
        // Rows visible but nothing parsed: the all-unparseable edge.
        assert!(empty_metrics_message(true, false).starts_with("Insufficient sales data"));
        // No rows at all vs. a filter that hides every row.
        assert_eq!(empty_metrics_message(false, true), "No records in this file.");
        assert_eq!(
            empty_metrics_message(false, false),
            "No records match the current region selection."
        );
    }
}
