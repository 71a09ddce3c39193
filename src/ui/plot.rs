use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::state::AppState;
use crate::ui::metrics::format_currency;

// ---------------------------------------------------------------------------
// Sales trend chart (central panel)
// ---------------------------------------------------------------------------

/// Render the sales-over-time chart: one line per region, points sorted by
/// date. Rows with a missing date are omitted here (and only here).
pub fn sales_trend_plot(ui: &mut Ui, state: &AppState) {
    let mut series: BTreeMap<String, Vec<[f64; 2]>> = BTreeMap::new();
    for row in state.visible_rows() {
        let (Some(date), Some(sales)) = (row.date, row.sales) else {
            continue;
        };
        let name = row
            .region
            .clone()
            .unwrap_or_else(|| "All Sales".to_string());
        series
            .entry(name)
            .or_default()
            .push([day_number(date), sales]);
    }

    if series.is_empty() {
        ui.label(RichText::new("No dated sales to chart.").italics());
        return;
    }

    for points in series.values_mut() {
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
    }

    Plot::new("sales_trend")
        .legend(Legend::default())
        .height(350.0)
        .x_axis_label("Date")
        .y_axis_label("Sales (USD)")
        .x_axis_formatter(|mark, _range| day_label(mark.value))
        .label_formatter(|name, value| {
            if name.is_empty() {
                format!("{}\n{}", day_label(value.x), format_currency(value.y))
            } else {
                format!(
                    "{name}\n{}\n{}",
                    day_label(value.x),
                    format_currency(value.y)
                )
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for (region, points) in &series {
                let color = state
                    .color_map
                    .as_ref()
                    .map(|cm| cm.color_for(region))
                    .unwrap_or(Color32::LIGHT_BLUE);

                let line = Line::new(PlotPoints::from(points.clone()))
                    .name(region)
                    .color(color)
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}

// -- date axis helpers --

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).expect("epoch date")
}

/// Whole days since the Unix epoch, the chart's x unit.
fn day_number(date: NaiveDate) -> f64 {
    (date - epoch()).num_days() as f64
}

fn day_label(day: f64) -> String {
    (epoch() + Duration::days(day.round() as i64))
        .format("%b %d, %Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_numbering_round_trips_through_labels() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 3).expect("valid date");
        let day = day_number(date);
        assert_eq!(day_label(day), "Nov 03, 2025");
        // Fractional grid marks snap to the nearest day.
        assert_eq!(day_label(day + 0.4), "Nov 03, 2025");
    }

    #[test]
    fn epoch_is_day_zero() {
        assert_eq!(day_number(epoch()), 0.0);
        assert_eq!(day_label(0.0), "Jan 01, 1970");
    }
}
