/// UI layer: dashboard panels, KPI metrics, the trend chart, and the
/// raw-record inspector. Everything here reads `AppState` and never
/// touches the cleaned table directly.

pub mod metrics;
pub mod panels;
pub mod plot;
pub mod table;
