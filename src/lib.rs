//! SalesScope: a sales intelligence dashboard.
//!
//! The `data` module owns the one piece of real logic, the cleaning
//! pipeline turning a dirty sales CSV into a [`data::model::SalesTable`];
//! `state` and `ui` render that table as KPI metrics, a trend chart, and a
//! record inspector, without ever mutating it.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
