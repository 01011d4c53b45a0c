//! Sprint report result types and helpers.

mod sprint_report;

pub use sprint_report::SprintReport;
