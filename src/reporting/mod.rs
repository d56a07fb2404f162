pub mod formatter;
pub mod rows;
pub mod writer;

pub use rows::{Cell, ReportRow};
pub use writer::{write_report, ReportPaths};
