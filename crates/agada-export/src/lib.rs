//! agada-export
//!
//! Clinical summary rendering: a saved case record becomes the printable
//! HTML report. PDF conversion stays with the platform print service.

pub mod error;
pub mod render;
pub mod styles;

pub use error::ExportError;
pub use render::report_html;
pub use styles::ReportStyles;
