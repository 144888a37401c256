mod summary;
pub mod views;

pub use summary::{StressReport, NOTICE, PRIVACY_NOTE, REPORT_TITLE};
