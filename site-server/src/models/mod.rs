//! Database models

pub mod contact;
pub mod content_run;
pub mod scan_record;

pub use contact::{ContactMessage, CreateContactMessage};
pub use content_run::{ContentRun, RunStatus};
pub use scan_record::ScanRecord;
