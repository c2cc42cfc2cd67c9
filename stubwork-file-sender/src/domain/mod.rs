pub mod certificate;
pub mod document;
pub mod file;
pub mod report;

pub use certificate::Certificate;
pub use document::Document;
pub use file::File;
pub use report::{SendReport, SkipReason, SkippedFile};
