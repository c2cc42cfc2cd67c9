pub mod application_service;
pub mod domain;
pub mod infrastructure;

pub use application_service::file_sender::{
    DocumentChecker, FileSender, MultiFileSender, SingleFileSender,
};
pub use domain::{Certificate, Document, File, SendReport, SkipReason, SkippedFile};
