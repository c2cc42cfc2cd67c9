use crate::domain::{Certificate, File, SendReport};

use super::SingleFileSend;

/// Sends a batch file by file; one file's failure never affects another.
pub struct MultiFileSender<F> {
    pub single_file_sender: F,
}

impl<F> MultiFileSender<F>
where
    F: SingleFileSend,
{
    pub fn send_files(&self, files: &[File], certificate: &Certificate) -> SendReport {
        let mut report = SendReport::default();

        for file in files {
            match self.single_file_sender.try_send_file(file, certificate) {
                Ok(()) => report.record_sent(),
                Err(reason) => {
                    tracing::info!("Skipped file {}: {}", file.name(), reason);
                    report.record_skipped(file.clone(), reason);
                }
            }
        }

        tracing::debug!(
            "Sent {} of {} files",
            report.sent_count(),
            files.len()
        );
        report
    }
}
