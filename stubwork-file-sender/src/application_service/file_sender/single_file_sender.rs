use crate::domain::{Certificate, File, SkipReason};

use super::{Cryptographer, DocumentCheck, Recognizer, Sender, SingleFileSend};

/// Recognize, check, sign and send a single file.
///
/// Stops at the first failing step; content is signed only after the document
/// passed the check.
pub struct SingleFileSender<R, K, S, D> {
    pub recognizer: R,
    pub cryptographer: K,
    pub sender: S,
    pub document_checker: D,
}

impl<R, K, S, D> SingleFileSend for SingleFileSender<R, K, S, D>
where
    R: Recognizer,
    K: Cryptographer,
    S: Sender,
    D: DocumentCheck,
{
    fn try_send_file(&self, file: &File, certificate: &Certificate) -> Result<(), SkipReason> {
        let document = self
            .recognizer
            .try_recognize(file)
            .ok_or(SkipReason::NotRecognized)?;

        self.document_checker.check(&document)?;

        let signed_content = self.cryptographer.sign(document.content(), certificate);

        self.sender
            .try_send(&signed_content)
            .map_err(|e| SkipReason::SendFailed(e.to_string()))
    }
}
