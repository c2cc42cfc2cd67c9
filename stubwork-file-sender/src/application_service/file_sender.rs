pub mod document_checker;
pub mod multi_file_sender;
pub mod port;
pub mod single_file_sender;

pub use document_checker::DocumentChecker;
pub use multi_file_sender::MultiFileSender;
pub use port::{
    Clock, Cryptographer, DocumentCheck, Recognizer, SendError, Sender, SingleFileSend,
};
pub use single_file_sender::SingleFileSender;

/// Full pipeline: a `MultiFileSender` over a `SingleFileSender` using a `DocumentChecker`.
pub type FileSender<R, K, S, C> = MultiFileSender<SingleFileSender<R, K, S, DocumentChecker<C>>>;

impl<R, K, S, C> FileSender<R, K, S, C>
where
    R: Recognizer,
    K: Cryptographer,
    S: Sender,
    C: Clock,
{
    pub fn from_parts(
        recognizer: R,
        cryptographer: K,
        sender: S,
        document_checker: DocumentChecker<C>,
    ) -> Self {
        MultiFileSender {
            single_file_sender: SingleFileSender {
                recognizer,
                cryptographer,
                sender,
                document_checker,
            },
        }
    }
}
