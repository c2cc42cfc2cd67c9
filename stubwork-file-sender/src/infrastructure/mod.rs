pub mod clock;
pub mod config;
pub mod ecdsa_cryptographer;
pub mod in_memory_sender;
pub mod json_recognizer;
pub mod key_pair;
pub mod sled_outbox_sender;

pub use clock::{FixedClock, SystemClock};
pub use config::{ConfigError, SenderConfig};
pub use ecdsa_cryptographer::EcdsaCryptographer;
pub use in_memory_sender::InMemorySender;
pub use json_recognizer::JsonDocumentRecognizer;
pub use key_pair::{KeyAlgorithm, KeyPair};
pub use sled_outbox_sender::SledOutboxSender;
