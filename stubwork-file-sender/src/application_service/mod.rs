pub mod file_sender;
