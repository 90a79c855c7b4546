/// Filesystem and stdout adapters for presenting results
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
