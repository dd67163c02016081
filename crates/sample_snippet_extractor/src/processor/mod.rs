pub mod file_processor;

pub use file_processor::{sample_with_source, FileSampleSource, SampleSource};
