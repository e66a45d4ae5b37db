pub mod runner;

pub use runner::{run_sources, RunSummary, SourceFailure};
