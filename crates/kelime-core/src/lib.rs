pub mod error;
pub mod improver;
pub mod orchestrator;
pub mod pacer;
pub mod pipeline;
pub mod placeholder;
pub mod writer;

pub use error::{EnrichError, Result};
pub use improver::{EXAMPLE_SEPARATOR, EnrichmentOutcome, FieldImprover};
pub use orchestrator::{BatchReport, Orchestrator};
pub use pacer::Pacer;
pub use pipeline::{PipelineSummary, run_pipeline};
pub use writer::DatasetWriter;

#[cfg(test)]
mod tests;
