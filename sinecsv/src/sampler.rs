use std::io;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::csv::write_csv_file;
use crate::signal_generator::SineSamples;
use crate::variant::Variant;

pub const OUTPUT_FILE: &str = "sine.csv";

#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub variant: Variant,
    pub output: PathBuf,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            variant: Variant::default(),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl SamplerConfig {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }
}

pub fn run(config: &SamplerConfig) -> io::Result<usize> {
    debug!(
        variant = %config.variant,
        samples = config.variant.sample_count(),
        output = %config.output.display(),
        "sampling sine"
    );
    let samples = SineSamples::generate(config.variant);
    let rows = write_csv_file(&config.output, &samples)?;
    info!(rows, output = %config.output.display(), "wrote sine table");
    Ok(rows)
}
