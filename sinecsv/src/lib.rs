pub mod csv;
pub mod sampler;
pub mod signal_generator;
pub mod variant;

pub use sampler::{run, SamplerConfig, OUTPUT_FILE};
pub use signal_generator::SineSamples;
pub use variant::Variant;
