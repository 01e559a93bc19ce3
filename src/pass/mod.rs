//! Password generation: class registry, configuration and sampler.

pub mod charset;
mod config;
mod generate;

pub use charset::CharClass;
pub use config::{GeneratorConfig, MAX_FORM_LENGTH};
pub use generate::generate_batch;
