mod generator_config;
pub use generator_config::*;

mod src_generator;
pub use src_generator::*;
