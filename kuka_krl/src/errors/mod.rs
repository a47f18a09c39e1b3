mod krl_error;
pub use krl_error::*;
