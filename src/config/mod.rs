mod config;
mod treatment;

pub use config::*;
pub use treatment::*;
