pub mod descriptor;
pub mod error;
pub mod export;
pub mod generate;
pub mod naming;
pub mod scan;
pub mod verify;

pub use generate::{Generator, GeneratorConfig, Report};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
