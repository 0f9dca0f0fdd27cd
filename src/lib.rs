// Public modules
pub mod config;
pub mod errors;
pub mod render;
pub mod shape;
pub mod value;

// Re-export commonly used types
pub use config::{load, load_with_source, parse, ArrayConfig, SectionedConfig, SubtableConfig};
pub use errors::{ConfigError, ConfigResult};
pub use render::Renderable;
pub use shape::{inspect, inspect_fixtures, InspectOptions, Shape};
pub use value::ConfigValue;

use tracing_subscriber::EnvFilter;

/// Initialize tracing with default configuration.
///
/// Log lines go to stderr so stdout carries only the inspection report.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Formats an error with its source chain, one cause per line
pub fn error_report(error: &ConfigError) -> String {
    let mut report = format!("error during {}: {}", error.phase(), error);
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        report.push_str(&format!("\n  caused by: {}", cause));
        source = cause.source();
    }
    report
}
