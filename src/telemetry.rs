//! Logging setup
//!
//! Routes `tracing` events to the browser developer console.

use tracing::Level;
use tracing_wasm::WASMLayerConfigBuilder;

use crate::config::LoggingConfig;

/// Parse a level name, falling back to `info` for anything unknown
pub fn parse_level(level: &str) -> Level {
    match level.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" | "warning" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the console subscriber. Call once, before the first event.
pub fn init_logging(config: &LoggingConfig) {
    let layer_config = WASMLayerConfigBuilder::new()
        .set_max_level(parse_level(&config.level))
        .build();
    tracing_wasm::set_as_global_default_with_config(layer_config);
}
