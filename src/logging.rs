//! Logger setup
//!
//! Native builds log through `env_logger` (`RUST_LOG` overrides the default
//! `info` level). On the web there is no stderr, so the `log` macros stay
//! no-ops.

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Once;

#[cfg(not(target_arch = "wasm32"))]
static INIT: Once = Once::new();

/// Install the global logger. Later calls are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.init();
        log::debug!("logging initialized");
    });
}

#[cfg(target_arch = "wasm32")]
pub fn init() {}
