//! Logger setup on top of the `log` facade and `env_logger`.

use std::sync::Once;

static INIT: Once = Once::new();

/// Installs the global `env_logger` backend.
///
/// Safe to call more than once; only the first call takes effect. Intended
/// early in `main`.
///
/// `filter` uses `env_logger` syntax (e.g. "info",
/// "tiamat_engine=debug,wgpu=warn"). When `None`, `RUST_LOG` is honored,
/// falling back to info-level output.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match filter.map(str::to_owned).or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(spec) => {
                builder.parse_filters(&spec);
            }
            None => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }

        builder.init();
        log::debug!("logging ready");
    });
}
