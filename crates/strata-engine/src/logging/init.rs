use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provides one.
///
/// wgpu is chatty at `info`; the compositor's own frame logs live at `debug`.
pub const DEFAULT_FILTER: &str = "info,wgpu_core=warn,wgpu_hal=warn";

/// Logger configuration.
///
/// `env_filter` uses the `env_logger` filter syntax, e.g.
/// `"strata_engine=debug"` for per-frame begin/end lines or
/// `"strata_engine::render=trace"` for every draw.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    /// Include module paths in each line.
    pub module_path: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            module_path: true,
        }
    }
}

impl LoggingConfig {
    pub fn with_filter(filter: impl Into<String>) -> Self {
        Self {
            env_filter: Some(filter.into()),
            ..Self::default()
        }
    }

    /// Filter actually applied: explicit config, then `RUST_LOG`, then [`DEFAULT_FILTER`].
    pub fn resolved_filter(&self) -> String {
        self.env_filter
            .clone()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .unwrap_or_else(|| DEFAULT_FILTER.to_owned())
    }
}

static INIT: Once = Once::new();

/// Installs the global logger. Later calls are ignored.
///
/// Call early in `main`, before the first frame is recorded.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolved_filter();

        let mut builder = env_logger::Builder::new();
        builder
            .parse_filters(&filter)
            .write_style(config.write_style)
            .format_module_path(config.module_path);

        // Another logger may already be installed by the host application.
        if builder.try_init().is_err() {
            log::warn!("logger already installed; strata logging config ignored");
            return;
        }

        log::debug!("logging initialized with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_filter_wins() {
        let config = LoggingConfig::with_filter("strata_engine=trace");
        assert_eq!(config.resolved_filter(), "strata_engine=trace");
        assert!(config.module_path);
    }

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig::with_filter("warn"));
        init_logging(LoggingConfig::with_filter("trace"));
        log::info!("still usable after repeated init");
    }
}
