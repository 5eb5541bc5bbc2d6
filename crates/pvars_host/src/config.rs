//! Plugin configuration.

/// Display name announced when the plugin loads.
pub const PLUGIN_NAME: &str = "PVar plugin";

/// Plugin version.
pub const PLUGIN_VERSION: &str = "1.0";

/// Author line of the load banner.
pub const PLUGIN_AUTHOR: &str = "rizlone";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "PVARS_LOG";

/// Environment variable toggling the load banner.
pub const BANNER_ENV: &str = "PVARS_BANNER";

/// Configuration for a [`Plugin`](crate::Plugin) and the runtime hosting it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PluginConfig {
    /// Whether `load` announces the plugin.
    pub show_banner: bool,

    /// `tracing` filter directive used by the runtime's subscriber.
    pub log_filter: String,

    /// Number of REPL history entries to keep.
    pub history_size: usize,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            show_banner: true,
            log_filter: "pvars=info".to_string(),
            history_size: 1000,
        }
    }
}

impl PluginConfig {
    /// Creates a configuration with no banner.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            show_banner: false,
            ..Self::default()
        }
    }

    /// Creates the default configuration overlaid with `PVARS_LOG` and
    /// `PVARS_BANNER`.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_lookup(|key| std::env::var(key).ok())
    }

    /// Overlays settings read through `lookup`.
    ///
    /// A banner value of `0` or `false` (any case) disables the banner; any
    /// other value enables it. Empty values are ignored.
    #[must_use]
    pub fn with_lookup(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            self.log_filter = filter.trim().to_string();
        }
        if let Some(flag) = lookup(BANNER_ENV).filter(|f| !f.trim().is_empty()) {
            let flag = flag.trim();
            self.show_banner = !(flag == "0" || flag.eq_ignore_ascii_case("false"));
        }
        self
    }

    /// Builder method to enable/disable the load banner.
    #[must_use]
    pub fn with_banner(mut self, show: bool) -> Self {
        self.show_banner = show;
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to set the REPL history size.
    #[must_use]
    pub fn with_history_size(mut self, size: usize) -> Self {
        self.history_size = size;
        self
    }
}
