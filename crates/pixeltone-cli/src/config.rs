//! Runtime configuration for the command-line front end.

/// Default log filter when `PIXELTONE_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directive, e.g. `info` or `pixeltone_core=debug`.
    pub log_filter: String,
    /// Worker threads for the rayon pool. `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

impl CliConfig {
    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            log_filter: lookup("PIXELTONE_LOG")
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            threads: lookup("PIXELTONE_THREADS")
                .and_then(|s| s.trim().parse().ok())
                .filter(|&n: &usize| n > 0),
        }
    }
}
