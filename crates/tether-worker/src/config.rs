//! Worker configuration.

/// The worker's single recognized option.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerConfig {
    /// Echo each incoming command name to stderr before executing it.
    pub debug: bool,
}

impl WorkerConfig {
    /// Read configuration from the environment (`TETHER_DEBUG=1`).
    pub fn from_env() -> Self {
        let debug = std::env::var("TETHER_DEBUG")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        WorkerConfig { debug }
    }
}
