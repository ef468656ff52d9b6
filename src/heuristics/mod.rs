pub mod bill_context;
pub mod name_resolver;
pub mod sentiment;
pub mod sponsor;

pub use bill_context::*;
pub use name_resolver::*;
pub use sentiment::*;
pub use sponsor::*;

use tracing::warn;

/// Environment variable overriding the sponsor lookback window
pub const SPONSOR_LOOKBACK_ENV: &str = "FLOORGRAPH_SPONSOR_LOOKBACK";

/// Configuration for interaction extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    /// Maximum number of prior utterances searched for "the sponsor"
    pub sponsor_lookback: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            sponsor_lookback: DEFAULT_SPONSOR_LOOKBACK,
        }
    }
}

impl ExtractionConfig {
    /// Defaults, with the lookback window taken from the environment when set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var(SPONSOR_LOOKBACK_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(lookback) => config.sponsor_lookback = lookback,
                Err(_) => warn!(
                    "Ignoring {}={:?}, expected a non-negative integer",
                    SPONSOR_LOOKBACK_ENV, raw
                ),
            }
        }
        config
    }
}
