//! Tracing subscriber setup.

use std::env::{self, VarError};

use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;
use crate::result::{KataError, KataResult};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over `config.level`; a malformed `RUST_LOG`
/// is an error rather than a silent fallback. Fails if a global subscriber is
/// already set.
pub fn init_tracing(config: &LogConfig) -> KataResult<()> {
    let filter = resolve_filter(env::var(EnvFilter::DEFAULT_ENV), &config.level)?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| KataError::Logging {
        message: e.to_string(),
    })?;

    debug!(level = %config.level, json = config.json, "tracing initialised");
    Ok(())
}

/// Parse a level directive such as `info` or `kata=debug`
pub fn build_filter(level: &str) -> KataResult<EnvFilter> {
    EnvFilter::try_new(level).map_err(|e| KataError::Logging {
        message: e.to_string(),
    })
}

/// Pick the `RUST_LOG` directives when present, the configured level otherwise
fn resolve_filter(rust_log: Result<String, VarError>, level: &str) -> KataResult<EnvFilter> {
    match rust_log {
        Ok(directives) => build_filter(&directives),
        Err(VarError::NotPresent) => build_filter(level),
        Err(e @ VarError::NotUnicode(_)) => Err(KataError::Logging {
            message: format!("{}: {e}", EnvFilter::DEFAULT_ENV),
        }),
    }
}
