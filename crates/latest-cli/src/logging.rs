/// Log level selection for the tracing subscriber.
///
/// Internal tracing goes to stderr next to the user-facing diagnostics, so it
/// is kept at `warn` unless `LATEST_LOG` asks for more, and switched off
/// entirely by `--quiet`.
use tracing::level_filters::LevelFilter;

/// Environment variable holding the maximum log level.
pub const LOG_ENV: &str = "LATEST_LOG";

const DEFAULT_LEVEL: LevelFilter = LevelFilter::WARN;

/// Resolve the maximum level from `--quiet` and the raw `LATEST_LOG` value.
///
/// Unparseable values fall back to the default instead of failing the run.
pub fn max_level(quiet: bool, env_value: Option<&str>) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    env_value
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}
