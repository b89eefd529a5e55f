//!
//! Setup logging subsystem.
//!

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer, Registry,
};

use super::config::{self, LogFormat, LogLevel};

/// Guard holding the non-blocking writer workers. Log lines may be lost once
/// it is dropped, so keep it alive for the lifetime of the process.
#[derive(Debug)]
pub struct TelemetryGuard {
    _log_guards: Vec<WorkerGuard>,
}

fn level_filter(level: LogLevel) -> LevelFilter {
    level
        .into_level()
        .map_or(LevelFilter::OFF, LevelFilter::from_level)
}

fn targets_filter(level: LogLevel, crates_to_watch: &[&str]) -> Targets {
    Targets::new().with_default(LevelFilter::WARN).with_targets(
        crates_to_watch
            .iter()
            .map(|name| (*name, level_filter(level))),
    )
}

///
/// Setup logging sub-system, given the log config and the list of crates to
/// watch at the configured level. Everything else is logged at `WARN`.
///
pub fn setup(conf: &config::Log, crates_to_watch: &[&str]) -> TelemetryGuard {
    let mut guards = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    if conf.file.enabled {
        let mut path = crate::env::workspace_path();
        path.push(&conf.file.path);
        let file_appender = tracing_appender::rolling::hourly(&path, &conf.file.file_name);
        let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
        guards.push(guard);

        let file_layer = fmt::layer()
            .json()
            .with_writer(file_writer)
            .with_filter(targets_filter(conf.file.level, crates_to_watch));
        layers.push(file_layer.boxed());
    }

    if conf.console.enabled {
        let console_filter = targets_filter(conf.console.level, crates_to_watch);
        match conf.console.log_format {
            LogFormat::Default => {
                let console_layer = fmt::layer()
                    .with_target(true)
                    .with_writer(std::io::stdout)
                    .with_filter(console_filter);
                layers.push(console_layer.boxed());
            }
            LogFormat::Json => {
                let console_layer = fmt::layer()
                    .json()
                    .with_writer(std::io::stdout)
                    .with_filter(console_filter);
                layers.push(console_layer.boxed());
            }
        }
    }

    tracing_subscriber::registry().with(layers).init();

    TelemetryGuard {
        _log_guards: guards,
    }
}
