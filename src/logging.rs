use std::env;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Logs go to stderr so stdout stays free for the tree.
///
/// `RUST_LOG` picks levels, `LOG_FORMAT=json` switches to JSON lines.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init_tracing() -> WorkerGuard {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "channel_chef=info".into());

    let (writer, guard) = tracing_appender::non_blocking(std::io::stderr());

    let json = env::var("LOG_FORMAT")
        .map(|format| format.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.with_ansi(false).try_init()
    };

    if let Err(e) = result {
        eprintln!("Failed to install tracing subscriber: {}", e);
    }

    guard
}
