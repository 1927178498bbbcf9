use tracing::Subscriber;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use xdg::BaseDirectories;

const LOG_FILE_NAME: &str = "tilecfg.log";

/// Adds a layer writing to `$XDG_CACHE_HOME/tilecfg/tilecfg.log`. Skipped when the
/// cache directory cannot be created.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = get_log_writer().map(|writer| {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(writer)
    });
    subscriber.with(layer)
}

fn get_log_writer() -> Option<RollingFileAppender> {
    let dirs = BaseDirectories::with_prefix("tilecfg")
        .map_err(|err| eprintln!("Couldn't find the cache directory: {err}"))
        .ok()?;
    let dir = dirs
        .create_cache_directory("")
        .map_err(|err| eprintln!("Couldn't create log directory: {err}"))
        .ok()?;
    Some(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
}
