use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{filter::ParseError, layer::SubscriberExt, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

#[cfg(feature = "file-log")]
pub mod file;

/// Builds the subscriber for `level`, which uses `EnvFilter` directive syntax.
///
/// An unparsable level falls back to `warn` and the parse error is handed back so
/// the caller can report it once logging works.
#[must_use]
pub fn parse_log_level(level: &str) -> (impl Subscriber, Option<ParseError>) {
    let builder = EnvFilter::builder().with_default_directive(LevelFilter::WARN.into());
    let (filter, parse_err) = match builder.parse(level) {
        Ok(filter) => (filter, None),
        Err(err) => (
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .parse_lossy(""),
            Some(err),
        ),
    };
    (get_subscribers(filter), parse_err)
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    #[cfg(feature = "file-log")]
    let subscriber = file::add_layer(subscriber);

    subscriber
}

/// Installs the global subscriber. Does nothing when one is already set.
pub fn init(level: &str) {
    let (subscriber, parse_err) = parse_log_level(level);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }
    if let Some(err) = parse_err {
        tracing::warn!("Invalid log level `{level}`, using warn: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_level_is_reported() {
        let (_, err) = parse_log_level("tilecfg=loud");
        assert!(err.is_some());
    }

    #[test]
    fn directives_are_accepted() {
        let (_, err) = parse_log_level("warn,tilecfg=debug");
        assert!(err.is_none());
    }
}
