use tracing::Subscriber;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

/// Adds a journald layer when journald is reachable. Without it, logs only go to
/// the other layers.
pub fn add_layer<S>(subscriber: S) -> impl Subscriber + for<'span> LookupSpan<'span>
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    let layer = match tracing_journald::layer() {
        Ok(layer) => Some(layer.with_syslog_identifier("tilecfg".to_owned())),
        Err(err) => {
            eprintln!("Couldn't setup journald logging: {err}");
            None
        }
    };
    subscriber.with(layer)
}
