use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_DIRECTIVES: &str =
    "kundli_chart=debug,kundli_match=debug,kundli_config=debug,kundli_rs=debug,kundli=debug,warn";

/// Logs go to stderr so stdout stays clean JSON.
pub fn init_logger(verbose: bool, json: bool) {
    let fallback = if verbose { VERBOSE_DIRECTIVES } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        tracing_subscriber::registry().with(filter).with(layer.json()).init();
    } else {
        tracing_subscriber::registry().with(filter).with(layer.compact()).init();
    }
}
