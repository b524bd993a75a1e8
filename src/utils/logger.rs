use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "card_field_format=info";
const VERBOSE_FILTER: &str = "card_field_format=debug,info";

fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        env_filter(VERBOSE_FILTER)
    } else {
        env_filter(DEFAULT_FILTER)
    };

    // stdout carries formatted values, logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

/// Like [`init_cli_logger`] but with a caller-supplied filter directive,
/// used when the config file carries a `[logging]` section.
pub fn init_with_filter(directive: &str, json: bool) {
    let filter = env_filter(directive);
    let registry = tracing_subscriber::registry().with(filter);

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    if json {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer.compact()).init();
    }
}

pub fn init_json_logger() {
    init_with_filter(DEFAULT_FILTER, true);
}
