use tracing_subscriber::EnvFilter;

/// Filter directives: `--debug` wins, then `RUST_LOG`, then warnings only
fn filter_directives(debug: bool, rust_log: Option<&str>) -> String {
    if debug {
        return "warn,llmsql=debug".to_string();
    }
    match rust_log {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => "warn".to_string(),
    }
}

/// Send structured logs to stderr so stdout stays parseable
pub(crate) fn init_logging(debug: bool) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directives = filter_directives(debug, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directives).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .try_init();
}
