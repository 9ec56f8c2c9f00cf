/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins when set. Otherwise our crates log at INFO (everything at
/// DEBUG with `debug`) and dependencies at WARN. Output goes to stderr; stdout
/// is reserved for the game trace.
pub fn init(debug: bool) {
    let log_filter = if debug {
        "debug".to_string()
    } else {
        "tigerdragon_client=info,warn".to_string()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .with_file(debug)
        .with_line_number(debug)
        .init();
}
