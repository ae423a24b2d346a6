use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::layer::SubscriberExt;

pub fn get_subscriber(
    debug: bool,
    max_log_files: usize,
) -> Result<(impl tracing::Subscriber + Send + Sync, WorkerGuard), String> {
    let env_filter = if debug {
        "trace".to_string()
    } else {
        "info".to_string()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(env_filter));

    let json_log = if !debug {
        let json_log = tracing_subscriber::fmt::layer().json();
        Some(json_log)
    } else {
        None
    };

    let file_appender = rolling::Builder::new()
        .rotation(rolling::Rotation::DAILY)
        .filename_prefix("quiz_host")
        .filename_suffix("log")
        .max_log_files(max_log_files)
        .build("./logs")
        .map_err(|e| e.to_string())?;
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let file_log = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(non_blocking);

    let stdout_log = tracing_subscriber::fmt::layer().pretty();
    let subscriber = tracing_subscriber::Registry::default()
        .with(env_filter)
        .with(stdout_log)
        .with(json_log)
        .with(file_log);

    Ok((subscriber, _guard))
}

pub fn init_subscriber(debug: bool, max_log_files: usize) -> Result<WorkerGuard, String> {
    let (subscriber, _guard) = get_subscriber(debug, max_log_files)?;
    tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())?;
    Ok(_guard)
}
