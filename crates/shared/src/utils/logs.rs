use tracing_appender::{
    non_blocking::WorkerGuard,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global subscriber. Keep the returned guard alive for the lifetime of the
/// process or buffered file logs are lost.
pub fn init_logger(component: &str, is_debug: bool, enable_file: bool) -> Option<WorkerGuard> {
    let default_level = if is_debug { "debug" } else { "info" };

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level))
        .add_directive("hyper=warn".parse().expect("static directive"))
        .add_directive("sqlx=warn".parse().expect("static directive"));

    let console_layer = fmt::layer()
        .pretty()
        .with_thread_names(true)
        .with_ansi(true)
        .with_filter(console_filter);

    if !enable_file {
        tracing_subscriber::registry().with(console_layer).init();
        return None;
    }

    let log_dir = if is_debug { "./logs" } else { "/var/log/app" };
    let file_name = format!("rust_app_{component}.log");
    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .json()
        .with_filter(EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();

    Some(guard)
}
