use std::collections::HashMap;
use std::time::SystemTime;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

/// Splits a raw query string into percent-decoded key/value lists.
///
/// Keys are lowercased. A key without `=` is recorded with an empty value so
/// that flags such as `?mtime` are still visible to the router.
pub fn parse_query(query: Option<String>) -> HashMap<String, Vec<String>> {
    let mut queries: HashMap<String, Vec<String>> = HashMap::new();
    let Some(raw) = query else {
        return queries;
    };
    for query_item in raw.split('&') {
        if query_item.is_empty() {
            continue;
        }
        let (key_raw, value_raw) = match query_item.split_once('=') {
            Some((key, value)) => (key, value),
            None => (query_item, "")
        };
        let key_name = percent_encoding::percent_decode_str(key_raw).decode_utf8_lossy().to_lowercase();
        if key_name.is_empty() {
            continue;
        }
        let value_data = percent_encoding::percent_decode_str(value_raw).decode_utf8_lossy().to_string();
        queries.entry(key_name).or_default().push(value_data);
    }
    queries
}

pub fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c)
        }
    }
    escaped
}

/// Seconds since the unix epoch, with sub-second precision.
pub fn system_time_to_secs(time: SystemTime) -> f64 {
    match time.duration_since(SystemTime::UNIX_EPOCH) {
        Ok(duration) => duration.as_secs_f64(),
        Err(_) => 0.0
    }
}

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration) -> Result<(), CustomError>
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            return Err(CustomError::new(&format!("Unknown log level encountered: '{}'", config.log_level)));
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        return Err(CustomError::new(&format!("Failed to initialize logging: {err}")));
    }
    info!("logging initialized.");
    Ok(())
}

/// Whether `name` is a single (non-dotted) Python identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false
    }
}
