use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file to load.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if not exists or is broken.
    #[arg(long)]
    pub create_config: bool,
    /// Listen on this address only, replacing the configured listeners.
    #[arg(long)]
    pub bind: Option<String>,
    /// Directory to resolve modules in, searched before the configured ones.
    #[arg(long = "search-path", value_name = "DIR")]
    pub search_path: Vec<String>,
    /// Root modules to document, replacing the configured ones.
    #[arg(value_name = "MODULES")]
    pub modules: Vec<String>,
}
