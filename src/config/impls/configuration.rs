use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use regex::Regex;
use crate::common::common::parse_log_level;
use crate::common::structs::custom_error::CustomError;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::http_server_config::HttpServerConfig;
use crate::structs::Cli;

pub const MODULE_NAME_REGEX: &str = r"^[A-Za-z_][A-Za-z0-9_]*(\.[A-Za-z_][A-Za-z0-9_]*)*$";

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            modules: vec![],
            search_path: vec![String::from(".")],
            http_server: vec!(
                HttpServerConfig::init()
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, CustomError> {
        let config = match Configuration::load_file(path) {
            Ok(c) => c,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {}", error);

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(CustomError::new(&format!("will not create automatically {path} file")));
                }
                eprintln!("Creating config file..");

                let config_toml = match toml::to_string(&Configuration::init()) {
                    Ok(data) => data,
                    Err(e) => return Err(CustomError::new(&format!("could not serialize default configuration: {e}")))
                };
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and add the modules to document, exiting now...");
                        Err(CustomError::new(&format!("created {path} file")))
                    }
                    Err(e) => {
                        eprintln!("{path} file could not be created, check permissions...");
                        eprintln!("{e}");
                        Err(CustomError::new(&format!("could not create {path} file")))
                    }
                };
            }
        };

        Ok(config)
    }

    /// Command line values take precedence over the file.
    ///
    /// `--bind` replaces every configured listener with a single one,
    /// `--search-path` entries are searched before the configured ones and
    /// positional modules replace the configured roots.
    pub fn apply_cli(&mut self, args: &Cli) {
        if let Some(bind) = &args.bind {
            let template = self.http_server.first().cloned().unwrap_or_else(HttpServerConfig::init);
            self.http_server = vec![HttpServerConfig {
                enabled: true,
                bind_address: bind.clone(),
                ..template
            }];
        }
        if !args.search_path.is_empty() {
            let mut search_path = args.search_path.clone();
            search_path.extend(self.search_path.drain(..));
            self.search_path = search_path;
        }
        if !args.modules.is_empty() {
            self.modules = args.modules.clone();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level \"{}\"", self.log_level)));
        }

        let module_regex = Regex::new(MODULE_NAME_REGEX)
            .map_err(|e| ConfigurationError::ValidationError(e.to_string()))?;
        for module in &self.modules {
            Self::validate_value("[MODULES]", module, &module_regex)?;
        }

        for server in &self.http_server {
            if server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("[HTTP] Bind address \"{}\" is not a socket address", server.bind_address)));
            }
            if server.max_header_size == Some(0) {
                return Err(ConfigurationError::ValidationError(format!("[HTTP] max_header_size for {} must be positive", server.bind_address)));
            }
        }
        Ok(())
    }

    pub fn validate_value(name: &str, value: &str, regex: &Regex) -> Result<(), ConfigurationError>
    {
        if !regex.is_match(value) {
            return Err(ConfigurationError::ValidationError(format!("{} Name: \"{}\" [:] Regex: \"{}\"", name, value, regex)));
        }
        Ok(())
    }
}
