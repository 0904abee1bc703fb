use std::net::SocketAddr;
use std::process::exit;
use std::sync::Arc;
use clap::Parser;
use futures_util::future::try_join_all;
use log::{error, info, warn};
use tokio::runtime::Builder;
use docserver::catalog::structs::diagnostics::Diagnostics;
use docserver::catalog::traits::module_source::ModuleSource;
use docserver::common::common::setup_logging;
use docserver::config::structs::configuration::Configuration;
use docserver::http::http::http_service;
use docserver::http::structs::doc_server::DocServer;
use docserver::source::structs::fs_module_source::FsModuleSource;
use docserver::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let mut config = match Configuration::load_from_file(&args.config, args.create_config) {
        Ok(config) => config,
        Err(_) => exit(101)
    };
    config.apply_cli(&args);
    println!("[VALIDATE] Validating configuration...");
    if let Err(error) = config.validate() {
        eprintln!("[VALIDATE CONFIG] {error}");
        exit(101);
    }

    if let Err(error) = setup_logging(&config) {
        eprintln!("{error}");
        exit(1);
    }

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(config);

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let source = FsModuleSource::from_config(&config);
            let search_path: Vec<String> = source.search_path().iter().map(|path| path.display().to_string()).collect();
            info!("[BOOT] Resolving {} root modules in: {}", config.modules.len(), search_path.join(", "));
            let source: Arc<dyn ModuleSource> = Arc::new(source);

            let mut diagnostics = Diagnostics::new();
            let server = DocServer::new(&config.modules, source, &mut diagnostics);
            if !diagnostics.is_empty() {
                warn!("[BOOT] {} modules could not be imported, their pages will show the error", diagnostics.len());
            }

            let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
            let mut services = Vec::new();
            for server_config in config.http_server.iter().filter(|server_config| server_config.enabled) {
                let addr: SocketAddr = match server_config.bind_address.parse() {
                    Ok(addr) => addr,
                    Err(error) => {
                        error!("[HTTP] Invalid bind address {}: {error}", server_config.bind_address);
                        exit(1);
                    }
                };
                let listener_server = Arc::new(server.clone().with_limits(server_config));
                match http_service(addr, listener_server, shutdown_rx.clone()).await {
                    Ok(handle) => services.push(handle),
                    Err(error) => {
                        error!("[HTTP] Could not listen on {addr}: {error}");
                        exit(1);
                    }
                }
            }

            if services.is_empty() {
                warn!("[BOOT] No HTTP server enabled, nothing to do");
                return Ok(());
            }

            tokio::signal::ctrl_c().await?;
            info!("Shutdown request received, shutting down...");
            let _ = shutdown_tx.send(true);
            let _ = try_join_all(services).await;
            info!("Server shutting down completed");
            Ok(())
        })
}
