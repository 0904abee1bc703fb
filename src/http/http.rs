use std::net::SocketAddr;
use std::sync::Arc;
use log::{debug, error, info};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::http::structs::doc_handler::DocHandler;
use crate::http::structs::doc_server::DocServer;

/// Binds `addr` and serves connections until `rx` changes.
///
/// Binding happens before this returns, so a port in use is reported to the
/// caller instead of inside the spawned task.
#[tracing::instrument(level = "debug", skip(server, rx))]
pub async fn http_service(addr: SocketAddr, server: Arc<DocServer>, rx: watch::Receiver<bool>) -> std::io::Result<JoinHandle<()>>
{
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    info!("[HTTP] Starting server listener on {local_addr} serving {} modules", server.catalog().len());
    Ok(tokio::spawn(async move {
        http_listener(listener, server, rx).await;
    }))
}

/// Accept loop, one task per connection.
pub async fn http_listener(listener: TcpListener, server: Arc<DocServer>, mut rx: watch::Receiver<bool>)
{
    loop {
        tokio::select! {
            _ = rx.changed() => {
                match listener.local_addr() {
                    Ok(addr) => info!("[HTTP] Stopping server listener on {addr}..."),
                    Err(_) => info!("[HTTP] Stopping server listener...")
                }
                break;
            }
            result = listener.accept() => {
                match result {
                    Ok((stream, peer)) => {
                        let handler = DocHandler::new(server.clone(), peer);
                        tokio::spawn(async move {
                            if let Err(error) = handler.handle(stream).await {
                                debug!("[HTTP] Connection from {peer} ended without a response: {error}");
                            }
                        });
                    }
                    Err(error) => {
                        error!("[HTTP] Unable to accept a connection: {error}");
                    }
                }
            }
        }
    }
}
