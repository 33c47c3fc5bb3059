use clap::Parser;
use tracing::{debug, info};

use livepanel::config::Config;

#[derive(Parser)]
#[command(version)]
struct Args {
    /// Set config file path
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let cfg = Config::parse(args.config);
    livepanel::log::set(format!(
        "livepanel={},tower_http=warn",
        cfg.log.level
    ));
    debug!("config : {:?}", cfg);

    let listener = tokio::net::TcpListener::bind(cfg.http.listen)
        .await
        .unwrap();
    info!("Server listening on {}", listener.local_addr().unwrap());

    livepanel::serve(cfg, listener, shutdown_signal()).await;
    info!("Server shutdown");
}

#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut signal_terminate = signal(SignalKind::terminate()).unwrap();
    let mut signal_interrupt = signal(SignalKind::interrupt()).unwrap();

    let name = tokio::select! {
        _ = signal_terminate.recv() => "SIGTERM",
        _ = signal_interrupt.recv() => "SIGINT",
    };
    debug!("Received signal: {}", name);
}

#[cfg(not(unix))]
async fn shutdown_signal() {
    tokio::signal::ctrl_c().await.unwrap();
    debug!("Received signal: CTRL_C");
}
