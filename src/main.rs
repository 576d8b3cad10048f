use clap::Parser;
use cli::Args;

mod app_context;
mod calendar;
mod cities;
mod cli;
mod game;
mod geo;
mod health;
mod http;
mod logging;
mod presentation;
mod scoring;
mod stats;
mod storage;
mod target;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init();

    let app_context = app_context::init(&args).await?;
    app_context.spawn_target_resolution();
    let router = http::router::new(&args, app_context.clone());

    let listener = tokio::net::TcpListener::bind(args.listen_address).await?;
    tracing::info!(listen_address = %args.listen_address, "Serving.");
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    app_context.shutdown();
    tracing::info!("Shut down.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to listen for the shutdown signal.");
    }
}
