/**
 * KridArt Server Entry Point
 *
 * This is the main entry point for the KridArt engine backend server.
 * It initializes the Axum HTTP server with the API routes and the
 * WebSocket chat channel.
 */

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    tracing::info!("Server initialization started");

    let config = kridart_server::server::config::Config::from_env();
    let port = config.port;

    // Create the Axum app
    let app = kridart_server::server::init::create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    // Run the server. `into_make_service_with_connect_info` exposes the
    // client socket address to the rate-limit middleware.
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<std::net::SocketAddr>(),
    )
    .await?;

    Ok(())
}
