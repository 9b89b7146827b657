use delivery_routing::web::server::{start_server, ServerConfig};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let mut config = ServerConfig::from_env();

    // A port given on the command line wins over the environment
    if let Some(arg) = env::args().nth(1) {
        config.port = arg.parse()?;
    }

    println!("Starting delivery routing server...");
    println!("   Address: http://{}", config.addr());
    println!("   CORS enabled: {}", config.enable_cors);
    println!("   Max stored routes: {}", config.max_stored_routes);
    println!();

    start_server(config).await?;

    Ok(())
}
