//! Greeting server binary
//!
//! Resolves the port from the `PORT` environment variable (default 8080),
//! binds, announces itself on stdout, and serves until terminated. A bind
//! failure is reported on stderr and exits with a non-zero status.

use greet_core::{Server, ServerConfig};

#[tokio::main]
async fn main() {
    let config = ServerConfig::from_env();

    let server = match Server::bind(&config) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    println!("Server running on {}", config.local_url());

    if let Err(e) = server.serve().await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
