//! Scribe Server CLI
//!
//! Starts the HTTP server bridging the document store and the generator.

use scribe_server::{config::ServerConfig, start_server, ServerError};
use std::env;
use std::process;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args: Vec<String> = env::args().collect();

    let config = if args.len() > 2 && args[1] == "--config" {
        ServerConfig::from_file(&args[2])?
    } else if args.len() > 1 && args[1] == "--help" {
        print_help();
        process::exit(0);
    } else {
        ServerConfig::from_env()?
    };

    start_server(config).await?;

    Ok(())
}

fn print_help() {
    println!("Scribe Server - document-store / generator bridge");
    println!();
    println!("USAGE:");
    println!("    scribe-server [--config <path-to-config.toml>]");
    println!();
    println!("OPTIONS:");
    println!("    --config <file>    Load configuration from TOML file");
    println!("    --help             Print this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    SCRIBE_STORE_TOKEN         Document-store auth token");
    println!("    SCRIBE_GENERATOR_API_KEY   Generator API key");
    println!();
    println!("CONFIGURATION:");
    println!("    The TOML config file may contain:");
    println!("    - bind_address / bind_port");
    println!("    - [store] token, endpoint");
    println!("    - [generator] api_key, endpoint, model");
    println!("    - [pipeline] page_size, prompt_text_cap, append_header");
    println!();
}
