//! DiscoKV CLI Client
//!
//! Command-line interface for publishing to and reading from a DiscoKV server.

use clap::{Parser, Subcommand};
use discokv::protocol::{GetRequest, GetResponse, PutRequest};

/// DiscoKV CLI
#[derive(Parser, Debug)]
#[command(name = "discokv-cli")]
#[command(about = "CLI for the DiscoKV discovery registry")]
struct Args {
    /// Server address
    #[arg(short, long, default_value = "127.0.0.1:65001")]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Publish a value under key/sub
    Put {
        /// Primary key
        key: String,

        /// Sub-key
        sub: String,

        /// Value to publish
        value: String,
    },

    /// List every sub-key and value under a key
    Get {
        /// Primary key
        key: String,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let client = reqwest::Client::new();
    let base = format!("http://{}", args.server);

    match args.command {
        Commands::Put { key, sub, value } => {
            let response = client
                .post(format!("{}/put", base))
                .json(&PutRequest { key, sub, value })
                .send()
                .await?;
            check_status(response).await?;
            println!("OK");
        }
        Commands::Get { key } => {
            let response = client
                .post(format!("{}/get", base))
                .json(&GetRequest { key })
                .send()
                .await?;
            let reply: GetResponse = check_status(response).await?.json().await?;
            for item in reply.value_list {
                println!("{}\t{}", item.sub, item.value);
            }
        }
    }

    Ok(())
}

async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, Box<dyn std::error::Error>> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(format!("server returned {}: {}", status, message.trim()).into())
}
