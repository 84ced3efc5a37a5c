//! eSewa CLI
//!
//! Command-line interface for the gateway service API.

use anyhow::Result;
use clap::{Parser, Subcommand};

use esewa_client::EsewaClient;

#[derive(Parser)]
#[command(name = "esewa")]
#[command(author, version, about = "eSewa gateway service CLI client", long_about = None)]
struct Cli {
    /// Base URL of the gateway service API
    #[arg(long, env = "ESEWA_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a signed payment payload
    Pay {
        /// Payment amount
        #[arg(long)]
        amount: String,
        /// Tax amount
        #[arg(long)]
        tax_amount: Option<String>,
        /// Service charge
        #[arg(long)]
        service_charge: Option<String>,
        /// Delivery charge
        #[arg(long)]
        delivery_charge: Option<String>,
    },
    /// Decode a base64 gateway callback payload
    Verify {
        /// Base64-encoded callback data
        data: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = EsewaClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Pay {
            amount,
            tax_amount,
            service_charge,
            delivery_charge,
        } => {
            let payload = client
                .create_payment(
                    &amount,
                    tax_amount.as_deref(),
                    service_charge.as_deref(),
                    delivery_charge.as_deref(),
                )
                .await?;
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }

        Commands::Verify { data } => {
            let decoded = client.verify(&data).await?;
            println!("{}", serde_json::to_string_pretty(&decoded)?);
        }
    }

    Ok(())
}
