use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "jexl-cli")]
#[command(about = "Client for the JEXL playground service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an expression against a JSON context
    Eval {
        expression: String,

        /// Inline JSON context (defaults to {})
        #[arg(short, long)]
        context: Option<String>,

        /// Read the JSON context from a file
        #[arg(long, conflicts_with = "context")]
        context_file: Option<PathBuf>,
    },
    /// Check service liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Eval {
            expression,
            context,
            context_file,
        } => {
            let context: Value = match (context, context_file) {
                (Some(raw), _) => serde_json::from_str(&raw)?,
                (None, Some(path)) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
                (None, None) => Value::Object(Default::default()),
            };

            let res = client
                .post(format!("{}/evaluate", cli.url))
                .json(&serde_json::json!({
                    "expression": expression,
                    "context": context,
                }))
                .send()
                .await?;

            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: service returned status {}", status);
                std::process::exit(1);
            }

            let body: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
            if !body["error"].is_null() {
                std::process::exit(1);
            }
        }
        Commands::Health => {
            let res = client.get(format!("{}/healthz", cli.url)).send().await?;
            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: service returned status {}", status);
                std::process::exit(1);
            }
            let body: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
    }

    Ok(())
}
