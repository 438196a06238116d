//! Operator dashboard for the intake relay.
//!
//! A terminal client of the relay's REST API: everything shown is rebuilt
//! from server responses on each invocation, nothing is cached locally.

use std::time::Duration;

use clap::{Parser, Subcommand};
use serde_json::Value;

use api_shared::{LogEntry, LogsRes};

/// Poll interval for `logs --follow`.
const FOLLOW_INTERVAL: Duration = Duration::from_secs(4);

#[derive(Parser)]
#[command(name = "relay")]
#[command(about = "OpenMic intake relay operator dashboard")]
struct Cli {
    /// Base URL of the relay server
    #[arg(long, default_value = "http://localhost:4000")]
    server: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// List bots configured at the vendor
    ListBots,
    /// Create an intake bot
    CreateBot {
        /// Bot display name
        name: String,
        /// System prompt for the bot
        prompt: String,
        /// Voice selection
        #[arg(long, default_value = "alloy")]
        voice: String,
    },
    /// Rename a bot
    RenameBot {
        /// Vendor bot identifier
        bot_id: String,
        /// New display name
        name: String,
    },
    /// Delete a bot
    DeleteBot {
        /// Vendor bot identifier
        bot_id: String,
    },
    /// Show the webhook call log
    Logs {
        /// Keep polling and print new entries as they arrive
        #[arg(long)]
        follow: bool,
    },
    /// Empty the webhook call log
    ClearLogs,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let http = reqwest::Client::new();
    let server = cli.server.trim_end_matches('/').to_string();

    match cli.command {
        Some(Commands::Health) => {
            let body: Value = http
                .get(format!("{server}/health"))
                .send()
                .await?
                .json()
                .await?;
            if body["ok"] == true {
                println!("relay at {server} is alive");
            } else {
                eprintln!("unexpected health response: {body}");
            }
        }
        Some(Commands::ListBots) => {
            let response = http.get(format!("{server}/api/bots")).send().await?;
            let body: Value = check(response).await?;
            print_bots(&body);
        }
        Some(Commands::CreateBot { name, prompt, voice }) => {
            let response = http
                .post(format!("{server}/api/bots"))
                .json(&serde_json::json!({ "name": name, "prompt": prompt, "voice": voice }))
                .send()
                .await?;
            let body: Value = check(response).await?;
            println!("created bot:");
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        Some(Commands::RenameBot { bot_id, name }) => {
            let response = http
                .put(format!("{server}/api/bots/{bot_id}"))
                .json(&serde_json::json!({ "name": name }))
                .send()
                .await?;
            check(response).await?;
            println!("renamed bot {bot_id} to {name}");
        }
        Some(Commands::DeleteBot { bot_id }) => {
            let response = http
                .delete(format!("{server}/api/bots/{bot_id}"))
                .send()
                .await?;
            check(response).await?;
            println!("deleted bot {bot_id}");
        }
        Some(Commands::Logs { follow }) => {
            let mut seen = 0usize;
            loop {
                let body: LogsRes = http
                    .get(format!("{server}/api/logs"))
                    .send()
                    .await?
                    .json()
                    .await?;
                if body.logs.is_empty() && seen == 0 && !follow {
                    println!("No log entries.");
                }
                for entry in body.logs.iter().skip(seen) {
                    print_log_entry(entry);
                }
                seen = body.logs.len();
                if !follow {
                    break;
                }
                tokio::time::sleep(FOLLOW_INTERVAL).await;
            }
        }
        Some(Commands::ClearLogs) => {
            let response = http
                .post(format!("{server}/api/logs/clear"))
                .send()
                .await?;
            let body: Value = check(response).await?;
            println!(
                "{}",
                body["message"].as_str().unwrap_or("Logs cleared")
            );
        }
        None => {
            println!("Use 'relay --help' for commands");
        }
    }

    Ok(())
}

/// Surfaces non-2xx responses as errors carrying the server's body.
async fn check(response: reqwest::Response) -> Result<Value, Box<dyn std::error::Error>> {
    let status = response.status();
    let body: Value = response.json().await.unwrap_or(Value::Null);
    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("server returned {status}: {body}").into())
    }
}

fn print_bots(body: &Value) {
    // The vendor wraps the list differently across API versions; accept a
    // bare array or a {bots: [...]} object.
    let bots = body
        .as_array()
        .or_else(|| body["bots"].as_array())
        .cloned()
        .unwrap_or_default();
    if bots.is_empty() {
        println!("No bots found.");
        return;
    }
    for bot in bots {
        println!(
            "ID: {}, Name: {}, Voice: {}",
            field(&bot, &["uid", "id", "bot_id"]),
            field(&bot, &["name"]),
            field(&bot, &["voice"]),
        );
    }
}

fn field<'a>(bot: &'a Value, keys: &[&str]) -> &'a str {
    keys.iter()
        .find_map(|k| bot[k].as_str())
        .unwrap_or("-")
}

fn print_log_entry(entry: &LogEntry) {
    let kind = serde_json::to_value(entry.kind)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default();
    match &entry.name {
        Some(name) => println!("[{}] {} {} ({})", entry.at, kind, name, entry.request_id),
        None => println!("[{}] {} ({})", entry.at, kind, entry.request_id),
    }
    if let Some(call_id) = &entry.call_id {
        println!("    callId: {call_id}");
    }
    if let Some(summary) = &entry.summary {
        println!("    summary: {summary}");
    }
}
