//! Linguee API 命令行入口
//!
//! Usage:
//!   linguee-api search <query> --src pt --dst en
//!   linguee-api autocomplete <query> --src de --dst en
//!   linguee-api env-docs

use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use linguee_api::env::EnvConfig;
use linguee_api::{
    print_error_message, print_info_message, Client, FollowCorrections, LanguageCode,
    LingueeParser,
};

#[derive(Parser)]
#[command(name = "linguee-api")]
#[command(about = "Look words up on Linguee and print the result as JSON")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a word or phrase
    Search {
        query: String,
        /// Language of the query, e.g. "pt"
        #[arg(long)]
        src: LanguageCode,
        /// Language to translate to, e.g. "en"
        #[arg(long)]
        dst: LanguageCode,
        /// Let Linguee decide which side of the language pair the query is on
        #[arg(long)]
        guess_direction: bool,
        /// always, never or on_empty_translations
        #[arg(long, default_value_t = FollowCorrections::Always)]
        follow_corrections: FollowCorrections,
    },
    /// Suggest words starting with a prefix
    Autocomplete {
        query: String,
        #[arg(long)]
        src: LanguageCode,
        #[arg(long)]
        dst: LanguageCode,
    },
    /// Print the supported environment variables
    EnvDocs,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    if let Commands::EnvDocs = cli.command {
        print_info_message(&linguee_api::env::generate_env_docs());
        return;
    }

    let config = match EnvConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            print_error_message(&error.to_string());
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let client = match build_client(&config) {
        Ok(client) => client,
        Err(message) => {
            print_error_message(&message);
            process::exit(1);
        }
    };

    let outcome = match cli.command {
        Commands::Search {
            query,
            src,
            dst,
            guess_direction,
            follow_corrections,
        } => client
            .process_search(&query, src, dst, guess_direction, follow_corrections)
            .await
            .map(|result| to_json(&result)),
        Commands::Autocomplete { query, src, dst } => client
            .process_autocompletions(&query, src, dst)
            .await
            .map(|result| to_json(&result)),
        Commands::EnvDocs => return,
    };

    match outcome {
        Ok(json) => print_info_message(&json),
        Err(error) => {
            print_error_message(&error.message());
            process::exit(1);
        }
    }
}

fn build_client(config: &EnvConfig) -> Result<Client, String> {
    let fetcher = config.build_fetcher().map_err(|e| e.to_string())?;
    let parser = LingueeParser::new().map_err(|e| e.to_string())?;
    Ok(Client::new(fetcher, Arc::new(parser)).with_max_redirects(config.max_redirects))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("{{\"message\": \"{}\"}}", e))
}
