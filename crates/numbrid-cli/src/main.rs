//! numbrid CLI — Estonian numeral server.
//!
//! ```text
//! PORT=5000 numbrid serve [--host 0.0.0.0] [--static-dir static]
//! numbrid next [--server http://localhost:5000]
//! numbrid say 42
//! ```

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use numbrid_lib::numbrid_core::numerals::MAX_NUMBER;
use numbrid_lib::numbrid_core::types::{
    DEFAULT_TTS_URL, NumeralForms, ServerConfig, SpeechConfig,
};

/// numbrid — random Estonian numerals with spoken clips
#[derive(Parser)]
#[command(name = "numbrid", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the numbrid server
    Serve {
        /// Listen port
        #[arg(long, env = "PORT")]
        port: u16,
        /// Listen host
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: String,
        /// Static asset root; clips are cached under <static-dir>/media
        #[arg(long, env = "STATIC_DIR", default_value = "static")]
        static_dir: PathBuf,
        /// Text-to-speech endpoint
        #[arg(long, env = "TTS_URL", default_value = DEFAULT_TTS_URL)]
        tts_url: String,
        /// Language code sent to the TTS endpoint
        #[arg(long, env = "TTS_LANG", default_value = "et")]
        tts_lang: String,
        /// Per-request TTS timeout in seconds
        #[arg(long, default_value = "10")]
        tts_timeout_secs: u64,
        /// Extra attempts after a failed TTS fetch
        #[arg(long, default_value = "2")]
        tts_retries: u32,
        /// Also cache the ordinal genitive clip
        #[arg(long)]
        cache_genitive: bool,
    },
    /// Fetch a random number from a running server
    Next {
        /// Server URL
        #[arg(long, default_value = "http://localhost:8080")]
        server: String,
    },
    /// Print the word forms of a number without a server
    Say {
        /// Number from 0 to 99
        n: u32,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "numbrid_lib=info,numbrid_cli=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Serve {
            port,
            host,
            static_dir,
            tts_url,
            tts_lang,
            tts_timeout_secs,
            tts_retries,
            cache_genitive,
        } => {
            let config = ServerConfig {
                host,
                port,
                static_dir,
                speech: SpeechConfig {
                    tts_url,
                    language: tts_lang,
                    timeout: Duration::from_secs(tts_timeout_secs),
                    retries: tts_retries,
                    cache_genitive,
                    ..Default::default()
                },
            };

            if let Err(e) = numbrid_lib::server::serve(config).await {
                tracing::error!("{e}");
                std::process::exit(1);
            }
        }

        Command::Next { server } => match fetch_next(&server).await {
            Ok(forms) => print_forms(&forms),
            Err(e) => {
                eprintln!("request failed: {e}");
                std::process::exit(1);
            }
        },

        Command::Say { n } => {
            if n > MAX_NUMBER {
                tracing::warn!("{n} is out of range, words only go up to {MAX_NUMBER}");
            }
            print_forms(&NumeralForms::new(n));
        }
    }
}

/// `GET /next` on a running server. Non-2xx statuses and bodies that are not
/// numeral forms are errors.
async fn fetch_next(server: &str) -> Result<NumeralForms, reqwest::Error> {
    reqwest::get(format!("{server}/next"))
        .await?
        .error_for_status()?
        .json::<NumeralForms>()
        .await
}

fn print_forms(forms: &NumeralForms) {
    match serde_json::to_string_pretty(forms) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("failed to encode forms: {e}");
            std::process::exit(1);
        }
    }
}
