//! Shared types for the numbrid service.
//!
//! Used by numbrid-lib and numbrid-cli. Keeping them in numbrid-core means
//! consumers can depend on the types without pulling in tokio, reqwest, or axum.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

// ─── Numeral types ─────────────────────────────────────────────────────────

/// The four grammatical forms of a number, as returned by `GET /next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NumeralForms {
    pub n: u32,
    pub quantitive_nominative: String,
    pub ordinal_nominative: String,
    pub ordinal_genitive: String,
    pub ordinal_adessive: String,
}

// ─── Speech types ──────────────────────────────────────────────────────────

/// Default text-to-speech endpoint.
pub const DEFAULT_TTS_URL: &str = "http://translate.google.com/translate_tts";

/// Outbound speech synthesis configuration.
#[derive(Debug, Clone)]
pub struct SpeechConfig {
    pub tts_url: String,
    pub language: String,
    pub timeout: Duration,
    /// Extra attempts after the first failed fetch.
    pub retries: u32,
    /// Delay before the first retry; doubled for each further retry.
    pub retry_backoff: Duration,
    /// Also cache the ordinal genitive clip. Off by default, matching the
    /// three-clip behavior clients already depend on.
    pub cache_genitive: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            tts_url: DEFAULT_TTS_URL.into(),
            language: "et".into(),
            timeout: Duration::from_secs(10),
            retries: 2,
            retry_backoff: Duration::from_millis(250),
            cache_genitive: false,
        }
    }
}

/// Outcome of ensuring a clip is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheOutcome {
    /// The file already existed; no network traffic.
    Hit,
    /// The file was downloaded during this call.
    Fetched,
}

// ─── Server types ──────────────────────────────────────────────────────────

/// Name of the audio subdirectory under the static root.
pub const MEDIA_DIR_NAME: &str = "media";

/// Server configuration, built once at startup and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub speech: SpeechConfig,
}

impl ServerConfig {
    /// Directory holding cached `<word>.mp3` clips.
    pub fn media_dir(&self) -> PathBuf {
        self.static_dir.join(MEDIA_DIR_NAME)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            static_dir: PathBuf::from("static"),
            speech: SpeechConfig::default(),
        }
    }
}
