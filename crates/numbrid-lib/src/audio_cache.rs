//! On-disk cache of spoken word clips.
//!
//! Each word maps to `<media_dir>/<word>.mp3`. A missing clip is fetched from
//! the text-to-speech endpoint, streamed into `<word>.mp3.partial` and renamed
//! into place once complete, so the static file server never sees a torn file.
//!
//! Concurrent requests for the same uncached word share one fetch: the first
//! caller downloads while the others wait on a per-word lock and then find the
//! file on disk.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use futures_util::StreamExt;
use futures_util::future::join_all;
use regex::Regex;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use numbrid_core::types::{CacheOutcome, SpeechConfig};

use crate::error::CacheError;

const USER_AGENT: &str = "Mozilla";
const CLIP_EXTENSION: &str = "mp3";
const PARTIAL_EXTENSION: &str = "mp3.partial";

// Letters separated by single spaces. Keeps file names inside the media dir.
static RE_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{L}+(?: \p{L}+)*$").unwrap());

/// Cloneable handle to the clip cache.
#[derive(Clone)]
pub struct AudioCache {
    inner: Arc<Inner>,
}

struct Inner {
    media_dir: PathBuf,
    config: SpeechConfig,
    client: reqwest::Client,
    in_flight: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl AudioCache {
    /// Build a cache rooted at `media_dir`. Does not touch the filesystem.
    pub fn new(media_dir: impl Into<PathBuf>, config: SpeechConfig) -> Result<Self, CacheError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(CacheError::Client)?;

        Ok(Self {
            inner: Arc::new(Inner {
                media_dir: media_dir.into(),
                config,
                client,
                in_flight: Mutex::new(HashMap::new()),
            }),
        })
    }

    pub fn media_dir(&self) -> &Path {
        &self.inner.media_dir
    }

    /// Create the media directory and its parents.
    pub async fn ensure_dirs(&self) -> Result<(), CacheError> {
        tokio::fs::create_dir_all(&self.inner.media_dir).await?;
        Ok(())
    }

    /// Path of the clip for `word`.
    pub fn path_for(&self, word: &str) -> Result<PathBuf, CacheError> {
        if !RE_WORD.is_match(word) {
            return Err(CacheError::InvalidWord(word.to_string()));
        }
        Ok(self
            .inner
            .media_dir
            .join(format!("{word}.{CLIP_EXTENSION}")))
    }

    /// Make sure the clip for `word` is on disk, fetching it if needed.
    pub async fn ensure(&self, word: &str) -> Result<CacheOutcome, CacheError> {
        let dest = self.path_for(word)?;

        if is_cached(&dest).await {
            debug!(word, "clip cache hit");
            return Ok(CacheOutcome::Hit);
        }

        let lock = self.word_lock(word).await;
        let guard = lock.lock().await;

        // Another caller may have finished the fetch while we waited.
        let result = if is_cached(&dest).await {
            debug!(word, "clip cached by concurrent request");
            Ok(CacheOutcome::Hit)
        } else {
            self.fetch_with_retry(word, &dest)
                .await
                .map(|()| CacheOutcome::Fetched)
        };

        self.release_word_lock(word, &lock).await;
        drop(guard);
        drop(lock);
        result
    }

    /// Ensure several clips concurrently. Results are in input order.
    pub async fn ensure_all(&self, words: &[&str]) -> Vec<Result<CacheOutcome, CacheError>> {
        join_all(words.iter().map(|word| self.ensure(word))).await
    }

    async fn word_lock(&self, word: &str) -> Arc<Mutex<()>> {
        let mut in_flight = self.inner.in_flight.lock().await;
        in_flight.entry(word.to_string()).or_default().clone()
    }

    /// Remove the map entry for `word` once no other caller holds `lock`.
    /// Waiters keep the entry alive, so a caller arriving after a failed
    /// fetch queues behind them instead of fetching alongside.
    async fn release_word_lock(&self, word: &str, lock: &Arc<Mutex<()>>) {
        let mut in_flight = self.inner.in_flight.lock().await;
        // Clones are only handed out under the map lock: one for the map, one for us.
        if Arc::strong_count(lock) == 2
            && in_flight.get(word).is_some_and(|l| Arc::ptr_eq(l, lock))
        {
            in_flight.remove(word);
        }
    }

    async fn fetch_with_retry(&self, word: &str, dest: &Path) -> Result<(), CacheError> {
        let config = &self.inner.config;
        let mut attempt = 0u32;

        loop {
            match self.fetch(word, dest).await {
                Ok(()) => return Ok(()),
                Err(e) if attempt < config.retries && e.is_retryable() => {
                    let delay = config
                        .retry_backoff
                        .saturating_mul(1u32 << attempt.min(16));
                    warn!(word, attempt = attempt + 1, error = %e, "tts fetch failed, retrying in {delay:?}");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch(&self, word: &str, dest: &Path) -> Result<(), CacheError> {
        let config = &self.inner.config;

        debug!(word, url = %config.tts_url, "fetching clip");

        let resp = self
            .inner
            .client
            .get(&config.tts_url)
            .query(&[
                ("ie", "UTF-8"),
                ("total", "1"),
                ("idx", "0"),
                ("textlen", "32"),
                ("client", "tw-ob"),
                ("q", word),
                ("tl", config.language.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(CacheError::Status {
                word: word.to_string(),
                status,
            });
        }

        let partial = dest.with_extension(PARTIAL_EXTENSION);
        let bytes = match write_body(resp, &partial).await {
            Ok(0) => {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(CacheError::EmptyBody(word.to_string()));
            }
            Ok(n) => n,
            Err(e) => {
                let _ = tokio::fs::remove_file(&partial).await;
                return Err(e);
            }
        };

        tokio::fs::rename(&partial, dest).await?;
        info!(word, bytes, "clip cached");
        Ok(())
    }
}

async fn is_cached(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Stream the response body into `path`. Returns the number of bytes written.
async fn write_body(resp: reqwest::Response, path: &Path) -> Result<u64, CacheError> {
    let mut file = tokio::fs::File::create(path).await?;
    let mut bytes_done = 0u64;
    let mut stream = resp.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk?;
        file.write_all(&chunk).await?;
        bytes_done += chunk.len() as u64;
    }

    file.flush().await?;
    Ok(bytes_done)
}
