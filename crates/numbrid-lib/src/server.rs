//! HTTP API for numbrid.
//!
//! `GET /next` returns a random number's word forms and makes sure their
//! clips are cached. Every other path is served from the static directory,
//! which is where the clips end up (`/media/<word>.mp3`).

use std::path::Path;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use numbrid_core::random::random_number;
use numbrid_core::types::{NumeralForms, ServerConfig};

use crate::audio_cache::AudioCache;
use crate::error::ServeError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub cache: AudioCache,
    pub cache_genitive: bool,
}

/// Build the axum router. Paths other than `/next` fall through to `static_dir`.
pub fn router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/next", get(next))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Create the directory layout, bind and serve until the listener fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServeError> {
    let cache = AudioCache::new(config.media_dir(), config.speech.clone())?;
    cache.ensure_dirs().await?;

    let app = router(
        AppState {
            cache,
            cache_genitive: config.speech.cache_genitive,
        },
        &config.static_dir,
    );

    let addr = config.addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ServeError::Bind {
            addr: addr.clone(),
            source,
        })?;

    info!(static_dir = %config.static_dir.display(), "numbrid listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn next(State(state): State<AppState>) -> Json<NumeralForms> {
    let n = random_number(&mut rand::rng());
    let forms = NumeralForms::new(n);
    cache_clips(&state, &forms).await;
    Json(forms)
}

/// A clip that fails to cache is logged; the response goes out regardless.
async fn cache_clips(state: &AppState, forms: &NumeralForms) {
    let words = forms.spoken_words(state.cache_genitive);
    let results = state.cache.ensure_all(&words).await;

    for (word, result) in words.iter().zip(results) {
        if let Err(e) = result {
            warn!(n = forms.n, word = %word, error = %e, "clip not cached");
        }
    }
}
