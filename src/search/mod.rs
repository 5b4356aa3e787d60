// file: src/search/mod.rs
// description: web evidence search abstractions and delay policy
// reference: internal module structure

pub mod duckduckgo;

pub use duckduckgo::DuckDuckGoClient;

use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// The delay window applied before every search call, in seconds.
/// Blunt politeness against 429 blocks from the provider.
const MIN_DELAY_SECS: f64 = 1.5;
const MAX_DELAY_SECS: f64 = 3.0;

/// A single usable hit from the search provider.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub url: String,
    pub snippet: String,
}

/// External search capability. Implementations return `None` for empty
/// results and for every error; a search never fails a request.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Option<SearchHit>;
}

/// Pause applied before outbound search calls. Injected so tests can run
/// with a zero delay while production keeps the randomized pause.
#[async_trait]
pub trait DelayPolicy: Send + Sync {
    async fn wait(&self);
}

/// Sleeps a uniform random duration in [1.5, 3.0] seconds. The sleep is
/// async and scoped to the request awaiting it; other handlers keep running.
pub struct RandomDelay;

#[async_trait]
impl DelayPolicy for RandomDelay {
    async fn wait(&self) {
        let secs = rand::thread_rng().gen_range(MIN_DELAY_SECS..=MAX_DELAY_SECS);
        tokio::time::sleep(Duration::from_secs_f64(secs)).await;
    }
}

/// No pause at all; test use only.
pub struct NoDelay;

#[async_trait]
impl DelayPolicy for NoDelay {
    async fn wait(&self) {}
}
