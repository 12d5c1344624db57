pub mod parse;
pub mod search;

mod error;

pub use error::{Error, Result};
pub use search::{AppliedFilters, ParsedMeta, SearchOutcome};

use std::{future::Future, pin::Pin, sync::Arc};

use vitrine_catalogue::CatalogueStore;
use vitrine_config::{Config, LlmProviderConfig};
use vitrine_providers::completion;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Generative-text collaborator consumed by the query parser. Any error is
/// treated as "extractor unavailable", never surfaced past the parser.
pub trait CompletionProvider
where
	Self: Send + Sync,
{
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, vitrine_providers::Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub completion: Arc<dyn CompletionProvider>,
}
impl Providers {
	pub fn new(completion: Arc<dyn CompletionProvider>) -> Self {
		Self { completion }
	}
}
impl Default for Providers {
	fn default() -> Self {
		Self { completion: Arc::new(DefaultProviders) }
	}
}

struct DefaultProviders;
impl CompletionProvider for DefaultProviders {
	fn complete<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		prompt: &'a str,
	) -> BoxFuture<'a, vitrine_providers::Result<String>> {
		Box::pin(completion::complete(cfg, prompt))
	}
}

/// The search facade. Request-scoped and stateless across calls: every
/// search takes a fresh catalogue snapshot and recomputes.
pub struct SearchService {
	pub cfg: Config,
	pub catalogue: Arc<dyn CatalogueStore>,
	pub providers: Providers,
}
impl SearchService {
	pub fn new(cfg: Config, catalogue: Arc<dyn CatalogueStore>) -> Self {
		Self { cfg, catalogue, providers: Providers::default() }
	}

	pub fn with_providers(
		cfg: Config,
		catalogue: Arc<dyn CatalogueStore>,
		providers: Providers,
	) -> Self {
		Self { cfg, catalogue, providers }
	}
}
