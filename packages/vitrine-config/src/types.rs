use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub providers: Providers,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub ranking: Ranking,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub llm_extractor: LlmProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	/// Empty means the extractor is disabled and every query takes the
	/// deterministic fallback parser.
	#[serde(default)]
	pub api_key: String,
	pub path: String,
	pub model: String,
	#[serde(default)]
	pub temperature: f32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Search {
	/// Minimum similarity ratio a fuzzy category match must clear.
	pub fuzzy_cutoff: f64,
}
impl Default for Search {
	fn default() -> Self {
		Self { fuzzy_cutoff: 0.6 }
	}
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Ranking {
	pub name_weight: f64,
	pub brand_weight: f64,
	pub description_weight: f64,
	pub use_case_weight: f64,
	pub category_weight: f64,
	/// Scale on the below-ceiling price bonus; the over-ceiling penalty is
	/// always full strength.
	pub price_nudge: f64,
}
impl Default for Ranking {
	fn default() -> Self {
		Self {
			name_weight: 3.0,
			brand_weight: 2.0,
			description_weight: 1.0,
			use_case_weight: 1.0,
			category_weight: 1.0,
			price_nudge: 0.5,
		}
	}
}
