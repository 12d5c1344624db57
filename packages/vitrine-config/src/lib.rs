mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, LlmProviderConfig, Providers, Ranking, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	let llm = &cfg.providers.llm_extractor;

	if llm.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.llm_extractor.api_base must be non-empty.".to_string(),
		});
	}
	if llm.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.llm_extractor.model must be non-empty.".to_string(),
		});
	}
	if llm.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.llm_extractor.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if !llm.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.llm_extractor.temperature must be a finite number.".to_string(),
		});
	}
	if llm.temperature < 0.0 {
		return Err(Error::Validation {
			message: "providers.llm_extractor.temperature must be zero or greater.".to_string(),
		});
	}

	if !cfg.search.fuzzy_cutoff.is_finite() {
		return Err(Error::Validation {
			message: "search.fuzzy_cutoff must be a finite number.".to_string(),
		});
	}
	if !(0.0..=1.0).contains(&cfg.search.fuzzy_cutoff) {
		return Err(Error::Validation {
			message: "search.fuzzy_cutoff must be in the range 0.0-1.0.".to_string(),
		});
	}

	for (label, weight) in [
		("ranking.name_weight", cfg.ranking.name_weight),
		("ranking.brand_weight", cfg.ranking.brand_weight),
		("ranking.description_weight", cfg.ranking.description_weight),
		("ranking.use_case_weight", cfg.ranking.use_case_weight),
		("ranking.category_weight", cfg.ranking.category_weight),
		("ranking.price_nudge", cfg.ranking.price_nudge),
	] {
		if !weight.is_finite() {
			return Err(Error::Validation {
				message: format!("{label} must be a finite number."),
			});
		}
		if weight < 0.0 {
			return Err(Error::Validation { message: format!("{label} must be zero or greater.") });
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let llm = &mut cfg.providers.llm_extractor;

	if llm.api_key.trim().is_empty() {
		llm.api_key = String::new();
	}
	if !llm.path.starts_with('/') && !llm.path.is_empty() {
		llm.path = format!("/{}", llm.path);
	}
}
