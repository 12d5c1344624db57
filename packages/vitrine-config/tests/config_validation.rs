use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use vitrine_config::Config;

const SAMPLE_TOML: &str = r#"
[service]
log_level = "info"

[providers.llm_extractor]
provider_id = "openai"
api_base = "https://api.openai.com"
api_key = ""
path = "/v1/chat/completions"
model = "gpt-4o-mini"
temperature = 0.0
timeout_ms = 8000
default_headers = {}

[search]
fuzzy_cutoff = 0.6

[ranking]
name_weight = 3.0
brand_weight = 2.0
description_weight = 1.0
use_case_weight = 1.0
category_weight = 1.0
price_nudge = 0.5
"#;

fn write_temp_config(payload: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("vitrine_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(SAMPLE_TOML).expect("Failed to parse test config.")
}

#[test]
fn sample_config_loads() {
	let path = write_temp_config(SAMPLE_TOML);
	let cfg = vitrine_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = cfg.expect("Expected sample config to load.");

	assert_eq!(cfg.search.fuzzy_cutoff, 0.6);
	assert_eq!(cfg.ranking.name_weight, 3.0);
}

#[test]
fn empty_api_key_is_allowed() {
	let cfg = base_config();

	assert!(vitrine_config::validate(&cfg).is_ok());
	assert!(cfg.providers.llm_extractor.api_key.is_empty());
}

#[test]
fn search_and_ranking_sections_are_optional() {
	let payload = r#"
[service]
log_level = "info"

[providers.llm_extractor]
provider_id = "openai"
api_base = "https://api.openai.com"
path = "/v1/chat/completions"
model = "gpt-4o-mini"
timeout_ms = 8000
"#;
	let cfg: Config = toml::from_str(payload).expect("Failed to parse minimal config.");

	assert!(vitrine_config::validate(&cfg).is_ok());
	assert_eq!(cfg.search.fuzzy_cutoff, 0.6);
	assert_eq!(cfg.ranking.brand_weight, 2.0);
	assert_eq!(cfg.ranking.price_nudge, 0.5);
}

#[test]
fn fuzzy_cutoff_must_be_in_range() {
	let mut cfg = base_config();

	cfg.search.fuzzy_cutoff = 1.5;

	let err = vitrine_config::validate(&cfg).expect_err("Expected fuzzy_cutoff validation error.");

	assert!(
		err.to_string().contains("search.fuzzy_cutoff must be in the range 0.0-1.0."),
		"Unexpected error: {err}"
	);
}

#[test]
fn timeout_must_be_positive() {
	let payload = SAMPLE_TOML.replace("timeout_ms = 8000", "timeout_ms = 0");
	let path = write_temp_config(&payload);
	let result = vitrine_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected timeout validation error.");

	assert!(
		err.to_string().contains("providers.llm_extractor.timeout_ms must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn ranking_weights_must_be_non_negative() {
	let mut cfg = base_config();

	cfg.ranking.brand_weight = -1.0;

	let err = vitrine_config::validate(&cfg).expect_err("Expected ranking weight validation error.");

	assert!(
		err.to_string().contains("ranking.brand_weight must be zero or greater."),
		"Unexpected error: {err}"
	);
}

#[test]
fn temperature_must_be_finite() {
	let mut cfg = base_config();

	cfg.providers.llm_extractor.temperature = f32::NAN;

	let err = vitrine_config::validate(&cfg).expect_err("Expected temperature validation error.");

	assert!(
		err.to_string().contains("providers.llm_extractor.temperature must be a finite number."),
		"Unexpected error: {err}"
	);
}

#[test]
fn provider_path_is_normalized_to_leading_slash() {
	let payload = SAMPLE_TOML.replace("path = \"/v1/chat/completions\"", "path = \"v1/chat/completions\"");
	let path = write_temp_config(&payload);
	let cfg = vitrine_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = cfg.expect("Expected config to load.");

	assert_eq!(cfg.providers.llm_extractor.path, "/v1/chat/completions");
}

#[test]
fn vitrine_example_toml_is_valid() {
	let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

	path.push("../../vitrine.example.toml");

	vitrine_config::load(&path).expect("Expected vitrine.example.toml to be a valid config.");
}
