use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use vitrine_config::LlmProviderConfig;

use crate::{Error, Result};

/// One bounded-timeout call to an OpenAI-compatible chat-completions
/// endpoint, returning the assistant text verbatim. No retries: the query
/// parser treats any failure here as "extractor unavailable" and falls back
/// to the deterministic parser.
pub async fn complete(cfg: &LlmProviderConfig, prompt: &str) -> Result<String> {
	if cfg.api_key.trim().is_empty() {
		return Err(Error::InvalidConfig {
			message: "Completion provider api_key is empty.".to_string(),
		});
	}

	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"temperature": cfg.temperature,
		"messages": [{ "role": "user", "content": prompt }],
	});
	let res = client
		.post(&url)
		.headers(crate::auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_completion_text(json)
}

fn parse_completion_text(json: Value) -> Result<String> {
	let content = json
		.get("choices")
		.and_then(|v| v.as_array())
		.and_then(|arr| arr.first())
		.and_then(|choice| choice.get("message"))
		.and_then(|msg| msg.get("content"))
		.and_then(|c| c.as_str())
		.ok_or_else(|| Error::InvalidResponse {
			message: "Completion response is missing message content.".to_string(),
		})?;
	let trimmed = content.trim();

	if trimmed.is_empty() {
		return Err(Error::InvalidResponse {
			message: "Completion response content is empty.".to_string(),
		});
	}

	Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_choice_content() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": " {\"keywords\": []} " } }
			]
		});
		let content = parse_completion_text(json).expect("parse failed");

		assert_eq!(content, "{\"keywords\": []}");
	}

	#[test]
	fn missing_content_is_an_invalid_response() {
		let json = serde_json::json!({ "choices": [] });

		assert!(matches!(
			parse_completion_text(json),
			Err(Error::InvalidResponse { .. })
		));
	}

	#[test]
	fn blank_content_is_an_invalid_response() {
		let json = serde_json::json!({
			"choices": [
				{ "message": { "content": "   " } }
			]
		});

		assert!(matches!(
			parse_completion_text(json),
			Err(Error::InvalidResponse { .. })
		));
	}
}
