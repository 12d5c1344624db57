use serde_json::Value;
use tracing::debug;

use vitrine_config::{Config, LlmProviderConfig};
use vitrine_domain::query::{self, ParsedQuery};

use crate::Providers;

/// Outcome of the AI-backed extraction attempt. `Unavailable` covers missing
/// credentials, transport failures, and malformed responses alike; the
/// caller falls back to the deterministic parser and nothing propagates.
#[derive(Debug, Clone, PartialEq)]
pub enum Extraction {
	Parsed(ParsedQuery),
	Unavailable,
}

#[derive(Debug, Clone)]
pub(crate) struct QueryInterpretation {
	pub(crate) parsed: ParsedQuery,
	pub(crate) used_ai: bool,
}

/// Parses a query, AI first with deterministic fallback. Never fails.
pub(crate) async fn interpret(
	cfg: &Config,
	providers: &Providers,
	query: &str,
) -> QueryInterpretation {
	match extract_with_ai(&cfg.providers.llm_extractor, providers, query).await {
		Extraction::Parsed(parsed) => QueryInterpretation { parsed, used_ai: true },
		Extraction::Unavailable => {
			QueryInterpretation { parsed: query::parse_fallback(query), used_ai: false }
		},
	}
}

pub(crate) async fn extract_with_ai(
	cfg: &LlmProviderConfig,
	providers: &Providers,
	query: &str,
) -> Extraction {
	if cfg.api_key.trim().is_empty() {
		return Extraction::Unavailable;
	}

	let prompt = build_extraction_prompt(query);
	let content = match providers.completion.complete(cfg, &prompt).await {
		Ok(content) => content,
		Err(err) => {
			debug!(error = %err, "Extractor call failed; using fallback parser.");

			return Extraction::Unavailable;
		},
	};

	match parse_extraction(&content) {
		Some(parsed) => Extraction::Parsed(parsed),
		None => {
			debug!("Extractor returned no usable JSON; using fallback parser.");

			Extraction::Unavailable
		},
	}
}

pub(crate) fn build_extraction_prompt(query: &str) -> String {
	format!(
		"You are a helper that extracts structured search parameters from a user's \
natural language query for an e-commerce site.\n\
Given a user query, return a JSON object EXACTLY in this format (no extra text):\n\
\n\
{{\n\
  \"category\": \"<category name or empty string>\",\n\
  \"max_price\": <number or null>,\n\
  \"keywords\": [\"kw1\", \"kw2\"]\n\
}}\n\
\n\
User query: \"{query}\"\n\
\n\
Notes:\n\
- If the user specifies a maximum price (e.g., 'under $1500', 'less than 1000'), set max_price to that number.\n\
- Extract a single most-likely category if present, otherwise empty string.\n\
- Put other meaningful search words into keywords array (no punctuation).\n"
	)
}

/// Pulls the first balanced `{...}` block out of the completion text and
/// coerces it into a `ParsedQuery`. Returns `None` on anything malformed so
/// the fallback parser runs instead.
pub(crate) fn parse_extraction(content: &str) -> Option<ParsedQuery> {
	let block = first_json_block(content)?;
	let value: Value = serde_json::from_str(block).ok()?;
	let category = value
		.get("category")
		.and_then(|v| v.as_str())
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(String::from);
	let max_price = coerce_price(value.get("max_price"))?;
	let keywords = match value.get("keywords") {
		None | Some(Value::Null) => Vec::new(),
		Some(Value::Array(items)) => items
			.iter()
			.filter_map(|item| item.as_str())
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.map(String::from)
			.collect(),
		Some(_) => return None,
	};

	Some(ParsedQuery { category, max_price, keywords })
}

// Outer Option is the coercion result; inner Option is "no ceiling given".
fn coerce_price(value: Option<&Value>) -> Option<Option<f64>> {
	let price = match value {
		None | Some(Value::Null) => return Some(None),
		Some(Value::String(raw)) if raw.trim().is_empty() => return Some(None),
		Some(Value::String(raw)) => raw.trim().parse::<f64>().ok()?,
		Some(Value::Number(num)) => num.as_f64()?,
		Some(_) => return None,
	};

	if price.is_finite() && price >= 0.0 { Some(Some(price)) } else { None }
}

fn first_json_block(text: &str) -> Option<&str> {
	let start = text.find('{')?;
	let mut depth = 0_usize;
	let mut in_string = false;
	let mut escaped = false;

	for (offset, ch) in text[start..].char_indices() {
		if escaped {
			escaped = false;

			continue;
		}

		match ch {
			'\\' if in_string => escaped = true,
			'"' => in_string = !in_string,
			'{' if !in_string => depth += 1,
			'}' if !in_string => {
				depth -= 1;

				if depth == 0 {
					return Some(&text[start..=start + offset]);
				}
			},
			_ => {},
		}
	}

	None
}
