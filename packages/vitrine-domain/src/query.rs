use regex::Regex;
use serde::{Deserialize, Serialize};

/// Tokens that carry no search intent of their own.
const STOP_WORDS: [&str; 19] = [
	"i", "need", "a", "an", "for", "with", "and", "or", "the", "to", "under", "less", "than",
	"below", "price", "budget", "get", "recommend", "looking",
];

/// Multi-word product phrases matched greedily against token windows so that
/// e.g. "power bank" stays one keyword instead of "power" leaking onto
/// unrelated brands.
const KNOWN_PHRASES: [&str; 10] = [
	"power bank",
	"hair dryer",
	"air fryer",
	"webcam",
	"vacuum",
	"sunscreen",
	"vitamin c",
	"water bottle",
	"resistance band",
	"protein shaker",
];

const PRICE_CEILING_PATTERN: &str = r"(?:under|less than|below)\s*\$?\s*(\d[\d,\.]*)";

/// Structured interpretation of a free-text query. Produced fresh per search
/// call and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedQuery {
	pub category: Option<String>,
	pub max_price: Option<f64>,
	pub keywords: Vec<String>,
}

/// Deterministic heuristic parser. Runs whenever the AI-backed extractor is
/// unavailable or returns a malformed result; never produces a category.
pub fn parse_fallback(query: &str) -> ParsedQuery {
	let lowered = query.to_lowercase();
	let max_price = parse_price_ceiling(&lowered);
	let tokens = tokenize(&lowered)
		.into_iter()
		.filter(|token| !STOP_WORDS.contains(&token.as_str()))
		.filter(|token| !token.chars().all(|ch| ch.is_ascii_digit()))
		.collect::<Vec<_>>();
	let keywords = collapse_known_phrases(&tokens);

	ParsedQuery { category: None, max_price, keywords }
}

/// Extracts a price ceiling from an "under $N" / "less than $N" / "below $N"
/// clause. Commas are allowed in the number.
pub fn parse_price_ceiling(query: &str) -> Option<f64> {
	let re = Regex::new(PRICE_CEILING_PATTERN).ok()?;
	let lowered = query.to_lowercase();
	let caps = re.captures(&lowered)?;
	let raw = caps.get(1)?.as_str().replace(',', "");

	raw.parse::<f64>().ok().filter(|price| price.is_finite() && *price >= 0.0)
}

/// Lower-cased alphanumeric tokens in input order.
pub fn tokenize(text: &str) -> Vec<String> {
	let mut out = Vec::new();
	let mut current = String::new();

	for ch in text.chars() {
		if ch.is_ascii_alphanumeric() {
			current.push(ch.to_ascii_lowercase());
		} else if !current.is_empty() {
			out.push(std::mem::take(&mut current));
		}
	}

	if !current.is_empty() {
		out.push(current);
	}

	out
}

// Greedy 3-gram-then-2-gram window match; matched tokens are consumed as one
// phrase keyword, the rest stay individual keywords in original order.
fn collapse_known_phrases(tokens: &[String]) -> Vec<String> {
	let mut keywords = Vec::new();
	let mut i = 0;

	while i < tokens.len() {
		let mut matched = false;

		for n in [3, 2] {
			if i + n > tokens.len() {
				continue;
			}

			let phrase = tokens[i..i + n].join(" ");

			if KNOWN_PHRASES.contains(&phrase.as_str()) {
				keywords.push(phrase);

				i += n;
				matched = true;

				break;
			}
		}

		if !matched {
			keywords.push(tokens[i].clone());

			i += 1;
		}
	}

	keywords
}
