use crate::query;

/// Resolves a parsed category string to a live catalogue category name.
///
/// Case-insensitive containment wins first (first hit in catalogue order),
/// then the closest fuzzy match above `cutoff`. Returns `None` when nothing
/// clears the bar; the caller is expected to fold the unmapped phrase back
/// into the keywords rather than drop it.
pub fn map_category(parsed: Option<&str>, names: &[String], cutoff: f64) -> Option<String> {
	let needle = parsed?.trim().to_lowercase();

	if needle.is_empty() {
		return None;
	}

	if let Some(name) = names.iter().find(|name| name.to_lowercase().contains(&needle)) {
		return Some(name.clone());
	}

	let mut best: Option<(f64, &String)> = None;

	for name in names {
		let score = strsim::normalized_levenshtein(&needle, &name.to_lowercase());

		if score < cutoff {
			continue;
		}
		if best.map(|(top, _)| score > top).unwrap_or(true) {
			best = Some((score, name));
		}
	}

	best.map(|(_, name)| name.clone())
}

/// Query-rewrite policy for a parsed category that could not be mapped: keep
/// it as keyword(s) so a spurious AI-guessed category narrows the search
/// instead of silently widening it.
///
/// Multi-word phrases are prepended whole and never split into tokens;
/// single-word categories are appended both whole and as their own token,
/// skipping duplicates.
pub fn fold_unmapped_category(category: &str, keywords: &mut Vec<String>) {
	let phrase = category.to_lowercase();

	if phrase.trim().is_empty() {
		return;
	}

	if !keywords.iter().any(|kw| kw.to_lowercase() == phrase) {
		if phrase.contains(' ') {
			keywords.insert(0, phrase.clone());
		} else {
			keywords.push(phrase.clone());
		}
	}

	if !phrase.contains(' ') {
		for token in query::tokenize(&phrase) {
			if !keywords.contains(&token) {
				keywords.push(token);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names() -> Vec<String> {
		vec![
			"Electronics & Accessories".to_string(),
			"Home & Living".to_string(),
			"Beauty & Personal Care".to_string(),
			"Fitness & Wellness".to_string(),
		]
	}

	#[test]
	fn maps_by_containment_first() {
		let mapped = map_category(Some("electronics"), &names(), 0.6);

		assert_eq!(mapped, Some("Electronics & Accessories".to_string()));
	}

	#[test]
	fn maps_close_misspelling_by_fuzzy_ratio() {
		let mapped = map_category(Some("home & livng"), &names(), 0.6);

		assert_eq!(mapped, Some("Home & Living".to_string()));
	}

	#[test]
	fn rejects_below_cutoff() {
		assert_eq!(map_category(Some("groceries"), &names(), 0.6), None);
	}

	#[test]
	fn empty_and_missing_categories_map_to_none() {
		assert_eq!(map_category(None, &names(), 0.6), None);
		assert_eq!(map_category(Some("   "), &names(), 0.6), None);
	}

	#[test]
	fn multi_word_unmapped_category_is_prepended_whole() {
		let mut keywords = vec!["plug".to_string()];

		fold_unmapped_category("Kitchen Appliances", &mut keywords);

		assert_eq!(keywords, vec!["kitchen appliances".to_string(), "plug".to_string()]);
	}

	#[test]
	fn single_word_unmapped_category_is_appended_with_its_token() {
		let mut keywords = vec!["spf50".to_string()];

		fold_unmapped_category("Skincare", &mut keywords);

		assert_eq!(keywords, vec!["spf50".to_string(), "skincare".to_string()]);
	}

	#[test]
	fn duplicate_category_keyword_is_not_added_twice() {
		let mut keywords = vec!["skincare".to_string()];

		fold_unmapped_category("Skincare", &mut keywords);

		assert_eq!(keywords, vec!["skincare".to_string()]);
	}
}
