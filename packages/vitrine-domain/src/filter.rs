use std::collections::HashSet;

use uuid::Uuid;

use crate::catalogue::Product;

/// Terms that match nearly every listing and carry no discriminative power.
const GENERIC_KEYWORDS: [&str; 7] =
	["product", "products", "item", "items", "thing", "things", "stuff"];

/// OR-combined keyword predicate over the searchable product fields.
///
/// Absence of a filter (`build` returning `None`) means "don't filter by
/// keyword" and is distinct from a predicate that matches nothing.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
	keywords: Vec<String>,
}
impl KeywordFilter {
	pub fn build(keywords: &[String]) -> Option<Self> {
		let kept = meaningful_keywords(keywords)
			.into_iter()
			.map(|kw| kw.to_lowercase())
			.collect::<Vec<_>>();

		if kept.is_empty() { None } else { Some(Self { keywords: kept }) }
	}

	pub fn keywords(&self) -> &[String] {
		&self.keywords
	}

	pub fn matches(&self, product: &Product) -> bool {
		self.keywords.iter().any(|kw| {
			contains_ci(&product.name, kw)
				|| contains_ci(&product.base_description, kw)
				|| contains_ci(&product.brand, kw)
				|| contains_ci(&product.use_case, kw)
				|| contains_ci(&product.category, kw)
		})
	}
}

/// Keywords that survive the generic-term strip, in input order.
pub fn meaningful_keywords(keywords: &[String]) -> Vec<String> {
	keywords
		.iter()
		.filter(|kw| !GENERIC_KEYWORDS.contains(&kw.to_lowercase().as_str()))
		.cloned()
		.collect()
}

/// Keywords dropped by the generic-term strip, reported back to the caller.
pub fn ignored_keywords(keywords: &[String], meaningful: &[String]) -> Vec<String> {
	let kept = meaningful.iter().map(|kw| kw.to_lowercase()).collect::<HashSet<_>>();

	keywords.iter().filter(|kw| !kept.contains(&kw.to_lowercase())).cloned().collect()
}

pub fn category_matches(product: &Product, category: &str) -> bool {
	contains_ci(&product.category, &category.to_lowercase())
}

pub fn within_price(product: &Product, ceiling: f64) -> bool {
	product.price <= ceiling
}

/// Final-stage predicate: the whole original query as a substring against
/// every searchable field, material included.
pub fn full_text_matches(product: &Product, query: &str) -> bool {
	let needle = query.to_lowercase();

	contains_ci(&product.name, &needle)
		|| contains_ci(&product.base_description, &needle)
		|| contains_ci(&product.brand, &needle)
		|| contains_ci(&product.material, &needle)
		|| contains_ci(&product.use_case, &needle)
		|| contains_ci(&product.category, &needle)
}

/// Drops repeated product ids, keeping first occurrences in order.
pub fn dedup_by_id(products: Vec<Product>) -> Vec<Product> {
	let mut seen: HashSet<Uuid> = HashSet::new();

	products.into_iter().filter(|product| seen.insert(product.product_id)).collect()
}

// `needle` must already be lower-cased.
fn contains_ci(haystack: &str, needle: &str) -> bool {
	haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn product(name: &str, brand: &str, category: &str) -> Product {
		Product {
			product_id: Uuid::new_v4(),
			name: name.to_string(),
			category: category.to_string(),
			price: 49.0,
			brand: brand.to_string(),
			base_description: String::new(),
			use_case: String::new(),
			material: String::new(),
			care_instructions: String::new(),
			is_active: true,
			stock: 10,
		}
	}

	#[test]
	fn generic_only_keywords_build_no_filter() {
		let keywords = vec!["products".to_string(), "STUFF".to_string()];

		assert!(KeywordFilter::build(&keywords).is_none());
	}

	#[test]
	fn filter_matches_any_field() {
		let filter = KeywordFilter::build(&["voltmax".to_string()]).expect("filter expected");
		let hit = product("20000mAh Power Bank", "VoltMax", "Electronics & Accessories");
		let miss = product("Yoga Mat", "FlexFlow", "Fitness & Wellness");

		assert!(filter.matches(&hit));
		assert!(!filter.matches(&miss));
	}

	#[test]
	fn ignored_keywords_reports_the_stripped_terms() {
		let keywords = vec!["durable".to_string(), "item".to_string()];
		let meaningful = meaningful_keywords(&keywords);

		assert_eq!(meaningful, vec!["durable".to_string()]);
		assert_eq!(ignored_keywords(&keywords, &meaningful), vec!["item".to_string()]);
	}

	#[test]
	fn dedup_keeps_first_occurrence() {
		let first = product("Webcam", "ClearView", "Electronics & Accessories");
		let duplicate = first.clone();
		let second = product("Desk Lamp", "BrightLite", "Home & Living");
		let deduped = dedup_by_id(vec![first.clone(), second, duplicate]);

		assert_eq!(deduped.len(), 2);
		assert_eq!(deduped[0].product_id, first.product_id);
	}
}
