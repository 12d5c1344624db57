use std::cmp::Ordering;

use vitrine_config::Ranking;

use crate::catalogue::Product;

/// Weighted keyword-density score with a small price-proximity nudge.
///
/// Hits are case-insensitive substring occurrence counts per keyword, summed
/// across keywords. The price term is deliberately small next to the field
/// weights so keyword relevance dominates and price only breaks near-ties.
pub fn score(product: &Product, keywords: &[String], max_price: Option<f64>, cfg: &Ranking) -> f64 {
	let name = product.name.to_lowercase();
	let description = product.base_description.to_lowercase();
	let brand = product.brand.to_lowercase();
	let use_case = product.use_case.to_lowercase();
	let category = product.category.to_lowercase();
	let mut total = 0.0;

	for keyword in keywords {
		let keyword = keyword.to_lowercase();

		if keyword.is_empty() {
			continue;
		}

		total += occurrences(&name, &keyword) * cfg.name_weight;
		total += occurrences(&brand, &keyword) * cfg.brand_weight;
		total += occurrences(&description, &keyword) * cfg.description_weight;
		total += occurrences(&use_case, &keyword) * cfg.use_case_weight;
		total += occurrences(&category, &keyword) * cfg.category_weight;
	}

	if let Some(ceiling) = max_price
		&& ceiling > 0.0
	{
		if product.price > ceiling {
			total -= (product.price - ceiling) / (ceiling + 1.0);
		} else {
			total += (ceiling - product.price) / (ceiling + 1.0) * cfg.price_nudge;
		}
	}

	total
}

/// Sorts candidates by descending score. The sort is stable, so exact ties
/// keep their input order and re-ranking the same set is reproducible.
pub fn rank(
	products: Vec<Product>,
	keywords: &[String],
	max_price: Option<f64>,
	cfg: &Ranking,
) -> Vec<Product> {
	let mut scored = products
		.into_iter()
		.map(|product| (score(&product, keywords, max_price, cfg), product))
		.collect::<Vec<_>>();

	scored.sort_by(|(a, _), (b, _)| b.partial_cmp(a).unwrap_or(Ordering::Equal));

	scored.into_iter().map(|(_, product)| product).collect()
}

fn occurrences(haystack: &str, needle: &str) -> f64 {
	haystack.matches(needle).count() as f64
}
