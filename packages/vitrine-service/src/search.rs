use serde::{Deserialize, Serialize};
use tracing::debug;

use vitrine_domain::{
	catalogue::Product,
	category,
	filter::{self, KeywordFilter},
	ranking,
};

use crate::{Result, SearchService, parse};

/// How the query was interpreted, echoed back for UI transparency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedMeta {
	pub category: Option<String>,
	pub mapped_category: Option<String>,
	pub max_price: Option<f64>,
	pub keywords: Vec<String>,
}

/// Which filter dimensions actually produced the returned set. Flags set by
/// an early stage are cleared again when a later, looser stage wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppliedFilters {
	pub category_used: bool,
	pub max_price_used: bool,
	pub price_relaxed: bool,
	pub used_ai: bool,
	pub keywords_used: bool,
	pub ignored_keywords: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchOutcome {
	pub products: Vec<Product>,
	pub parsed: Option<ParsedMeta>,
	pub applied_filters: AppliedFilters,
}

impl SearchService {
	/// Plain search; drops the interpretation metadata.
	pub async fn search(&self, query: &str) -> Result<Vec<Product>> {
		Ok(self.search_with_metadata(query).await?.products)
	}

	/// Smart search: AI-assisted parsing, strict-to-loose filter relaxation,
	/// weighted relevance ranking. An empty result is a valid terminal
	/// outcome and comes back with its metadata intact.
	///
	/// The query is trimmed before the empty check, so a whitespace-only
	/// query lists the whole active catalogue with no parse metadata.
	pub async fn search_with_metadata(&self, query: &str) -> Result<SearchOutcome> {
		let query = query.trim();
		let base = self.catalogue.fetch_active().await?;

		if query.is_empty() {
			return Ok(SearchOutcome {
				products: filter::dedup_by_id(base),
				parsed: None,
				applied_filters: AppliedFilters::default(),
			});
		}

		let interpretation = parse::interpret(&self.cfg, &self.providers, query).await;
		let original_category = interpretation.parsed.category.clone();
		let max_price = interpretation.parsed.max_price;
		let mut keywords = interpretation.parsed.keywords;

		let category_names = self.catalogue.category_names().await?;
		let mapped_category = category::map_category(
			original_category.as_deref(),
			&category_names,
			self.cfg.search.fuzzy_cutoff,
		);

		// An AI-guessed category that maps to nothing must narrow the search
		// as keyword(s) instead of silently widening it.
		if let Some(unmapped) = original_category.as_deref()
			&& mapped_category.is_none()
		{
			category::fold_unmapped_category(unmapped, &mut keywords);
		}

		debug!(
			%query,
			used_ai = interpretation.used_ai,
			category = ?original_category,
			mapped_category = ?mapped_category,
			max_price = ?max_price,
			keywords = ?keywords,
			"Interpreted search query."
		);

		let meaningful = filter::meaningful_keywords(&keywords);
		let keyword_filter = KeywordFilter::build(&keywords);
		let mut applied = AppliedFilters {
			category_used: false,
			max_price_used: false,
			price_relaxed: false,
			used_ai: interpretation.used_ai,
			keywords_used: keyword_filter.is_some(),
			ignored_keywords: filter::ignored_keywords(&keywords, &meaningful),
		};
		let parsed = ParsedMeta {
			category: original_category,
			mapped_category: mapped_category.clone(),
			max_price,
			keywords: keywords.clone(),
		};

		// Stage 1: every parsed filter at once, storage order, no ranking.
		let strict = filter::dedup_by_id(
			base.iter()
				.filter(|product| {
					mapped_category
						.as_deref()
						.map(|name| filter::category_matches(product, name))
						.unwrap_or(true)
				})
				.filter(|product| {
					max_price.map(|ceiling| filter::within_price(product, ceiling)).unwrap_or(true)
				})
				.filter(|product| {
					keyword_filter.as_ref().map(|kf| kf.matches(product)).unwrap_or(true)
				})
				.cloned()
				.collect(),
		);

		applied.category_used = mapped_category.is_some();
		applied.max_price_used = max_price.is_some();

		debug!(stage = "strict", count = strict.len(), "Cascade stage evaluated.");

		if !strict.is_empty() {
			return Ok(SearchOutcome { products: strict, parsed: Some(parsed), applied_filters: applied });
		}

		// Stage 2: drop the category, keep keywords and the price ceiling.
		if let (Some(ceiling), Some(kf)) = (max_price, keyword_filter.as_ref()) {
			let candidates = filter::dedup_by_id(
				base.iter()
					.filter(|product| filter::within_price(product, ceiling))
					.filter(|product| kf.matches(product))
					.cloned()
					.collect(),
			);

			debug!(stage = "keywords_price", count = candidates.len(), "Cascade stage evaluated.");

			if !candidates.is_empty() {
				applied.category_used = false;

				let products = ranking::rank(candidates, &keywords, max_price, &self.cfg.ranking);

				return Ok(SearchOutcome { products, parsed: Some(parsed), applied_filters: applied });
			}
		}

		// Stage 3: keywords alone. Only reachable when stage 1 actually
		// applied a category filter; a dropped filter is never revisited.
		if applied.category_used && let Some(kf) = keyword_filter.as_ref() {
			let candidates = filter::dedup_by_id(
				base.iter().filter(|product| kf.matches(product)).cloned().collect(),
			);

			debug!(stage = "keywords_only", count = candidates.len(), "Cascade stage evaluated.");

			if !candidates.is_empty() {
				applied.category_used = false;
				applied.max_price_used = false;
				applied.price_relaxed = max_price.is_some();

				let products = ranking::rank(candidates, &keywords, max_price, &self.cfg.ranking);

				return Ok(SearchOutcome { products, parsed: Some(parsed), applied_filters: applied });
			}
		}

		// Stage 4: relax the price ceiling. Keywords take precedence over the
		// mapped category when both exist.
		if max_price.is_some() {
			let candidates: Vec<Product> = if let Some(kf) = keyword_filter.as_ref() {
				base.iter().filter(|product| kf.matches(product)).cloned().collect()
			} else if let Some(name) = mapped_category.as_deref() {
				base.iter().filter(|product| filter::category_matches(product, name)).cloned().collect()
			} else {
				base.clone()
			};
			let candidates = filter::dedup_by_id(candidates);

			debug!(stage = "price_relaxed", count = candidates.len(), "Cascade stage evaluated.");

			if !candidates.is_empty() {
				applied.price_relaxed = true;
				applied.max_price_used = false;

				let products = ranking::rank(candidates, &keywords, max_price, &self.cfg.ranking);

				return Ok(SearchOutcome { products, parsed: Some(parsed), applied_filters: applied });
			}
		}

		// Stage 5: the whole query as one substring probe across all fields.
		// May legitimately come back empty; no results are fabricated.
		let candidates = filter::dedup_by_id(
			base.iter().filter(|product| filter::full_text_matches(product, query)).cloned().collect(),
		);

		debug!(stage = "full_text", count = candidates.len(), "Cascade stage evaluated.");

		applied.category_used = false;
		applied.max_price_used = false;

		let products = if keywords.is_empty() {
			candidates
		} else {
			ranking::rank(candidates, &keywords, max_price, &self.cfg.ranking)
		};

		Ok(SearchOutcome { products, parsed: Some(parsed), applied_filters: applied })
	}
}
