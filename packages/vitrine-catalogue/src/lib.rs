mod error;

pub use error::Error;

use std::{fs, future::Future, path::Path, pin::Pin, sync::Arc};

use serde::Deserialize;

use vitrine_domain::catalogue::{Category, Product};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Read-only access to the live catalogue. The search core never writes; a
/// search takes one snapshot of the active products and works on that.
pub trait CatalogueStore
where
	Self: Send + Sync,
{
	/// All currently active products, in storage order.
	fn fetch_active(&self) -> BoxFuture<'_, Result<Vec<Product>>>;

	/// All category names, in storage order.
	fn category_names(&self) -> BoxFuture<'_, Result<Vec<String>>>;
}

#[derive(Debug, Deserialize)]
struct CatalogueFile {
	#[serde(default)]
	categories: Vec<Category>,
	products: Vec<Product>,
}

/// In-memory catalogue, the backing store for the CLI and for tests. A
/// SQL-backed implementation would satisfy the same trait.
#[derive(Debug, Clone)]
pub struct MemoryCatalogue {
	products: Arc<Vec<Product>>,
	categories: Arc<Vec<String>>,
}
impl MemoryCatalogue {
	pub fn new(products: Vec<Product>) -> Self {
		let categories = distinct_categories(&products);

		Self { products: Arc::new(products), categories: Arc::new(categories) }
	}

	pub fn with_categories(products: Vec<Product>, categories: Vec<String>) -> Self {
		Self { products: Arc::new(products), categories: Arc::new(categories) }
	}

	pub fn from_json_file(path: &Path) -> Result<Self> {
		let raw = fs::read_to_string(path)
			.map_err(|err| Error::ReadCatalogue { path: path.to_path_buf(), source: err })?;
		let file: CatalogueFile = serde_json::from_str(&raw)
			.map_err(|err| Error::ParseCatalogue { path: path.to_path_buf(), source: err })?;
		let mut categories =
			file.categories.into_iter().map(|category| category.name).collect::<Vec<_>>();

		if categories.is_empty() {
			categories = distinct_categories(&file.products);
		}

		Ok(Self { products: Arc::new(file.products), categories: Arc::new(categories) })
	}

	pub fn len(&self) -> usize {
		self.products.len()
	}

	pub fn is_empty(&self) -> bool {
		self.products.is_empty()
	}
}
impl CatalogueStore for MemoryCatalogue {
	fn fetch_active(&self) -> BoxFuture<'_, Result<Vec<Product>>> {
		let products = self
			.products
			.iter()
			.filter(|product| product.is_active)
			.cloned()
			.collect::<Vec<_>>();

		Box::pin(async move { Ok(products) })
	}

	fn category_names(&self) -> BoxFuture<'_, Result<Vec<String>>> {
		let categories = self.categories.as_ref().clone();

		Box::pin(async move { Ok(categories) })
	}
}

fn distinct_categories(products: &[Product]) -> Vec<String> {
	let mut categories: Vec<String> = Vec::new();

	for product in products {
		if !categories.contains(&product.category) {
			categories.push(product.category.clone());
		}
	}

	categories
}

#[cfg(test)]
mod tests {
	use uuid::Uuid;

	use super::*;

	fn product(name: &str, category: &str, is_active: bool) -> Product {
		Product {
			product_id: Uuid::new_v4(),
			name: name.to_string(),
			category: category.to_string(),
			price: 10.0,
			brand: String::new(),
			base_description: String::new(),
			use_case: String::new(),
			material: String::new(),
			care_instructions: String::new(),
			is_active,
			stock: 1,
		}
	}

	#[tokio::test]
	async fn fetch_active_filters_inactive_products() {
		let store = MemoryCatalogue::new(vec![
			product("Webcam", "Electronics & Accessories", true),
			product("Discontinued Lamp", "Home & Living", false),
		]);
		let active = store.fetch_active().await.expect("fetch failed");

		assert_eq!(active.len(), 1);
		assert_eq!(active[0].name, "Webcam");
	}

	#[tokio::test]
	async fn categories_are_derived_distinct_and_ordered() {
		let store = MemoryCatalogue::new(vec![
			product("Webcam", "Electronics & Accessories", true),
			product("Power Bank", "Electronics & Accessories", true),
			product("Lamp", "Home & Living", true),
		]);
		let names = store.category_names().await.expect("fetch failed");

		assert_eq!(
			names,
			vec!["Electronics & Accessories".to_string(), "Home & Living".to_string()]
		);
	}
}
