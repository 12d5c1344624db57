use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A catalogue category. Names are unique and referenced by products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	pub name: String,
}

/// A sellable product. Read-only to the search core; a search never mutates
/// the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
	pub product_id: Uuid,
	pub name: String,
	/// Name of the category the product belongs to.
	pub category: String,
	pub price: f64,
	#[serde(default)]
	pub brand: String,
	#[serde(default)]
	pub base_description: String,
	#[serde(default)]
	pub use_case: String,
	#[serde(default)]
	pub material: String,
	#[serde(default)]
	pub care_instructions: String,
	#[serde(default = "default_active")]
	pub is_active: bool,
	#[serde(default)]
	pub stock: i64,
}

fn default_active() -> bool {
	true
}
