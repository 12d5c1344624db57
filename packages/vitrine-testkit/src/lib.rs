use uuid::Uuid;

use vitrine_catalogue::MemoryCatalogue;
use vitrine_domain::catalogue::Product;

/// Deterministic product id so repeated test runs build identical
/// catalogues.
pub fn product_id(name: &str) -> Uuid {
	Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
}

pub fn product(
	name: &str,
	category: &str,
	price: f64,
	brand: &str,
	description: &str,
	use_case: &str,
	material: &str,
) -> Product {
	Product {
		product_id: product_id(name),
		name: name.to_string(),
		category: category.to_string(),
		price,
		brand: brand.to_string(),
		base_description: description.to_string(),
		use_case: use_case.to_string(),
		material: material.to_string(),
		care_instructions: String::new(),
		is_active: true,
		stock: 25,
	}
}

/// A small storefront catalogue covering every category and the awkward
/// cases (phrase keywords, near-name brands, price bands).
pub fn seed_products() -> Vec<Product> {
	vec![
		product(
			"PulseSound Wireless Earbuds",
			"Electronics & Accessories",
			129.0,
			"PulseSound",
			"Clear audio, stable Bluetooth connectivity, and a comfortable in-ear fit.",
			"Gym, commuting, calls",
			"ABS plastic, silicone ear tips",
		),
		product(
			"VoltMax 20000mAh Power Bank",
			"Electronics & Accessories",
			89.0,
			"VoltMax",
			"High-capacity portable charging for travel and long workdays.",
			"Travel, daily charging",
			"Aluminum alloy",
		),
		product(
			"SmartHome Wi-Fi Plug",
			"Electronics & Accessories",
			39.0,
			"SmartHome",
			"Remote control for lamps and small appliances.",
			"Home automation",
			"Polycarbonate",
		),
		product(
			"ClearView HD Webcam",
			"Electronics & Accessories",
			99.0,
			"ClearView",
			"Sharp video for remote work and streaming.",
			"Remote work, video calls",
			"ABS plastic",
		),
		product(
			"AirCrisp Digital Air Fryer",
			"Home & Living",
			199.0,
			"AirCrisp",
			"Healthier meals at home with minimal oil and consistent results.",
			"Home cooking",
			"Stainless steel",
		),
		product(
			"BrightLite Adjustable Desk Lamp",
			"Home & Living",
			59.0,
			"BrightLite",
			"Adjustable brightness for study and office desks.",
			"Study, office desk",
			"Aluminum",
		),
		product(
			"RoboClean Compact Vacuum",
			"Home & Living",
			249.0,
			"RoboClean",
			"Compact robot vacuum for everyday home cleaning.",
			"Home cleaning",
			"ABS plastic",
		),
		product(
			"SunGuard SPF50 Sunscreen",
			"Beauty & Personal Care",
			39.0,
			"SunGuard",
			"Broad-spectrum SPF50 protection for sensitive skin.",
			"Outdoor protection",
			"Lotion",
		),
		product(
			"SilkSmooth Ionic Hair Dryer",
			"Beauty & Personal Care",
			149.0,
			"SilkSmooth",
			"Fast drying with ionic technology for smooth styling.",
			"Hair styling",
			"Plastic, ceramic coating",
		),
		product(
			"VitaGlow Vitamin C Serum",
			"Beauty & Personal Care",
			59.0,
			"VitaGlow",
			"Brightening vitamin C serum for daily skincare.",
			"Skincare",
			"Glass bottle",
		),
		product(
			"FlexRun Lightweight Running Shoes",
			"Fashion & Wearables",
			159.0,
			"FlexRun",
			"Designed for comfort and support across jogging and training.",
			"Running, training",
			"Mesh, rubber sole",
		),
		product(
			"TimePro Minimalist Watch",
			"Fashion & Wearables",
			199.0,
			"TimePro",
			"Minimalist watch for office and lifestyle wear.",
			"Office, lifestyle",
			"Stainless steel, leather",
		),
		product(
			"FlexFlow Yoga Mat",
			"Fitness & Wellness",
			59.0,
			"FlexFlow",
			"Non-slip yoga mat for stretching and home workouts.",
			"Yoga, stretching",
			"TPE foam",
		),
		product(
			"PowerLoop Resistance Bands",
			"Fitness & Wellness",
			49.0,
			"PowerLoop",
			"Resistance bands for strength training and flexibility.",
			"Strength training",
			"Latex",
		),
		product(
			"ShakeSmart Protein Shaker",
			"Fitness & Wellness",
			29.0,
			"ShakeSmart",
			"Leak-proof protein shaker for gym nutrition.",
			"Nutrition, gym",
			"BPA-free plastic",
		),
	]
}

pub fn seed_catalogue() -> MemoryCatalogue {
	MemoryCatalogue::new(seed_products())
}
