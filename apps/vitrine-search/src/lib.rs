use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vitrine_catalogue::MemoryCatalogue;
use vitrine_service::SearchService;

/// Query a product catalogue with natural language.
#[derive(Debug, Parser)]
#[command(version, rename_all = "kebab")]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// JSON catalogue file with `categories` and `products` arrays.
	#[arg(long, short = 'k', value_name = "FILE")]
	pub catalogue: PathBuf,
	/// Free-text search query; empty lists the whole active catalogue.
	pub query: String,
	/// Also print the parsed interpretation and applied-filter flags.
	#[arg(long)]
	pub metadata: bool,
}

pub async fn run(args: Args) -> color_eyre::Result<()> {
	let config = vitrine_config::load(&args.config)?;
	init_tracing(&config);
	let catalogue = MemoryCatalogue::from_json_file(&args.catalogue)?;
	tracing::info!(products = catalogue.len(), "Catalogue loaded.");
	let service = SearchService::new(config, Arc::new(catalogue));

	if args.metadata {
		let outcome = service.search_with_metadata(&args.query).await?;
		println!("{}", serde_json::to_string_pretty(&outcome)?);
	} else {
		let products = service.search(&args.query).await?;
		println!("{}", serde_json::to_string_pretty(&products)?);
	}

	Ok(())
}

fn init_tracing(config: &vitrine_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
	tracing_subscriber::fmt().with_env_filter(filter).init();
}
