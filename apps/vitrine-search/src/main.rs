use clap::Parser;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = vitrine_search::Args::parse();
	vitrine_search::run(args).await
}
