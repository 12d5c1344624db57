#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to read catalogue file at {path:?}.")]
	ReadCatalogue { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to parse catalogue file at {path:?}.")]
	ParseCatalogue { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Catalogue unavailable: {0}")]
	Unavailable(String),
}
