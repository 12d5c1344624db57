pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Catalogue error: {message}")]
	Catalogue { message: String },
}
impl From<vitrine_catalogue::Error> for Error {
	fn from(err: vitrine_catalogue::Error) -> Self {
		Self::Catalogue { message: err.to_string() }
	}
}
