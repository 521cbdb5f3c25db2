pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unsupported diagram language: {code}")]
    UnsupportedLanguage { code: String },
}
