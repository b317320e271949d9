use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown theme {0:?}")]
    InvalidTheme(String),

    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid preferences file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("browser storage unavailable: {0}")]
    Storage(String),

    #[error("preference store lock poisoned")]
    Poisoned,
}
