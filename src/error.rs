use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown table: {0} (expected colors, fonts or spacing)")]
    UnknownTable(String),

    #[error("Unknown {table} key: {name}")]
    UnknownRole { table: &'static str, name: String },

    #[error("Invalid token path: {0} (expected <table>.<key>)")]
    InvalidPath(String),

    #[error("Unknown export format: {0} (expected toml, json or qml)")]
    UnknownFormat(String),
}
