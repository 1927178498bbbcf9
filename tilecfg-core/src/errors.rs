use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid color `{0}`: expected a hex color like #rrggbb")]
    InvalidColor(String),
    #[error("Palette index {index} is out of bounds for a palette of {len} colors")]
    PaletteIndex { index: usize, len: usize },
    #[error("Unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("Configuration has {count} error(s), first: {first}")]
    Invalid { count: usize, first: String },
}

/// Failure reported by the host while executing a triggered command.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Failed to spawn `{cmd}`: {source}")]
    Spawn {
        cmd: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse command line `{0}`")]
    CommandLine(String),
    #[error("Command not supported by this host: {0}")]
    Unsupported(String),
}
