use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("'{sub_item}' is not a sub-section of {section}")]
    InvalidSubSection { section: String, sub_item: String },

    #[error("unknown section '{0}'")]
    UnknownSection(String),

    #[error("invalid {kind} filter value '{value}'")]
    InvalidFilterValue { kind: &'static str, value: String },

    #[error("invalid menu registry: {0}")]
    InvalidRegistry(String),

    #[error("could not determine config directory")]
    NoConfigDir,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to write TOML: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("failed to read cluster inventory: {0}")]
    Inventory(#[from] serde_json::Error),
}

impl DashboardError {
    /// Programmer errors raised by rejected navigation or filter calls.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidSubSection { .. } | Self::UnknownSection(_) | Self::InvalidFilterValue { .. }
        )
    }
}
