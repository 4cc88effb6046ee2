use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProximityError {
    /// A required external reference (source object, audio output, ...) could
    /// not be resolved. The controller stops updating when this happens.
    #[error("required reference unresolved: {what}")]
    MissingReference { what: String },

    #[error("invalid {curve} thresholds: near={near} must be finite and below far={far}")]
    InvalidThresholds {
        curve: &'static str,
        near: f32,
        far: f32,
    },
}

impl ProximityError {
    pub fn missing(what: impl Into<String>) -> Self {
        Self::MissingReference { what: what.into() }
    }
}

pub type Result<T> = std::result::Result<T, ProximityError>;
