use thiserror::Error;

/// Convenience alias used throughout the metric API.
pub type Result<T, E = MetricError> = std::result::Result<T, E>;

/// Broad family of a [`MetricError`].
///
/// `Shape` errors come from the validation helpers: a value was absent or is
/// missing the geometry a compactness metric needs. `Attribute` and
/// `Arithmetic` errors come from the metrics themselves once validation has passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A value is absent or is not district/plan-shaped.
    Shape,
    /// A field or geometry query required by the metric is unavailable or invalid.
    Attribute,
    /// A denominator is zero or an aggregate is undefined.
    Arithmetic,
}

/// Errors raised by validation helpers and metric functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MetricError {
    #[error("not a district: {0}")]
    NotADistrict(String),

    #[error("not a district plan")]
    NotAPlan,

    #[error("district {district} has no geometry")]
    MissingGeometry { district: String },

    #[error("district {district} has no party vote mapping")]
    MissingPartyVotes { district: String },

    #[error("district {district} has no votes recorded for party '{party}'")]
    MissingParty { district: String, party: String },

    #[error("district {district} has invalid vote count {votes} for party '{party}'")]
    InvalidVotes { district: String, party: String, votes: f64 },

    #[error("geometry does not support {query}: {geometry} is not polygonal")]
    UnsupportedGeometry { query: &'static str, geometry: &'static str },

    #[error("division by zero computing {0}")]
    DivisionByZero(&'static str),

    #[error("{0} is undefined for an empty district plan")]
    EmptyPlan(&'static str),
}

impl MetricError {
    /// Get the family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetricError::NotADistrict(_)
            | MetricError::NotAPlan
            | MetricError::MissingGeometry { .. } => ErrorKind::Shape,
            MetricError::MissingPartyVotes { .. }
            | MetricError::MissingParty { .. }
            | MetricError::InvalidVotes { .. }
            | MetricError::UnsupportedGeometry { .. } => ErrorKind::Attribute,
            MetricError::DivisionByZero(_)
            | MetricError::EmptyPlan(_) => ErrorKind::Arithmetic,
        }
    }
}
