use derive_more::Display;

/// Root error type for the entire crate
#[derive(Debug, Clone, PartialEq, Display)]
pub enum AppError {
    #[display(fmt = "Domain Error: {}", _0)]
    Domain(DomainError),
    #[display(fmt = "Infrastructure Error: {}", _0)]
    Infrastructure(InfrastructureError),
    #[display(fmt = "Configuration Error: {}", _0)]
    Configuration(String),
}

/// Domain layer specific errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum DomainError {
    #[display(fmt = "Validation: {}", _0)]
    Validation(ValidationError),
}

/// Violations of the sample and series invariants
#[derive(Debug, Clone, PartialEq, Display)]
pub enum ValidationError {
    #[display(fmt = "Invalid sample at index {}: {}", index, reason)]
    InvalidSample { index: usize, reason: String },
    #[display(fmt = "Sample at index {} is not after its predecessor", index)]
    OutOfOrder { index: usize },
    #[display(fmt = "Duplicate timestamp {} at index {}", timestamp, index)]
    DuplicateTimestamp { index: usize, timestamp: u64 },
    #[display(fmt = "Invalid symbol: {}", _0)]
    InvalidSymbol(String),
}

/// Infrastructure layer errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum InfrastructureError {
    #[display(fmt = "Repository: {}", _0)]
    Repository(RepositoryError),
    #[display(fmt = "Rendering: {}", _0)]
    Rendering(RenderingError),
}

/// Failures reported by the external data collaborators
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RepositoryError {
    #[display(fmt = "network failure: {}", _0)]
    Network(String),
    #[display(fmt = "backend reported: {}", _0)]
    Backend(String),
    #[display(fmt = "malformed payload: {}", _0)]
    Malformed(String),
    #[display(fmt = "not found: {}", _0)]
    NotFound(String),
}

/// Rendering adapter errors
#[derive(Debug, Clone, PartialEq, Display)]
pub enum RenderingError {
    #[display(fmt = "serialization failed: {}", _0)]
    Serialization(String),
    #[display(fmt = "inconsistent chart spec: {}", _0)]
    InconsistentSpec(String),
    #[display(fmt = "unknown renderer: {}", _0)]
    UnknownRenderer(String),
}

impl std::error::Error for AppError {}
impl std::error::Error for DomainError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for InfrastructureError {}
impl std::error::Error for RepositoryError {}
impl std::error::Error for RenderingError {}

impl From<DomainError> for AppError {
    fn from(error: DomainError) -> Self {
        AppError::Domain(error)
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        DomainError::Validation(error)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        AppError::Domain(DomainError::Validation(error))
    }
}

impl From<InfrastructureError> for AppError {
    fn from(error: InfrastructureError) -> Self {
        AppError::Infrastructure(error)
    }
}

impl From<RepositoryError> for InfrastructureError {
    fn from(error: RepositoryError) -> Self {
        InfrastructureError::Repository(error)
    }
}

impl From<RepositoryError> for AppError {
    fn from(error: RepositoryError) -> Self {
        AppError::Infrastructure(InfrastructureError::Repository(error))
    }
}

impl From<RenderingError> for InfrastructureError {
    fn from(error: RenderingError) -> Self {
        InfrastructureError::Rendering(error)
    }
}

impl From<RenderingError> for AppError {
    fn from(error: RenderingError) -> Self {
        AppError::Infrastructure(InfrastructureError::Rendering(error))
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(error: ValidationError) -> Self {
        RepositoryError::Malformed(error.to_string())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
pub type RenderingResult<T> = Result<T, RenderingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_display_reads_outside_in() {
        let err = AppError::from(RepositoryError::Network("timeout".to_string()));
        assert_eq!(
            err.to_string(),
            "Infrastructure Error: Repository: network failure: timeout"
        );
    }

    #[test]
    fn validation_converts_to_malformed_payload() {
        let err = RepositoryError::from(ValidationError::OutOfOrder { index: 3 });
        assert_eq!(
            err,
            RepositoryError::Malformed("Sample at index 3 is not after its predecessor".to_string())
        );
    }
}
