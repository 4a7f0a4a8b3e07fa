use thiserror::Error;

/// Errors that can occur when building an elastoplastic material.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("unknown secondary modulus kind `{0}`: expected tangent (`t`) or plastic (`p`)")]
    UnknownModulusKind(String),

    #[error("unknown hardening model `{0}`: expected kinematic (`k`) or isotropic (`i`)")]
    UnknownHardeningModel(String),

    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl Error {
    pub(crate) fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
