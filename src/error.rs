use crate::canonical::TypeKey;
use thiserror::Error;

/// Errors that can occur when retrieving a value from a [`Variant`](crate::Variant)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The variant holds no value
    #[error("Variant is empty, requested {requested}")]
    Empty { requested: TypeKey },
    /// The requested type doesn't match the type that was stored
    #[error("Type in Variant mismatches requested type: requested {requested}, found {found}")]
    TypeMismatch { requested: TypeKey, found: TypeKey },
}

impl VariantError {
    /// The type the caller asked for
    pub fn requested(&self) -> TypeKey {
        match self {
            VariantError::Empty { requested } => *requested,
            VariantError::TypeMismatch { requested, .. } => *requested,
        }
    }
}
