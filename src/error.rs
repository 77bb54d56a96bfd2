use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, VariantError>;

/// Errors produced while building, reading and comparing variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VariantError {
    /// The list of alternatives names the same type twice.
    #[error("alternatives {first} and {second} are both `{type_name}`")]
    DuplicateAlternativeType {
        /// Position of the first occurrence.
        first: usize,
        /// Position of the repeated occurrence.
        second: usize,
        /// Name of the repeated type.
        type_name: &'static str,
    },
    /// A value was requested from a variant that holds none.
    #[error("variant holds no value")]
    ValuelessAccess,
    /// A value was requested as an alternative that is not the active one.
    #[error("requested alternative {requested}, but alternative {active} is active")]
    WrongAlternative {
        /// Position that was asked for.
        requested: usize,
        /// Position of the live value.
        active: usize,
    },
    /// A position past the end of the list of alternatives.
    #[error("alternative index {index} out of range for {len} alternatives")]
    IndexOutOfRange {
        /// Position that was asked for.
        index: usize,
        /// Number of alternatives.
        len: usize,
    },
    /// Two variants holding different alternatives were compared.
    #[error("cannot compare alternative {left} with alternative {right}")]
    MismatchedAlternatives {
        /// Active position of the left operand.
        left: usize,
        /// Active position of the right operand.
        right: usize,
    },
}
