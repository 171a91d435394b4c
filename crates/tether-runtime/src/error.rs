//! Runtime error types.

/// Errors raised while resolving or invoking runtime classes and methods.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// No class registered under the requested name.
    #[error("class not found: {0}")]
    ClassNotFound(String),

    /// No method with the requested name and parameter types.
    #[error("method not found: {class}.{name}({params})")]
    MethodNotFound {
        class: String,
        name: String,
        params: String,
    },

    /// Invocation supplied the wrong number of arguments.
    #[error("{method} expects {expected} arguments, got {actual}")]
    ArityMismatch {
        method: String,
        expected: usize,
        actual: usize,
    },

    /// An argument value does not fit the declared parameter type.
    #[error("argument {index} of {method} expects {expected}, got {actual}")]
    ArgumentType {
        method: String,
        index: usize,
        expected: &'static str,
        actual: String,
    },

    /// A non-value class was used where a parameter type is required.
    #[error("class `{0}` cannot appear in a method signature")]
    SignatureType(String),

    /// A method rejected an argument value it cannot operate on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A method body failed writing to the runtime's output primitive.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
