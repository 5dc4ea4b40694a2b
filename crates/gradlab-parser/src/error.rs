use thiserror::Error;

/// Errors produced while turning source text into an [`Expr`](crate::Expr)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Grammar rejection; carries pest's positional message unchanged
    #[error("{0}")]
    Syntax(String),

    #[error("expression is empty")]
    Empty,

    #[error("expression is too long ({len} bytes, limit is {limit})")]
    TooLong { len: usize, limit: usize },

    #[error("name '{0}' is not defined")]
    UnknownSymbol(String),

    #[error("'{0}' is not an allowed function")]
    UnknownFunction(String),

    /// `np.`/`math.` prefix in front of something that is not a function or constant
    #[error("'{0}' cannot be used with a namespace prefix")]
    InvalidNamespace(String),

    #[error("invalid number literal '{0}'")]
    InvalidNumber(String),

    /// Parse tree did not have the shape the builder expected
    #[error("internal parser error: {0}")]
    Internal(String),
}
