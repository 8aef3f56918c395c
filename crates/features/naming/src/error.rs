use std::borrow::Cow;

/// Error types specific to name generation.
#[ncraft_derive::ncraft_error]
pub enum NamingError {
    /// Nothing usable was left after keyword normalization.
    #[error("No keywords provided{}: {message}", format_context(.context))]
    NoKeywords { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal naming error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
