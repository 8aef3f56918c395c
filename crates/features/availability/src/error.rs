use std::borrow::Cow;

/// Errors raised while setting up the checkers. Individual checks never fail; they
/// report a [`ncraft_domain::availability::CheckOutcome`] instead.
#[ncraft_derive::ncraft_error]
pub enum AvailabilityError {
    #[error("HTTP client error{}: {source}", format_context(.context))]
    Client { source: reqwest::Error, context: Option<Cow<'static, str>> },

    #[error("Invalid URL{}: {source}", format_context(.context))]
    Url { source: url::ParseError, context: Option<Cow<'static, str>> },

    #[error("Internal availability error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
