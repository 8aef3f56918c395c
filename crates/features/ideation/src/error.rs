use ncraft_availability::AvailabilityError;
use ncraft_naming::NamingError;
use std::borrow::Cow;

#[ncraft_derive::ncraft_error]
pub enum IdeationError {
    #[error("Name generation failed{}: {source}", format_context(.context))]
    Naming { source: NamingError, context: Option<Cow<'static, str>> },

    #[error("Availability setup failed{}: {source}", format_context(.context))]
    Availability { source: AvailabilityError, context: Option<Cow<'static, str>> },

    #[error("Internal ideation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
