use ncraft_ideation::IdeationError;
use ncraft_storage::StorageError;
use std::borrow::Cow;

#[ncraft_derive::ncraft_error]
pub enum PlatformError {
    #[error("Ideation failed{}: {source}", format_context(.context))]
    Ideation { source: IdeationError, context: Option<Cow<'static, str>> },

    #[error("Storage failed{}: {source}", format_context(.context))]
    Storage { source: StorageError, context: Option<Cow<'static, str>> },
}
