use ncraft_derive::ncraft_error;
use std::borrow::Cow;

#[ncraft_error]
pub enum ExportError {
    #[error("I/O error{}: {source}", format_context(.context))]
    Io {
        #[source]
        source: std::io::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
