use ncraft_derive::ncraft_error;
use std::borrow::Cow;

#[ncraft_error]
pub enum LookupError {
    #[error("Lookup I/O error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown industry{}: {message}", format_context(.context))]
    UnknownIndustry { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal lookup error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn missing_file() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
}

#[test]
fn ui_expansions_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ncraft_error_pass.rs");
}

#[test]
fn source_errors_convert_with_question_mark() {
    fn load() -> Result<(), LookupError> {
        missing_file()?;
        Ok(())
    }

    let err = load().unwrap_err();
    assert!(matches!(err, LookupError::Io { context: None, .. }));
    assert_eq!(err.to_string(), "Lookup I/O error: gone");
}

#[test]
fn context_is_attached_to_source_results() {
    let err = missing_file().context("reading favorites").unwrap_err();
    assert_eq!(err.to_string(), "Lookup I/O error (reading favorites): gone");
}

#[test]
fn context_overrides_existing_variant_context() {
    let result: Result<(), LookupError> = Err(LookupError::UnknownIndustry {
        message: "space".into(),
        context: None,
    });

    let err = result.context("parsing --industry").unwrap_err();
    assert_eq!(err.to_string(), "Unknown industry (parsing --industry): space");
}

#[test]
fn strings_become_internal_errors() {
    let borrowed: LookupError = "table missing".into();
    let owned: LookupError = String::from("table missing").into();

    assert!(matches!(borrowed, LookupError::Internal { .. }));
    assert_eq!(owned.to_string(), "Internal lookup error: table missing");
}
