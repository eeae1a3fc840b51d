//! Form models behind the landing-page dialogs.
//!
//! Each model is plain data plus the rules the browser would otherwise
//! enforce through `required`/`min`/`max`, so the dialogs and the unit tests
//! share one definition of "submittable".

pub mod demo;
pub mod donor;
pub mod hospital;
pub mod schedule;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Donors must be between 18 and 65 years old.")]
    AgeOutOfRange,
    #[error("Please pick a date from today onwards.")]
    DateInPast,
    #[error("{0} is not a valid date.")]
    InvalidDate(String),
    #[error("Please accept the privacy policy to continue.")]
    ConsentRequired,
}

/// A dialog form that is validated as a whole and dropped on submit.
pub trait ModalForm: Default {
    fn validate(&self) -> Result<(), FormError>;

    /// Number of fields the user has filled in. Used for logging in place of
    /// the values themselves.
    fn filled_fields(&self) -> usize;
}

/// Validates `form` and, if it passes, hands back its contents while leaving
/// `form` at its defaults.
pub fn take_submission<F: ModalForm>(form: &mut F) -> Result<F, FormError> {
    form.validate()?;
    Ok(std::mem::take(form))
}

pub(crate) fn require(value: &str, label: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(label))
    } else {
        Ok(())
    }
}

pub(crate) fn count_filled(values: &[&str]) -> usize {
    values.iter().filter(|v| !v.trim().is_empty()).count()
}

/// A `<select>` option: submitted value and visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

impl Choice {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    /// An option whose label is also its value.
    pub const fn same(text: &'static str) -> Self {
        Self::new(text, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default, Debug, PartialEq)]
    struct Probe {
        title: String,
    }

    impl ModalForm for Probe {
        fn validate(&self) -> Result<(), FormError> {
            require(&self.title, "Title")
        }

        fn filled_fields(&self) -> usize {
            count_filled(&[&self.title])
        }
    }

    #[test]
    fn take_submission_resets_form_on_success() {
        let mut form = Probe { title: "x".into() };
        let taken = take_submission(&mut form).unwrap();
        assert_eq!(taken.title, "x");
        assert_eq!(form, Probe::default());
    }

    #[test]
    fn take_submission_leaves_form_untouched_on_error() {
        let mut form = Probe { title: "   ".into() };
        let err = take_submission(&mut form).unwrap_err();
        assert_eq!(err, FormError::MissingField("Title"));
        assert_eq!(form.title, "   ");
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            FormError::MissingField("Full Name").to_string(),
            "Full Name is required."
        );
        assert_eq!(
            FormError::ConsentRequired.to_string(),
            "Please accept the privacy policy to continue."
        );
    }
}
