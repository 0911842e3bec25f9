//! Field-level invariants checked before any write reaches the store.
//!
//! Pure functions; no I/O. A write that fails here is rejected whole, so a
//! validation failure never leaves partial state behind.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::contact::NewContact;

/// `local@domain.tld`: ASCII letters/digits/`._%+-` before the `@`,
/// dot-separated labels after it, and a final label of at least two letters.
/// Anchored at both ends so the whole string must match.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
  Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
    .expect("valid email regex")
});

/// Why a contact was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("at least first name or last name must be provided")]
  MissingName,

  #[error("invalid email format: {0:?}")]
  InvalidEmail(String),
}

/// Whitespace as far as name presence is concerned.
fn is_blank_char(c: char) -> bool { matches!(c, ' ' | '\t' | '\r' | '\n') }

/// `true` iff at least one of the names is non-empty after trimming.
pub fn validate_names(first: &str, last: &str) -> bool {
  !first.trim_matches(is_blank_char).is_empty()
    || !last.trim_matches(is_blank_char).is_empty()
}

/// `true` if `email` is empty (the field is optional) or fully matches the
/// email shape.
pub fn validate_email(email: &str) -> bool {
  email.is_empty() || EMAIL_RE.is_match(email)
}

/// Check every invariant of `contact`; names first, then email.
pub fn validate(contact: &NewContact) -> Result<(), ValidationError> {
  if !validate_names(&contact.first_name, &contact.last_name) {
    return Err(ValidationError::MissingName);
  }
  if !validate_email(&contact.email) {
    return Err(ValidationError::InvalidEmail(contact.email.clone()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn names_need_one_non_blank_half() {
    assert!(!validate_names("", ""));
    assert!(!validate_names(" \t", "\r\n"));
    assert!(validate_names("Ada", ""));
    assert!(validate_names("", "Lovelace"));
    assert!(validate_names("Ada", "Lovelace"));
    assert!(validate_names("  Ada  ", " "));
  }

  #[test]
  fn email_examples() {
    assert!(validate_email(""));
    assert!(validate_email("a@b.co"));
    assert!(validate_email("ada.lovelace+notes@mail.example.com"));
    assert!(validate_email("first_last%x-y@sub-domain.example.org"));
    assert!(!validate_email("not-an-email"));
    assert!(!validate_email("a@b"));
    assert!(!validate_email("a@b.c"));
    assert!(!validate_email("a@b.c0"));
    assert!(!validate_email("@example.com"));
    assert!(!validate_email("ada@@example.com"));
    assert!(!validate_email("ada lovelace@example.com"));
  }

  #[test]
  fn email_match_is_anchored() {
    // A valid address embedded in other text is not a valid email.
    assert!(!validate_email("see ada@example.com"));
    assert!(!validate_email("ada@example.com today"));
    assert!(!validate_email("ada@example.com\n"));
    assert!(!validate_email(" ada@example.com"));
  }

  #[test]
  fn validate_checks_names_before_email() {
    let both_bad = NewContact::new("", "", "nope", "");
    assert_eq!(validate(&both_bad), Err(ValidationError::MissingName));

    let bad_email = NewContact::new("Ada", "", "nope", "");
    assert_eq!(
      validate(&bad_email),
      Err(ValidationError::InvalidEmail("nope".into()))
    );

    let ok = NewContact::new("Ada", "Lovelace", "ada@example.com", "+44123");
    assert_eq!(validate(&ok), Ok(()));
  }

  #[test]
  fn mobile_is_unconstrained() {
    let c = NewContact::new("Ada", "", "", "call me maybe; DROP TABLE x");
    assert!(validate(&c).is_ok());
  }

  #[test]
  fn errors_read_as_sentences() {
    assert_eq!(
      ValidationError::MissingName.to_string(),
      "at least first name or last name must be provided"
    );
    assert_eq!(
      ValidationError::InvalidEmail("x".into()).to_string(),
      "invalid email format: \"x\""
    );
  }
}
