//! Email field validation

use crate::error::FieldResult;
use crate::field::{accept, reject, resolve, FieldSource};
use crate::messages::{FailureKind, MessageSet};
use crate::string::is_letter_or_digit;
use crate::text::{check_text, TextConstraint};

/// Loose email shape check.
///
/// Requires an `@` that is neither the first nor the last character, and
/// an ASCII letter or digit at both ends. The server does the real check.
pub fn is_valid_email(value: &str) -> bool {
    let Some(at) = value.find('@') else {
        return false;
    };
    if at == 0 || at + 1 == value.len() {
        return false;
    }

    let first = value.chars().next();
    let last = value.chars().next_back();
    matches!((first, last), (Some(f), Some(l)) if is_letter_or_digit(f) && is_letter_or_digit(l))
}

/// Validate an email field: text checks first, then the address shape
pub fn validate_email_field<S>(
    source: &mut S,
    id: &str,
    constraint: &TextConstraint,
    msgs: &MessageSet,
) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let mut field = resolve(source, id)?;
    let value = check_text(&mut *field, id, constraint, msgs)?;

    if !value.is_empty() && !is_valid_email(&value) {
        return reject(&mut *field, id, msgs, FailureKind::Format);
    }
    accept(&mut *field)
}
