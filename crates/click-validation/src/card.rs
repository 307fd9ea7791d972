//! Credit card number validation
//!
//! Only the card length and issuer prefix are checked against the network
//! picked in a companion select field. There is no checksum test.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FieldResult;
use crate::field::{accept, reject, resolve, FieldSource};
use crate::messages::{FailureKind, MessageSet};
use crate::text::{check_text, TextConstraint};

/// Shortest number any supported network issues
const MIN_CARD_LENGTH: usize = 13;

/// Card networks with known number layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CardNetwork {
    Visa,
    #[serde(alias = "MASTER")]
    Mastercard,
    Amex,
    Diners,
    Discover,
}

impl FromStr for CardNetwork {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "VISA" => Ok(CardNetwork::Visa),
            "MASTER" | "MASTERCARD" => Ok(CardNetwork::Mastercard),
            "AMEX" => Ok(CardNetwork::Amex),
            "DINERS" => Ok(CardNetwork::Diners),
            "DISCOVER" => Ok(CardNetwork::Discover),
            other => Err(format!("unknown card network: {}", other)),
        }
    }
}

impl CardNetwork {
    /// Does `number` (digits only, separators already stripped) fit this network?
    pub fn accepts(self, number: &str) -> bool {
        let digits = number.as_bytes();
        let len = digits.len();
        let first = digits.first().copied();
        let second = digits.get(1).copied();

        match self {
            CardNetwork::Visa => (len == 13 || len == 16) && first == Some(b'4'),
            CardNetwork::Mastercard => {
                len == 16 && first == Some(b'5') && matches!(second, Some(b'1'..=b'5'))
            }
            CardNetwork::Amex => {
                len == 15 && first == Some(b'3') && matches!(second, Some(b'4' | b'7'))
            }
            CardNetwork::Diners => {
                len == 14 && first == Some(b'3') && matches!(second, Some(b'0' | b'6' | b'8'))
            }
            CardNetwork::Discover => len == 16 && number.starts_with("6011"),
        }
    }
}

/// Remove the separators users type between digit groups
pub fn strip_separators(value: &str) -> String {
    value.chars().filter(|&c| c != '=' && c != ' ').collect()
}

/// Validate a card number field.
///
/// The text checks run first. `type_id` is the field holding the selected
/// network name and is only read for a non-empty number. An unknown network
/// name fails the number with the format message.
pub fn validate_credit_card_field<S>(
    source: &mut S,
    id: &str,
    type_id: &str,
    constraint: &TextConstraint,
    msgs: &MessageSet,
) -> FieldResult
where
    S: FieldSource + ?Sized,
{
    let number = {
        let mut field = resolve(source, id)?;
        let value = check_text(&mut *field, id, constraint, msgs)?;
        if value.is_empty() {
            return accept(&mut *field);
        }

        let number = strip_separators(&value);
        if number.len() < MIN_CARD_LENGTH {
            return reject(&mut *field, id, msgs, FailureKind::Format);
        }
        number
    };

    let network = resolve(source, type_id)?.value().parse::<CardNetwork>();
    let mut field = resolve(source, id)?;
    match network {
        Ok(network) if network.accepts(&number) => accept(&mut *field),
        Ok(network) => {
            tracing::debug!(field_id = id, ?network, "card number does not match network");
            reject(&mut *field, id, msgs, FailureKind::Format)
        }
        Err(reason) => {
            tracing::debug!(field_id = id, %reason, "card network not recognised");
            reject(&mut *field, id, msgs, FailureKind::Format)
        }
    }
}
