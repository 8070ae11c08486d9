//! Payload validation rules for create and replace requests.
//!
//! Validation accumulates a message for every violated field instead of
//! stopping at the first failure, so a client learns about all problems in a
//! single round trip. Construction of entities happens only after this step
//! and never fails.

use std::collections::BTreeMap;

/// Field name to human-readable message, one entry per violated rule.
pub type FieldErrors = BTreeMap<&'static str, String>;

const NAME_MESSAGE: &str = "The length of the name should be between 1 and 256 characters long";
const DESCRIPTION_MESSAGE: &str =
    "The length of the description should shorter than 512 characters long";
const PRICE_MESSAGE: &str = "Price should be greater than 0";

/// Maximum byte length of a product or category name.
pub const NAME_MAX_LEN: usize = 256;
/// Maximum byte length of a product description.
pub const DESCRIPTION_MAX_LEN: usize = 512;

fn check_name(errors: &mut FieldErrors, name: &str) {
    if name.is_empty() || name.len() > NAME_MAX_LEN {
        errors.insert("name", NAME_MESSAGE.to_owned());
    }
}

/// Validate a product payload, returning one entry per violated field.
///
/// An empty map means the payload satisfies every rule. Lengths are byte
/// lengths to stay compatible with existing clients.
pub fn validate_product(name: &str, description: &str, price: i32) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(&mut errors, name);
    if description.len() > DESCRIPTION_MAX_LEN {
        errors.insert("description", DESCRIPTION_MESSAGE.to_owned());
    }
    if price <= 0 {
        errors.insert("price", PRICE_MESSAGE.to_owned());
    }
    errors
}

/// Validate a category payload.
pub fn validate_category(name: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    check_name(&mut errors, name);
    errors
}
