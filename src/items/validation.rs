use super::types::{Item, NAME_FIELD, PRICE_FIELD};

use std::collections::BTreeMap;

pub const NAME_REQUIRED: &str = "Name is required.";
pub const PRICE_NOT_POSITIVE: &str = "Price must be greater than zero.";

/// Violated rules grouped by field name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors {
    pub errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &str, message: &str) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn field(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

/// Checks every rule an item must satisfy before it is persisted.
pub fn validate_item(item: &Item) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if item.name.trim().is_empty() {
        errors.add(NAME_FIELD, NAME_REQUIRED);
    }
    // NaN fails this as well
    if !(item.price > 0.0) {
        errors.add(PRICE_FIELD, PRICE_NOT_POSITIVE);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
