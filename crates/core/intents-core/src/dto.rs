//! Wire-shape transfer object for intents

use crate::{
    error::{FieldError, IntentsError, IntentsResult},
    traits::Validatable,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// JSON body exchanged with clients.
///
/// Mirrors [`crate::Intent`] field-for-field; only the id field name differs
/// on the wire (`id` instead of the document's `_id`).
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct IntentDto {
    /// Server-assigned identifier, absent on create
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Required category label
    #[serde(default)]
    pub tag: Option<String>,

    /// Example user phrasings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,

    /// Canned replies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responses: Option<Vec<String>>,

    /// Context this intent establishes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_set: Option<String>,

    /// Context this intent requires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_filter: Option<String>,
}

impl PartialEq for IntentDto {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl Hash for IntentDto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Validatable for IntentDto {
    fn validate(&self) -> IntentsResult<()> {
        if self.tag.is_none() {
            return Err(IntentsError::invalid_fields(vec![FieldError::new(
                "intentDto",
                "tag",
                "must not be null",
            )]));
        }
        Ok(())
    }
}

impl fmt::Debug for IntentDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IntentDTO{{id={}, tag='{}'}}",
            self.id.as_deref().unwrap_or("null"),
            self.tag.as_deref().unwrap_or("null")
        )
    }
}

impl fmt::Display for IntentDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
