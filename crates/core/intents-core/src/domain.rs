//! The persisted `Intent` entity

use crate::{
    error::{FieldError, IntentsError, IntentsResult},
    traits::Validatable,
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Document shape of an intent as stored in the `intent` collection.
///
/// Equality and hashing only consider `id`: an intent without an id has not
/// been persisted yet and equals only the very same instance.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Intent {
    /// Storage-assigned identifier
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
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

impl Intent {
    /// Properties accepted by [`Intent::compare_by`]
    pub const SORTABLE_PROPERTIES: [&'static str; 4] =
        ["id", "tag", "context_set", "context_filter"];

    /// Create an empty, unsaved intent
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the tag
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the patterns
    #[must_use]
    pub fn patterns(mut self, patterns: Vec<String>) -> Self {
        self.patterns = Some(patterns);
        self
    }

    /// Set the responses
    #[must_use]
    pub fn responses(mut self, responses: Vec<String>) -> Self {
        self.responses = Some(responses);
        self
    }

    /// Set the context this intent establishes
    #[must_use]
    pub fn context_set(mut self, context: impl Into<String>) -> Self {
        self.context_set = Some(context.into());
        self
    }

    /// Set the context this intent requires
    #[must_use]
    pub fn context_filter(mut self, context: impl Into<String>) -> Self {
        self.context_filter = Some(context.into());
        self
    }

    /// Compare two intents on a single property.
    ///
    /// Returns `None` for a property that is not sortable. Absent values sort
    /// before present ones.
    pub fn compare_by(&self, other: &Self, property: &str) -> Option<Ordering> {
        let ordering = match property {
            "id" => self.id.cmp(&other.id),
            "tag" => self.tag.cmp(&other.tag),
            "context_set" => self.context_set.cmp(&other.context_set),
            "context_filter" => self.context_filter.cmp(&other.context_filter),
            _ => return None,
        };
        Some(ordering)
    }
}

impl PartialEq for Intent {
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

impl Hash for Intent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Validatable for Intent {
    fn validate(&self) -> IntentsResult<()> {
        if self.tag.is_none() {
            return Err(IntentsError::invalid_fields(vec![FieldError::new(
                "intent",
                "tag",
                "must not be null",
            )]));
        }
        Ok(())
    }
}

impl fmt::Debug for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Intent{{id={}, tag='{}'}}",
            self.id.as_deref().unwrap_or("null"),
            self.tag.as_deref().unwrap_or("null")
        )
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ids_are_equal() {
        let a = Intent::new().id("id1");
        let b = Intent::new().id("id1").tag("different");
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_ids_are_not_equal() {
        let a = Intent::new().id("id1");
        let b = Intent::new().id("id2");
        assert_ne!(a, b);
    }

    #[test]
    fn test_missing_id_only_equals_itself() {
        let a = Intent::new().tag("T");
        let b = Intent::new().tag("T");
        assert_ne!(a, b);
        assert_ne!(a, a.clone());
        #[allow(clippy::eq_op)]
        let reflexive = a == a;
        assert!(reflexive);
        assert!(std::slice::from_ref(&a).contains(&a));
        assert!(!std::slice::from_ref(&a).contains(&a.clone()));

        let persisted = Intent::new().id("id2");
        assert_ne!(a, persisted);
        assert_ne!(persisted, a);
    }

    #[test]
    fn test_tag_is_required() {
        assert!(!Intent::new().is_valid());
        assert!(Intent::new().tag("T").is_valid());
    }

    #[test]
    fn test_compare_by() {
        let a = Intent::new().id("a").tag("zeta");
        let b = Intent::new().id("b").tag("alpha");
        assert_eq!(a.compare_by(&b, "id"), Some(Ordering::Less));
        assert_eq!(a.compare_by(&b, "tag"), Some(Ordering::Greater));
        assert_eq!(a.compare_by(&b, "context_set"), Some(Ordering::Equal));
        assert_eq!(a.compare_by(&b, "patterns"), None);
    }

    #[test]
    fn test_document_uses_underscore_id() {
        let intent = Intent::new().id("abc").tag("T");
        let doc = serde_json::to_value(&intent).unwrap();
        assert_eq!(doc["_id"], "abc");
        assert_eq!(doc["tag"], "T");
        assert!(doc.get("patterns").is_none());
    }

    #[test]
    fn test_debug_format() {
        let intent = Intent::new().id("abc").tag("T");
        assert_eq!(format!("{intent:?}"), "Intent{id=abc, tag='T'}");
        assert_eq!(Intent::new().to_string(), "Intent{id=null, tag='null'}");
    }
}
