//! Alert headers for client notifications

use axum::http::{
    header::{HeaderName, InvalidHeaderName},
    HeaderMap, HeaderValue,
};

/// Builds `X-{app}-alert`, `X-{app}-error` and `X-{app}-params` headers
#[derive(Debug, Clone)]
pub struct HeaderUtil {
    application_name: String,
    alert: HeaderName,
    error: HeaderName,
    params: HeaderName,
}

impl HeaderUtil {
    /// Fails when the application name cannot appear inside a header name
    pub fn new(application_name: impl Into<String>) -> Result<Self, InvalidHeaderName> {
        let application_name = application_name.into();
        let name = |suffix: &str| {
            HeaderName::from_bytes(format!("x-{application_name}-{suffix}").as_bytes())
        };
        Ok(Self {
            alert: name("alert")?,
            error: name("error")?,
            params: name("params")?,
            application_name,
        })
    }

    /// Name used as header infix and alert prefix
    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Generic alert with its parameter
    pub fn alert(&self, message: &str, param: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, self.alert.clone(), message);
        insert(&mut headers, self.params.clone(), param);
        headers
    }

    /// `{app}.{entity}.created` with the new id
    pub fn entity_creation_alert(&self, entity: &str, param: &str) -> HeaderMap {
        self.alert(&format!("{}.{entity}.created", self.application_name), param)
    }

    /// `{app}.{entity}.updated` with the id
    pub fn entity_update_alert(&self, entity: &str, param: &str) -> HeaderMap {
        self.alert(&format!("{}.{entity}.updated", self.application_name), param)
    }

    /// `{app}.{entity}.deleted` with the id
    pub fn entity_deletion_alert(&self, entity: &str, param: &str) -> HeaderMap {
        self.alert(&format!("{}.{entity}.deleted", self.application_name), param)
    }

    /// Error alert; `error_key` becomes `error.{error_key}`
    pub fn failure_alert(&self, entity: &str, error_key: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        insert(&mut headers, self.error.clone(), &format!("error.{error_key}"));
        insert(&mut headers, self.params.clone(), entity);
        headers
    }
}

// Values that are not valid header text (raw user input in a path) are skipped
fn insert(headers: &mut HeaderMap, name: HeaderName, value: &str) {
    if let Ok(value) = HeaderValue::from_str(value) {
        headers.insert(name, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_alerts() {
        let util = HeaderUtil::new("intentsApp").unwrap();

        assert_eq!(util.application_name(), "intentsApp");

        let created = util.entity_creation_alert("intent", "abc");
        assert_eq!(created.get("x-intentsapp-alert").unwrap(), "intentsApp.intent.created");
        assert_eq!(created.get("x-intentsapp-params").unwrap(), "abc");

        let updated = util.entity_update_alert("intent", "abc");
        assert_eq!(updated.get("x-intentsapp-alert").unwrap(), "intentsApp.intent.updated");

        let deleted = util.entity_deletion_alert("intent", "abc");
        assert_eq!(deleted.get("x-intentsapp-alert").unwrap(), "intentsApp.intent.deleted");
    }

    #[test]
    fn test_failure_alert() {
        let util = HeaderUtil::new("intentsApp").unwrap();
        let headers = util.failure_alert("intent", "idexists");

        assert_eq!(headers.get("x-intentsapp-error").unwrap(), "error.idexists");
        assert_eq!(headers.get("x-intentsapp-params").unwrap(), "intent");
        assert!(headers.get("x-intentsapp-alert").is_none());
    }

    #[test]
    fn test_invalid_application_name() {
        assert!(HeaderUtil::new("intents app").is_err());
    }

    #[test]
    fn test_unencodable_param_is_skipped() {
        let util = HeaderUtil::new("intentsApp").unwrap();
        let headers = util.entity_deletion_alert("intent", "line\nbreak");
        assert!(headers.get("x-intentsapp-params").is_none());
        assert!(headers.get("x-intentsapp-alert").is_some());
    }
}
