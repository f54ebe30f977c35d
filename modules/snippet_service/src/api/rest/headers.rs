//! Entity alert headers attached to successful write responses
//!
//! `X-{app}-alert: {app}.{entityName}.{action}` and `X-{app}-params: {id}`.

use crate::contract::{EntityId, EntityKind};
use axum::http::{HeaderMap, HeaderName, HeaderValue};

#[derive(Debug, Clone)]
pub struct AlertHeaders {
    application_name: String,
    /// `None` when disabled or when the application name is not a valid header token
    names: Option<(HeaderName, HeaderName)>,
}

impl AlertHeaders {
    pub fn new(application_name: &str, enabled: bool) -> Self {
        let names = if enabled {
            let alert = HeaderName::try_from(format!("X-{}-alert", application_name));
            let params = HeaderName::try_from(format!("X-{}-params", application_name));
            match (alert, params) {
                (Ok(alert), Ok(params)) => Some((alert, params)),
                _ => {
                    tracing::warn!(
                        application_name,
                        "Application name is not usable in a header name, alert headers disabled"
                    );
                    None
                }
            }
        } else {
            None
        };

        Self {
            application_name: application_name.to_string(),
            names,
        }
    }

    pub fn created(&self, entity: EntityKind, id: EntityId) -> HeaderMap {
        self.alert(entity, "created", id)
    }

    pub fn updated(&self, entity: EntityKind, id: EntityId) -> HeaderMap {
        self.alert(entity, "updated", id)
    }

    pub fn deleted(&self, entity: EntityKind, id: EntityId) -> HeaderMap {
        self.alert(entity, "deleted", id)
    }

    fn alert(&self, entity: EntityKind, action: &str, id: EntityId) -> HeaderMap {
        let mut headers = HeaderMap::new();
        let Some((alert_name, params_name)) = &self.names else {
            return headers;
        };

        let message = format!("{}.{}.{}", self.application_name, entity.entity_name(), action);
        if let Ok(value) = HeaderValue::from_str(&message) {
            headers.insert(alert_name.clone(), value);
        }
        headers.insert(params_name.clone(), HeaderValue::from(id));
        headers
    }
}
