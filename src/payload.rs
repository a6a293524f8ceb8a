//! Payload normalization: turns a loosely-shaped payload into a canonical
//! `{body, url}` pair.
//!
//! A payload is either a flat map of scalar fields (the whole map is the
//! request body and the URL is left untouched) or an explicit
//! `{params, body}` split, where `params` become URL query parameters
//! (appended only when non-empty) and `body` is returned separately.
//! Anything malformed degrades to whole-payload-as-body; normalization
//! never fails.

use serde_json::{Map, Value};

/// A map of field name to scalar JSON value.
pub type Fields = Map<String, Value>;

/// Input payload for a verb helper.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// The whole map is the request body.
    Flat(Fields),
    /// `params` go into the URL query string, `body` into the request body.
    Split { params: Fields, body: Fields },
}

impl Default for Payload {
    fn default() -> Self {
        Payload::Flat(Fields::new())
    }
}

impl From<Fields> for Payload {
    fn from(fields: Fields) -> Self {
        Payload::Flat(fields)
    }
}

/// A payload resolved against a target URL.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedRequest {
    /// Target URL, with query parameters appended when the payload carried
    /// non-empty `params`.
    pub url: String,
    /// Request body fields.
    pub body: Fields,
}

impl NormalizedRequest {
    /// The body serialized as a JSON string, as sent by write verbs.
    pub fn body_json(&self) -> String {
        Value::Object(self.body.clone()).to_string()
    }
}

impl Payload {
    pub fn empty() -> Self {
        Payload::default()
    }

    /// Interprets a free-form JSON value as a payload.
    ///
    /// An object exposing both a `params` key and an object-valued `body`
    /// key is treated as an explicit split; `params` is honored only when it
    /// is itself an object. Every other shape (including non-objects) is
    /// treated entirely as body.
    pub fn from_json(value: Value) -> Payload {
        let Value::Object(map) = value else {
            return Payload::default();
        };

        let has_both = map.contains_key("params") && map.contains_key("body");
        if !has_both {
            return Payload::Flat(map);
        }

        let params = match map.get("params") {
            Some(Value::Object(params)) => params.clone(),
            _ => Fields::new(),
        };
        let body = match map.get("body") {
            Some(Value::Object(body)) => Some(body.clone()),
            _ => None,
        };
        match body {
            Some(body) => Payload::Split { params, body },
            // a non-object body degrades to the whole payload as body
            None => Payload::Split { params, body: map },
        }
    }

    /// Resolves the payload against `url`, appending query parameters when
    /// the payload carries non-empty `params`.
    pub fn normalize(&self, url: &str) -> NormalizedRequest {
        let (params, body) = match self {
            Payload::Flat(body) => (None, body),
            Payload::Split { params, body } => (Some(params), body),
        };

        let url = match params {
            Some(params) if !params.is_empty() => {
                let mut serializer = url::form_urlencoded::Serializer::new(String::new());
                for (name, value) in params {
                    serializer.append_pair(name, &scalar_to_string(value));
                }
                format!("{url}?{}", serializer.finish())
            }
            _ => url.to_string(),
        };

        NormalizedRequest {
            url,
            body: body.clone(),
        }
    }
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
