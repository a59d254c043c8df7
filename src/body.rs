use serde_json::Value;

/// Request payload handed back alongside a non-preflight decision.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(Value),
    /// Body kept verbatim: not declared as JSON, or failed to parse.
    Raw(String),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(body) => Some(body),
            Self::Json(_) => None,
        }
    }
}

/// Interprets `body`. Absent or empty bodies yield `Ok(None)`; a JSON body that
/// does not parse yields the parser error next to the untouched raw text.
pub(crate) fn read_body(
    body: Option<&str>,
    json: bool,
) -> Result<Option<Payload>, (Payload, serde_json::Error)> {
    let Some(body) = body.filter(|body| !body.is_empty()) else {
        return Ok(None);
    };

    if !json {
        return Ok(Some(Payload::Raw(body.to_string())));
    }

    serde_json::from_str(body)
        .map(|value| Some(Payload::Json(value)))
        .map_err(|err| (Payload::Raw(body.to_string()), err))
}

#[cfg(test)]
#[path = "body_test.rs"]
mod body_test;
