use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::config::CorsConfig;
use crate::constants::{defaults, env};
use crate::origin::{AllowedOrigins, OriginPattern, PatternError};
use crate::util::split_list;
use serde::Deserialize;
use thiserror::Error;

const ALLOWED_ORIGINS_KEY: &str = "allowedOrigins";
const ALLOWED_METHODS_KEY: &str = "allowedMethods";
const ALLOWED_HEADERS_KEY: &str = "allowedHeaders";
const MAX_AGE_KEY: &str = "maxAge";
const STRICT_KEY: &str = "strict";

/// Raw value of a single option, as a caller or the environment supplies it.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Bool(bool),
    Integer(u64),
    Text(String),
    List(Vec<String>),
}

impl SettingValue {
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for SettingValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SettingValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for SettingValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for SettingValue {
    fn from(value: u64) -> Self {
        Self::Integer(value)
    }
}

impl From<Vec<String>> for SettingValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for SettingValue {
    fn from(value: Vec<&str>) -> Self {
        Self::list(value)
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("option `{key}` must be {expected}")]
    InvalidSetting {
        key: &'static str,
        expected: &'static str,
    },
    #[error("option `strict` must be a boolean or \"true\"/\"false\", got {0:?}")]
    InvalidStrictFlag(String),
    #[error("allowed origin pattern {pattern:?} is invalid")]
    OriginPattern {
        pattern: String,
        #[source]
        source: PatternError,
    },
    #[error("malformed CORS options: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Partial CORS configuration: explicit caller overrides, or the
/// environment-sourced fallbacks they are layered over.
///
/// Only the five recognized keys exist; unknown keys in deserialized input
/// are discarded.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CorsOptions {
    pub allowed_origins: Option<SettingValue>,
    pub allowed_methods: Option<SettingValue>,
    pub allowed_headers: Option<SettingValue>,
    pub max_age: Option<SettingValue>,
    pub strict: Option<SettingValue>,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_origins(mut self, value: impl Into<SettingValue>) -> Self {
        self.allowed_origins = Some(value.into());
        self
    }

    pub fn allowed_methods(mut self, value: impl Into<SettingValue>) -> Self {
        self.allowed_methods = Some(value.into());
        self
    }

    pub fn allowed_headers(mut self, value: impl Into<SettingValue>) -> Self {
        self.allowed_headers = Some(value.into());
        self
    }

    pub fn max_age(mut self, value: impl Into<SettingValue>) -> Self {
        self.max_age = Some(value.into());
        self
    }

    pub fn strict(mut self, value: impl Into<SettingValue>) -> Self {
        self.strict = Some(value.into());
        self
    }

    /// Reads options from a JSON object, dropping unrecognized keys.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ValidationError> {
        Ok(Self::deserialize(value)?)
    }

    /// Snapshot of the `CORS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CorsOptions::from_env`] with a caller-supplied variable source.
    /// Unset and empty variables are treated alike.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .map(SettingValue::Text)
        };

        Self {
            allowed_origins: read(env::ALLOWED_ORIGINS),
            allowed_methods: read(env::ALLOWED_METHODS),
            allowed_headers: read(env::ALLOWED_HEADERS),
            max_age: read(env::MAX_AGE),
            strict: read(env::STRICT),
        }
    }

    /// Builds the effective configuration. Each field takes the first value
    /// present among `self`, `fallback`, and the built-in defaults.
    pub fn resolve(&self, fallback: &CorsOptions) -> Result<CorsConfig, ValidationError> {
        let allowed_origins = match pick(&self.allowed_origins, &fallback.allowed_origins) {
            Some(value) => resolve_origins(value)?,
            None => AllowedOrigins::Any,
        };
        let allowed_methods = match pick(&self.allowed_methods, &fallback.allowed_methods) {
            Some(value) => AllowedMethods::list(resolve_list(value, ALLOWED_METHODS_KEY)?),
            None => AllowedMethods::default(),
        };
        let allowed_headers = match pick(&self.allowed_headers, &fallback.allowed_headers) {
            Some(value) => AllowedHeaders::list(resolve_list(value, ALLOWED_HEADERS_KEY)?),
            None => AllowedHeaders::default(),
        };
        let max_age = match pick(&self.max_age, &fallback.max_age) {
            Some(value) => resolve_max_age(value)?,
            None => defaults::MAX_AGE.to_string(),
        };
        let strict = match pick(&self.strict, &fallback.strict) {
            Some(value) => resolve_strict(value)?,
            None => defaults::STRICT,
        };

        Ok(CorsConfig {
            allowed_origins,
            allowed_methods,
            allowed_headers,
            max_age,
            strict,
        })
    }
}

fn pick<'a>(
    own: &'a Option<SettingValue>,
    fallback: &'a Option<SettingValue>,
) -> Option<&'a SettingValue> {
    own.as_ref().or(fallback.as_ref())
}

fn resolve_origins(value: &SettingValue) -> Result<AllowedOrigins, ValidationError> {
    let entries = match value {
        SettingValue::Text(text) if text.trim() == defaults::ALLOWED_ORIGINS => {
            return Ok(AllowedOrigins::Any);
        }
        SettingValue::Text(text) => split_list(text),
        SettingValue::List(values) => values.clone(),
        _ => {
            return Err(ValidationError::InvalidSetting {
                key: ALLOWED_ORIGINS_KEY,
                expected: "\"*\" or a list of origins",
            });
        }
    };

    entries
        .into_iter()
        .map(|pattern| {
            OriginPattern::new(&pattern)
                .map_err(|source| ValidationError::OriginPattern { pattern, source })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(AllowedOrigins::List)
}

fn resolve_list(value: &SettingValue, key: &'static str) -> Result<Vec<String>, ValidationError> {
    match value {
        SettingValue::Text(text) => Ok(split_list(text)),
        SettingValue::List(values) => Ok(values.clone()),
        _ => Err(ValidationError::InvalidSetting {
            key,
            expected: "a comma-separated string or a list",
        }),
    }
}

fn resolve_max_age(value: &SettingValue) -> Result<String, ValidationError> {
    match value {
        SettingValue::Text(text) => Ok(text.clone()),
        SettingValue::Integer(seconds) => Ok(seconds.to_string()),
        _ => Err(ValidationError::InvalidSetting {
            key: MAX_AGE_KEY,
            expected: "a number of seconds",
        }),
    }
}

fn resolve_strict(value: &SettingValue) -> Result<bool, ValidationError> {
    match value {
        SettingValue::Bool(flag) => Ok(*flag),
        SettingValue::Text(text) if text == "true" => Ok(true),
        SettingValue::Text(text) if text == "false" => Ok(false),
        SettingValue::Text(text) => Err(ValidationError::InvalidStrictFlag(text.clone())),
        _ => Err(ValidationError::InvalidSetting {
            key: STRICT_KEY,
            expected: "a boolean",
        }),
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
