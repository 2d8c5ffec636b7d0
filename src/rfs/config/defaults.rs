use std::fmt;
use std::future::Future;

use futures::future::BoxFuture;
use futures::FutureExt;
use serde_json::Value;

use crate::rfs::error::{FilesError, Result};

use super::ConfigObject;

type ComputeFn<'a> = Box<dyn FnOnce() -> BoxFuture<'a, Result<Value>> + Send + 'a>;

/// Source of the fallback values a new config file starts from.
#[derive(Default)]
pub enum DefaultsProvider<'a> {
    /// No defaults: only the answers end up in the file.
    #[default]
    Empty,
    Object(ConfigObject),
    /// JSON text, or YAML when it does not start with `{` or `[`.
    Text(String),
    /// Called once, only when a new config file has to be created. The
    /// closure may return an object or a string holding JSON text.
    Compute(ComputeFn<'a>),
}

impl<'a> DefaultsProvider<'a> {
    pub fn compute<F, Fut>(f: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Result<Value>> + Send + 'a,
    {
        DefaultsProvider::Compute(Box::new(move || f().boxed()))
    }

    pub async fn resolve(self) -> Result<ConfigObject> {
        match self {
            DefaultsProvider::Empty => Ok(ConfigObject::new()),
            DefaultsProvider::Object(defaults) => Ok(defaults),
            DefaultsProvider::Text(text) => parse_text(&text),
            DefaultsProvider::Compute(f) => match f().await? {
                Value::Object(defaults) => Ok(defaults),
                Value::String(text) => parse_json(&text),
                other => Err(FilesError::defaults(format!(
                    "expected an object or JSON text, got {}",
                    kind(&other)
                ))),
            },
        }
    }
}

fn parse_text(text: &str) -> Result<ConfigObject> {
    let text = text.trim_start();
    // detect format the same way config files without extension hints are read
    match text.chars().next() {
        Some('{') | Some('[') => parse_json(text),
        Some(_) => {
            let value: Value = serde_yaml::from_str(text)
                .map_err(|error| FilesError::defaults(error.to_string()))?;
            into_mapping(value)
        }
        None => Err(FilesError::defaults("defaults text is empty")),
    }
}

/// Computed defaults may only hand back JSON text.
fn parse_json(text: &str) -> Result<ConfigObject> {
    if text.trim().is_empty() {
        return Err(FilesError::defaults("defaults text is empty"));
    }
    let value: Value =
        serde_json::from_str(text).map_err(|error| FilesError::defaults(error.to_string()))?;
    into_mapping(value)
}

fn into_mapping(value: Value) -> Result<ConfigObject> {
    match value {
        Value::Object(defaults) => Ok(defaults),
        other => Err(FilesError::defaults(format!(
            "defaults must be a mapping, got {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl From<ConfigObject> for DefaultsProvider<'_> {
    fn from(defaults: ConfigObject) -> Self {
        DefaultsProvider::Object(defaults)
    }
}

impl From<String> for DefaultsProvider<'_> {
    fn from(text: String) -> Self {
        DefaultsProvider::Text(text)
    }
}

impl From<&str> for DefaultsProvider<'_> {
    fn from(text: &str) -> Self {
        DefaultsProvider::Text(text.to_string())
    }
}

impl fmt::Debug for DefaultsProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultsProvider::Empty => write!(f, "Empty"),
            DefaultsProvider::Object(defaults) => f.debug_tuple("Object").field(defaults).finish(),
            DefaultsProvider::Text(text) => f.debug_tuple("Text").field(text).finish(),
            DefaultsProvider::Compute(_) => write!(f, "Compute(..)"),
        }
    }
}
