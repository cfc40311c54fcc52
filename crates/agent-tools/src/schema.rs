//! Declarative parameter schemas for tools.
//!
//! A schema is a static table of [`ParamSpec`] entries. The registry checks
//! incoming arguments against it before a tool ever runs, so tools can assume
//! their required fields are present and correctly typed.

use serde_json::{json, Map, Value};
use thiserror::Error;

/// Primitive parameter types a tool can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    /// A JSON string.
    String,
    /// Any JSON number.
    Number,
    /// A JSON array whose elements are all strings.
    StringArray,
}

impl ParamType {
    fn expected(&self) -> &'static str {
        match self {
            ParamType::String => "expected string",
            ParamType::Number => "expected number",
            ParamType::StringArray => "expected array of strings",
        }
    }

    fn to_json_schema(self, description: Option<&str>) -> Value {
        let mut schema = match self {
            ParamType::String => json!({ "type": "string" }),
            ParamType::Number => json!({ "type": "number" }),
            ParamType::StringArray => json!({ "type": "array", "items": { "type": "string" } }),
        };
        if let (Some(desc), Some(obj)) = (description, schema.as_object_mut()) {
            obj.insert("description".to_string(), Value::String(desc.to_string()));
        }
        schema
    }
}

/// A single declared parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub ty: ParamType,
    pub required: bool,
    pub description: Option<&'static str>,
}

impl ParamSpec {
    /// Declare a required parameter.
    pub const fn required(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            required: true,
            description: None,
        }
    }

    /// Declare an optional parameter.
    pub const fn optional(name: &'static str, ty: ParamType) -> Self {
        Self {
            name,
            ty,
            required: false,
            description: None,
        }
    }

    /// Attach a human-readable description.
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Why a set of arguments was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required parameter: {0}")]
    Missing(String),

    #[error("Invalid parameter '{name}': {reason}")]
    InvalidType { name: String, reason: String },

    #[error("Unknown parameter: {0}")]
    Unknown(String),
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing(name) | ValidationError::Unknown(name) => name,
            ValidationError::InvalidType { name, .. } => name,
        }
    }
}

/// The full parameter declaration of a tool.
#[derive(Debug, Clone, Copy)]
pub struct ParamSchema {
    params: &'static [ParamSpec],
}

impl ParamSchema {
    pub const fn new(params: &'static [ParamSpec]) -> Self {
        Self { params }
    }

    /// Check `args` against the declared parameters.
    ///
    /// Required parameters must be present, every present parameter must
    /// match its declared type, and undeclared parameters are rejected.
    /// `null` is not accepted for optional parameters; omit them instead.
    pub fn validate(&self, args: &Map<String, Value>) -> Result<(), ValidationError> {
        for spec in self.params {
            match args.get(spec.name) {
                Some(value) => check_type(spec, value)?,
                None if spec.required => {
                    return Err(ValidationError::Missing(spec.name.to_string()))
                }
                None => {}
            }
        }

        if let Some(unknown) = args
            .keys()
            .find(|key| !self.params.iter().any(|spec| spec.name == key.as_str()))
        {
            return Err(ValidationError::Unknown(unknown.clone()));
        }

        Ok(())
    }

    /// Render as a JSON Schema object.
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for spec in self.params {
            properties.insert(spec.name.to_string(), spec.ty.to_json_schema(spec.description));
            if spec.required {
                required.push(Value::String(spec.name.to_string()));
            }
        }

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

fn check_type(spec: &ParamSpec, value: &Value) -> Result<(), ValidationError> {
    let invalid = |name: String| ValidationError::InvalidType {
        name,
        reason: spec.ty.expected().to_string(),
    };

    match spec.ty {
        ParamType::String if value.is_string() => Ok(()),
        ParamType::Number if value.is_number() => Ok(()),
        ParamType::StringArray => {
            let items = value.as_array().ok_or_else(|| invalid(spec.name.to_string()))?;
            match items.iter().position(|item| !item.is_string()) {
                Some(index) => Err(ValidationError::InvalidType {
                    name: format!("{}[{}]", spec.name, index),
                    reason: "expected string".to_string(),
                }),
                None => Ok(()),
            }
        }
        _ => Err(invalid(spec.name.to_string())),
    }
}
