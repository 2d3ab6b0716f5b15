use crate::error::{CoreError, CoreResult};
use crate::materials::Material;
use crate::scoring::{EthicalSourcing, PackagingImpact, Recyclability};
use serde::Serialize;
use serde_json::Value;

pub const NO_INPUT_MESSAGE: &str = "No input provided";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemInput {
    pub item_name: String,
    pub item_description: String,
}

impl ItemInput {
    pub fn new(item_name: impl Into<String>, item_description: impl Into<String>) -> Self {
        Self {
            item_name: item_name.into(),
            item_description: item_description.into(),
        }
    }

    /// Reads the two consulted fields from a JSON object; everything else is ignored.
    pub fn from_value(v: &Value) -> CoreResult<Self> {
        let obj = v.as_object().ok_or_else(|| {
            CoreError::InvalidInput(format!(
                "expected a JSON object, got {}",
                json_type_name(v)
            ))
        })?;
        Ok(Self {
            item_name: text_field(obj.get("item_name")),
            item_description: text_field(obj.get("item_description")),
        })
    }
}

// Missing and null read as empty; other scalars keep their JSON text.
fn text_field(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn json_type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EcoSummary {
    pub materials: Vec<Material>,
    pub packaging_impact: PackagingImpact,
    pub ethical_sourcing: EthicalSourcing,
    pub recyclability: Recyclability,
}

/// The one line written to stdout.
///
/// `NoInput` deliberately has no `success` key; callers tell it apart from
/// `Failure` by that absence.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Envelope {
    NoInput { error: String },
    Success { success: bool, data: EcoSummary },
    Failure { success: bool, error: String },
}

impl Envelope {
    pub fn no_input() -> Self {
        Envelope::NoInput {
            error: NO_INPUT_MESSAGE.to_string(),
        }
    }

    pub fn success(data: EcoSummary) -> Self {
        Envelope::Success {
            success: true,
            data,
        }
    }

    pub fn failure(err: &CoreError) -> Self {
        Envelope::Failure {
            success: false,
            error: err.to_string(),
        }
    }

    pub fn to_value(&self) -> Value {
        serde_json::to_value(self)
            .unwrap_or_else(|e| serde_json::json!({"success": false, "error": e.to_string()}))
    }

    /// Compact single-line JSON in declaration order, no trailing newline.
    pub fn to_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            serde_json::json!({"success": false, "error": e.to_string()}).to_string()
        })
    }
}
