use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A team record as served by the backend.
///
/// The shape belongs to the API, so the record is kept as the raw JSON object
/// and passed through untouched. Accessors only read the fields the CLI
/// displays.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(transparent)]
pub struct Team(Map<String, Value>);

impl Team {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn id(&self) -> Option<i64> {
        self.get("id").and_then(Value::as_i64)
    }

    /// `name`, falling back to the backend's `full_name`.
    pub fn name(&self) -> Option<&str> {
        self.str_field("name").or_else(|| self.str_field("full_name"))
    }

    pub fn abbreviation(&self) -> Option<&str> {
        self.str_field("abbreviation")
    }

    pub fn city(&self) -> Option<&str> {
        self.str_field("city")
    }

    pub fn fields(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    fn str_field(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}
