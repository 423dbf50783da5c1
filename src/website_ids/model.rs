use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Resolved configuration. Only the `websites` list is read; any other keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Configuration {
    #[serde(default)]
    pub websites: Option<Vec<WebsiteEntry>>,
}

impl Configuration {
    pub fn from_websites(websites: Vec<WebsiteEntry>) -> Self {
        Self {
            websites: Some(websites),
        }
    }
}

/// One configured website.
///
/// Entries are read structurally: anything that is not an object with a string
/// `name` becomes an entry with an empty name, which the reporter skips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WebsiteEntry {
    pub name: String,
}

impl WebsiteEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The name with surrounding whitespace removed, or `None` if nothing is left.
    pub fn trimmed_name(&self) -> Option<&str> {
        let name = self.name.trim();
        if name.is_empty() { None } else { Some(name) }
    }
}

impl From<&Value> for WebsiteEntry {
    fn from(value: &Value) -> Self {
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Self::new(name)
    }
}

impl<'de> Deserialize<'de> for WebsiteEntry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(WebsiteEntry::from(&value))
    }
}
