use serde::{Deserialize, Serialize};

/// A virtual desktop. The host owns which windows live on it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// Text shown in the group box, defaults to the name.
    #[serde(default)]
    pub label: Option<String>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }
}

/// One group per character, in order.
pub fn groups_from_chars(names: &str) -> Vec<Group> {
    names.chars().map(|c| Group::new(c.to_string())).collect()
}
