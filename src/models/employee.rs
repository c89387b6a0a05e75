use serde::{Deserialize, Serialize};

use crate::core::serde_utils::{id_string, opt_id_string};

/// Employee as attached to a task card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(from = "RawBubble")]
pub struct EmployeeBubble {
    pub id: Option<String>,
    pub index: Option<String>,
    pub full_name: Option<String>,
}

// The bootstrap list carries bare ids, socket payloads carry objects.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawBubble {
    Object {
        #[serde(default, deserialize_with = "opt_id_string")]
        id: Option<String>,
        #[serde(default)]
        index: Option<String>,
        #[serde(default)]
        full_name: Option<String>,
    },
    Id(#[serde(deserialize_with = "id_string")] String),
}

impl From<RawBubble> for EmployeeBubble {
    fn from(raw: RawBubble) -> Self {
        match raw {
            RawBubble::Object { id, index, full_name } => Self { id, index, full_name },
            RawBubble::Id(id) => Self {
                id: Some(id),
                ..Self::default()
            },
        }
    }
}

impl EmployeeBubble {
    pub fn label(&self) -> String {
        [&self.index, &self.full_name, &self.id]
            .into_iter()
            .flatten()
            .find(|s| !s.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}

/// Employee directory entry, as listed on the employees page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub surname: String,
    pub name: String,
    #[serde(default)]
    pub patronymic: Option<String>,
    #[serde(default, rename = "full_name")]
    pub server_full_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub hire_date: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub contacts: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        if let Some(name) = self.server_full_name.as_ref().filter(|n| !n.is_empty()) {
            return name.clone();
        }
        let mut parts = vec![self.surname.as_str(), self.name.as_str()];
        if let Some(p) = self.patronymic.as_deref().filter(|p| !p.is_empty()) {
            parts.push(p);
        }
        parts.join(" ")
    }
}
