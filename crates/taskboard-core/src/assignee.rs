use serde::{Deserialize, Serialize};

/// A person tasks can be assigned to. Tasks embed a copy of the assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub id: String,
    pub name: String,
    pub initials: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Assignee {
    pub fn new(id: impl Into<String>, name: impl Into<String>, initials: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            initials: initials.into(),
            avatar: None,
        }
    }
}
