use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    pub id_board: String,
    pub short_url: String,
    pub id_list: String,
    #[serde(default)]
    pub id_members: Vec<String>,
    pub date_last_activity: DateTime<Utc>,
}

impl Card {
    pub fn has_member(&self, member_id: &str) -> bool {
        self.id_members.iter().any(|m| m == member_id)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub username: String,
    pub full_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Board {
    pub id: String,
    pub name: String,
}
