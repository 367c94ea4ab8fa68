use serde::{Deserialize, Serialize};

use super::Timestamp;

/// Filters accepted by every list endpoint.
///
/// Unset fields are left out of the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after_id: Option<String>,
    #[serde(default, skip_serializing_if = "Timestamp::is_unset")]
    pub start_datetime: Timestamp,
    #[serde(default, skip_serializing_if = "Timestamp::is_unset")]
    pub end_datetime: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl ListOptions {
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            page_size: Some(page_size),
            ..Default::default()
        }
    }

    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(id) = &self.before_id {
            query.push(("before_id".to_string(), id.clone()));
        }
        if let Some(id) = &self.after_id {
            query.push(("after_id".to_string(), id.clone()));
        }
        if !self.start_datetime.is_unset() {
            query.push(("start_datetime".to_string(), self.start_datetime.format()));
        }
        if !self.end_datetime.is_unset() {
            query.push(("end_datetime".to_string(), self.end_datetime.format()));
        }
        if let Some(ps) = self.page_size {
            query.push(("page_size".to_string(), ps.to_string()));
        }
        query
    }
}
