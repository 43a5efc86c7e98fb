use super::context_option::ContextOption;

/// One page of context options.
///
/// Pagination fields are advisory, `values` keeps server order.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ContextOptionList {
    pub is_last: bool,
    pub max_results: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
    #[serde(rename = "self", skip_serializing_if = "Option::is_none")]
    pub self_uri: Option<String>,
    pub starts_at: i64,
    pub total: i64,
    pub values: Vec<ContextOption>,
}

impl ContextOptionList {
    /// `startAt` of the page after this one
    pub fn next_start_at(&self) -> i64 {
        self.starts_at + self.values.len() as i64
    }

    pub fn has_more(&self) -> bool {
        !self.is_last
    }

    /// Server provided continuation, when not blank
    pub fn next_page_url(&self) -> Option<&str> {
        self.next_page
            .as_deref()
            .map(str::trim)
            .filter(|next_page| !next_page.is_empty())
    }
}
