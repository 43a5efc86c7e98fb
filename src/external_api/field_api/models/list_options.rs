/// Query parameters of the context option list.
///
/// Zero, false and empty values are left out of the query.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ListOptions {
    pub option_id: Option<String>,
    pub only_options: bool,
    pub start_at: u32,
    pub max_results: u32,
}

impl ListOptions {
    /// Query pairs sorted by key
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(4);
        if self.max_results != 0 {
            query.push(("maxResults", self.max_results.to_string()));
        }
        if self.only_options {
            query.push(("onlyOptions", "true".to_string()));
        }
        if let Some(option_id) = self.option_id.as_deref().filter(|id| !id.is_empty()) {
            query.push(("optionId", option_id.to_string()));
        }
        if self.start_at != 0 {
            query.push(("startAt", self.start_at.to_string()));
        }
        query
    }
}
