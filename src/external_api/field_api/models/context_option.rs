/// Option scoped to one custom field context
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContextOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Parent option of a cascading option
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option_id: Option<String>,
    // false is never sent, the server keeps the current state
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_uri: Option<String>,
}

impl ContextOption {
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
            ..Self::default()
        }
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    pub fn with_option_id(mut self, option_id: &str) -> Self {
        self.option_id = Some(option_id.to_string());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_new_option_only_value() {
        let value = serde_json::to_value(ContextOption::new("Scranton")).unwrap();
        assert_eq!(value, json!({"value": "Scranton"}));
    }

    #[test]
    fn test_serialize_cascading_disabled_option() {
        let option = ContextOption::new("Branch")
            .with_id("10002")
            .with_option_id("10001")
            .disabled(true);
        let value = serde_json::to_value(option).unwrap();
        assert_eq!(
            value,
            json!({"id": "10002", "value": "Branch", "optionId": "10001", "disabled": true})
        );
    }

    #[test]
    fn test_deserialize_full_option() {
        let option: ContextOption = serde_json::from_value(json!({
            "id": "10001",
            "value": "New York",
            "optionId": "10000",
            "disabled": true,
            "self": "https://example.atlassian.net/rest/api/3/customFieldOption/10001"
        }))
        .unwrap();
        assert_eq!(option.id.as_deref(), Some("10001"));
        assert_eq!(option.option_id.as_deref(), Some("10000"));
        assert!(option.disabled);
        assert!(option.self_uri.is_some());
    }
}
