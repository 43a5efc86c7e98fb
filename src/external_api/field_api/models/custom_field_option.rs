/// Single labeled option value of a custom field
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldOption {
    #[serde(rename = "self", default, skip_serializing_if = "Option::is_none")]
    pub self_uri: Option<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}
