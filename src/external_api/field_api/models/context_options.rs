use super::context_option::ContextOption;

/// Batch payload of create and update.
///
/// `options` is always serialized, an empty batch is sent as `{"options":[]}`.
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
pub struct ContextOptions {
    #[serde(default)]
    pub options: Vec<ContextOption>,
}

impl ContextOptions {
    pub fn new(options: Vec<ContextOption>) -> Self {
        Self { options }
    }
}
