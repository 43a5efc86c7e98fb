pub mod context_option;
pub mod custom_field_option;

use crate::external_api::ApiError;

/// Pretty JSON for stdout
pub(crate) fn to_output<T: serde::Serialize>(value: &T) -> Result<String, ApiError> {
    serde_json::to_string_pretty(value).map_err(ApiError::Encode)
}
