use super::to_output;
use crate::cli_app::GetOptionArgs;
use crate::external_api::field_api::FieldOptionApi;
use crate::external_api::ApiError;

/// Get custom field option by id
pub async fn get_option(args: &GetOptionArgs, api: &FieldOptionApi) -> Result<String, ApiError> {
    let response = api.get_custom_field_option(&args.field_id).await?;
    to_output(&response.data)
}
