pub mod cli_app;
pub mod command_logic;
pub mod config;
pub mod constants;
pub mod external_api;

pub use external_api::field_api::models::context_option::ContextOption;
pub use external_api::field_api::models::context_option_list::ContextOptionList;
pub use external_api::field_api::models::context_options::ContextOptions;
pub use external_api::field_api::models::custom_field_option::CustomFieldOption;
pub use external_api::field_api::models::list_options::ListOptions;
pub use external_api::field_api::{ApiVersion, FieldOptionApi};
pub use external_api::{ApiError, ApiResponse, Auth, BaseApiClient, RawResponse};
