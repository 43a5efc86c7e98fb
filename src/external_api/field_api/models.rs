pub mod context_option;
pub mod context_option_list;
pub mod context_options;
pub mod custom_field_option;
pub mod list_options;
