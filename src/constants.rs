pub const CONFIG_DIR: &str = ".config/fieldopt";
pub const CONFIG_FILE: &str = "config.json";
pub const ENTER_INSTANCE_URL: &str = "Enter the url of the issue tracker instance: ";
pub const ENTER_EMAIL: &str = "Enter the account email (leave empty for a personal access token): ";
pub const ENTER_API_TOKEN: &str = "Enter the API token: ";
pub const COMPLETE_SETUP: &str = "To view the available commands, type: fieldopt --help";

pub const ENV_BASE_URL: &str = "FIELDOPT_BASE_URL";
pub const ENV_EMAIL: &str = "FIELDOPT_EMAIL";
pub const ENV_API_TOKEN: &str = "FIELDOPT_API_TOKEN";
pub const ENV_API_VERSION: &str = "FIELDOPT_API_VERSION";

pub const DEFAULT_API_VERSION: u8 = 3;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Standard message
#[derive(Debug)]
pub enum Message {
    OptionDeleted(String, String),
    ConfigSaved(String),
    OptionsFetched(usize, i64),
}

impl Message {
    pub fn to_formatted_string(&self) -> String {
        match self {
            Message::OptionDeleted(option_id, context_id) => format!(
                "Option {} deleted from context {}",
                option_id, context_id
            ),
            Message::ConfigSaved(path) => format!("Config saved to {}", path),
            Message::OptionsFetched(count, total) => {
                format!("Fetched {} of {} options", count, total)
            }
        }
    }
}
