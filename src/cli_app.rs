use clap::{Args, Parser, Subcommand};

use crate::command_logic::context_option::{create_options, delete_option, list_options, update_option};
use crate::command_logic::custom_field_option::get_option;
use crate::external_api::{field_api::FieldOptionApi, ApiError};

#[derive(Parser)]
#[command(
    name = "fieldopt",
    version = "0.1.0",
    about = "CLI for issue tracker custom field options",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    /// Print debug logs of fieldopt to stderr, on top of any RUST_LOG filter
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Get a custom field option by id
    GetOption(GetOptionArgs),
    /// List the options of a field context
    List(ListArgs),
    /// Create options in a field context
    Create(CreateArgs),
    /// Update an option of a field context
    Update(UpdateArgs),
    /// Delete an option from a field context
    Delete(DeleteArgs),
}

#[derive(Args)]
pub struct GetOptionArgs {
    /// Custom field option id
    #[arg(long, short, required = true, value_parser = validate_not_empty)]
    pub field_id: String,
}

#[derive(Args)]
pub struct ContextArgs {
    /// Custom field id, e.g. customfield_10000
    #[arg(long, short, required = true, value_parser = validate_not_empty)]
    pub field_id: String,
    /// Field context id
    #[arg(long, short, required = true, value_parser = validate_not_empty)]
    pub context_id: String,
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// Index of the first option to return, also where `--all` starts
    #[arg(long, default_value_t = 0)]
    pub start_at: u32,
    /// Page size
    #[arg(long, default_value_t = 0)]
    pub max_results: u32,
    /// Only this option and its cascading options
    #[arg(long, value_parser = validate_not_empty)]
    pub option_id: Option<String>,
    /// Skip cascading options
    #[arg(long)]
    pub only_options: bool,
    /// Fetch every page
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct CreateArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// Option value, repeat to create several options
    #[arg(long, required = true, value_parser = validate_not_empty)]
    pub value: Vec<String>,
    /// Create cascading options under this option
    #[arg(long, value_parser = validate_not_empty)]
    pub parent_option_id: Option<String>,
    /// Create the options disabled
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Args)]
pub struct UpdateArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// Option id
    #[arg(long, short, required = true, value_parser = validate_not_empty)]
    pub option_id: String,
    /// New value
    #[arg(long, value_parser = validate_not_empty)]
    pub value: Option<String>,
    /// Disable the option
    #[arg(long)]
    pub disabled: bool,
}

#[derive(Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub context: ContextArgs,
    /// Option id
    #[arg(long, short, required = true, value_parser = validate_not_empty)]
    pub option_id: String,
}

fn validate_not_empty(value: &str) -> Result<String, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::EmptySegment("argument"));
    }
    Ok(value.to_string())
}

pub async fn handle_command(cli: &Cli, api: &FieldOptionApi) -> Result<String, ApiError> {
    match &cli.command {
        Commands::GetOption(value) => get_option(value, api).await,
        Commands::List(value) => list_options(value, api).await,
        Commands::Create(value) => create_options(value, api).await,
        Commands::Update(value) => update_option(value, api).await,
        Commands::Delete(value) => delete_option(value, api).await,
    }
}
