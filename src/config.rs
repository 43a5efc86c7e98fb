use directories::UserDirs;
use regex::Regex;
use serde::Deserialize;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::constants::{
    COMPLETE_SETUP, CONFIG_DIR, CONFIG_FILE, DEFAULT_API_VERSION, DEFAULT_TIMEOUT_SECS, ENTER_API_TOKEN,
    ENTER_EMAIL, ENTER_INSTANCE_URL, ENV_API_TOKEN, ENV_API_VERSION, ENV_BASE_URL, ENV_EMAIL,
};
use crate::external_api::field_api::{ApiVersion, FieldOptionApi};
use crate::external_api::{ApiError, Auth};

fn default_api_version() -> u8 {
    DEFAULT_API_VERSION
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Instance url
    pub base_url: String,
    /// Account email, basic auth is used when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// API token or personal access token
    pub api_token: String,
    /// 2 or 3
    #[serde(default = "default_api_version")]
    pub api_version: u8,
    /// Transport timeout of a single request
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Config {
    /// Создаем конфиг приложения
    pub fn new<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Self, ApiError> {
        write!(output, "{}", ENTER_INSTANCE_URL)?;
        output.flush()?;
        let base_url = validate_url(read_line(&mut input)?)?;

        write!(output, "{}", ENTER_EMAIL)?;
        output.flush()?;
        let email = read_line(&mut input)?;

        write!(output, "{}", ENTER_API_TOKEN)?;
        output.flush()?;
        let api_token = validate_api_token(read_line(&mut input)?)?;
        writeln!(output, "{}", COMPLETE_SETUP)?;

        Ok(Self {
            base_url,
            email: Some(email).filter(|email| !email.is_empty()),
            api_token,
            api_version: DEFAULT_API_VERSION,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Получаем данные из конфига приложения
    ///
    /// Параметры:
    /// - path_to_config: путь до конифга приложения
    pub fn get_config(path_to_config: &Path) -> Result<Self, ApiError> {
        let file = File::open(path_to_config)?;
        let config: Self = serde_json::from_reader(file)?;
        Ok(config)
    }

    /// Config from environment variables only, when url and token are both set
    pub fn from_env<F: Fn(&str) -> Option<String>>(var: F) -> Option<Self> {
        let base_url = var(ENV_BASE_URL)?;
        let api_token = var(ENV_API_TOKEN)?;
        Some(Self {
            base_url,
            email: None,
            api_token,
            api_version: DEFAULT_API_VERSION,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        })
    }

    /// Environment variables win over the file
    pub fn with_env_overrides<F: Fn(&str) -> Option<String>>(mut self, var: F) -> Result<Self, ApiError> {
        if let Some(base_url) = var(ENV_BASE_URL) {
            self.base_url = base_url;
        }
        if let Some(email) = var(ENV_EMAIL) {
            self.email = Some(email).filter(|email| !email.is_empty());
        }
        if let Some(api_token) = var(ENV_API_TOKEN) {
            self.api_token = api_token;
        }
        if let Some(api_version) = var(ENV_API_VERSION) {
            self.api_version = api_version
                .trim()
                .parse()
                .map_err(|_| ApiError::InvalidApiVersion(api_version.clone()))?;
        }
        Ok(self)
    }

    pub fn validate(mut self) -> Result<Self, ApiError> {
        self.base_url = validate_url(self.base_url)?;
        self.api_token = validate_api_token(self.api_token)?;
        ApiVersion::try_from(self.api_version)?;
        Ok(self)
    }

    pub fn save(&self, path_to_config: &Path) -> Result<(), ApiError> {
        if let Some(parent) = path_to_config.parent() {
            fs::create_dir_all(parent).map_err(|_| ApiError::CantCreateConfig)?;
        }
        let content = serde_json::to_string_pretty(self).map_err(ApiError::Encode)?;
        fs::write(path_to_config, content).map_err(|_| ApiError::CantCreateConfig)
    }

    /// ~/.config/fieldopt/config.json
    pub fn default_path() -> Result<PathBuf, ApiError> {
        UserDirs::new()
            .ok_or(ApiError::NotFoundUserDir)
            .map(|user_dirs| user_dirs.home_dir().join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// File, then environment, then interactive setup which is saved to `path_to_config`
    pub fn load_or_create<R: BufRead, W: Write, F: Fn(&str) -> Option<String>>(
        path_to_config: &Path,
        input: R,
        output: W,
        var: F,
    ) -> Result<Self, ApiError> {
        let config = if path_to_config.exists() {
            debug!(path = %path_to_config.display(), "reading config");
            Self::get_config(path_to_config)?
        } else if let Some(config) = Self::from_env(&var) {
            debug!("config taken from environment");
            config
        } else {
            let config = Self::new(input, output)?.validate()?;
            config.save(path_to_config)?;
            config
        };
        config.with_env_overrides(&var)?.validate()
    }

    pub fn auth(&self) -> Auth {
        match &self.email {
            Some(email) => Auth::Basic { email: email.clone(), api_token: self.api_token.clone() },
            None => Auth::Bearer(self.api_token.clone()),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn build_api(&self) -> Result<FieldOptionApi, ApiError> {
        let api_version = ApiVersion::try_from(self.api_version)?;
        FieldOptionApi::new(&self.base_url, &self.auth(), api_version, Some(self.timeout()))
    }
}

/// Введенная строка должна быть URL
fn validate_url(mut value: String) -> Result<String, ApiError> {
    let regex = Regex::new(r"^https?://.+$").map_err(|_| ApiError::InvalidUrl)?;
    if !regex.is_match(&value) {
        return Err(ApiError::InvalidUrl);
    }
    if value.ends_with('/') {
        value.pop();
    }
    Ok(value)
}

/// Валидация параметра api_token
fn validate_api_token(value: String) -> Result<String, ApiError> {
    let value = value.trim().to_string();
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(ApiError::InvalidToken);
    }
    Ok(value)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String, ApiError> {
    let mut input_value = String::new();
    input.read_line(&mut input_value)?;
    Ok(input_value.trim().to_string())
}
