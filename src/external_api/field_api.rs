pub mod models;

use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use super::{ApiError, ApiResponse, Auth, BaseApiClient, RawResponse};
use models::context_option_list::ContextOptionList;
use models::context_options::ContextOptions;
use models::custom_field_option::CustomFieldOption;
use models::list_options::ListOptions;

/// Upper bound of pages fetched by [`FieldOptionApi::list_all_context_options`]
pub const MAX_PAGES: usize = 100;

/// REST API revision, selects the `rest/api/{n}` prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiVersion {
    V2,
    #[default]
    V3,
}

impl ApiVersion {
    fn prefix(&self) -> [&'static str; 3] {
        match self {
            ApiVersion::V2 => ["rest", "api", "2"],
            ApiVersion::V3 => ["rest", "api", "3"],
        }
    }
}

impl TryFrom<u8> for ApiVersion {
    type Error = ApiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            2 => Ok(ApiVersion::V2),
            3 => Ok(ApiVersion::V3),
            other => Err(ApiError::InvalidApiVersion(other.to_string())),
        }
    }
}

fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, ApiError> {
    if value.is_empty() {
        return Err(ApiError::EmptySegment(name));
    }
    Ok(value)
}

/// Custom field and context option endpoints
#[derive(Debug, Clone)]
pub struct FieldOptionApi {
    pub client: BaseApiClient,
    api_version: ApiVersion,
}

impl FieldOptionApi {
    pub fn new(
        base_url: &str,
        auth: &Auth,
        api_version: ApiVersion,
        timeout: Option<Duration>,
    ) -> Result<Self, ApiError> {
        let client = BaseApiClient::new(base_url, auth, timeout)?;
        Ok(Self { client, api_version })
    }

    /// Wrap an already configured base client, e.g. one built with
    /// [`BaseApiClient::from_client`] around a caller's `reqwest::Client`.
    pub fn with_client(client: BaseApiClient, api_version: ApiVersion) -> Self {
        Self { client, api_version }
    }

    #[cfg(test)]
    pub fn mock(base_url: &str) -> Self {
        let auth = Auth::Basic { email: "bot@example.com".to_string(), api_token: "token".to_string() };
        Self::new(base_url, &auth, ApiVersion::V3, Some(Duration::from_secs(5))).unwrap()
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    fn endpoint(&self, segments: &[&str], query: &[(&str, String)]) -> Result<Url, ApiError> {
        let mut path: Vec<&str> = self.api_version.prefix().to_vec();
        path.extend_from_slice(segments);
        self.client.build_url(&path, query)
    }

    /// `customFieldOption/{fieldID}`
    pub fn custom_field_option_url(&self, field_id: &str) -> Result<Url, ApiError> {
        self.endpoint(&["customFieldOption", require("field id", field_id)?], &[])
    }

    /// `field/{fieldID}/context/{contextID}/option[?query]`
    pub fn context_options_url(
        &self,
        field_id: &str,
        context_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Url, ApiError> {
        let query = options.map(ListOptions::to_query).unwrap_or_default();
        self.endpoint(
            &["field", require("field id", field_id)?, "context", require("context id", context_id)?, "option"],
            &query,
        )
    }

    /// `field/{fieldID}/context/{contextID}/option/{optionID}`
    pub fn context_option_url(&self, field_id: &str, context_id: &str, option_id: &str) -> Result<Url, ApiError> {
        self.endpoint(
            &[
                "field",
                require("field id", field_id)?,
                "context",
                require("context id", context_id)?,
                "option",
                require("option id", option_id)?,
            ],
            &[],
        )
    }

    pub async fn get_custom_field_option(&self, field_id: &str) -> Result<ApiResponse<CustomFieldOption>, ApiError> {
        let url = self.custom_field_option_url(field_id)?;
        self.client.get::<CustomFieldOption>(url).await
    }

    pub async fn list_context_options(
        &self,
        field_id: &str,
        context_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<ApiResponse<ContextOptionList>, ApiError> {
        let url = self.context_options_url(field_id, context_id, options)?;
        self.client.get::<ContextOptionList>(url).await
    }

    /// Follow a `nextPage` link returned by the server.
    ///
    /// Only links on the configured instance are requested.
    pub async fn list_context_options_page(&self, next_page: &str) -> Result<ApiResponse<ContextOptionList>, ApiError> {
        let url = Url::parse(next_page).map_err(|e| ApiError::Parse(e.to_string()))?;
        if !self.client.is_same_origin(&url) {
            return Err(ApiError::ForeignNextPage(next_page.to_string()));
        }
        self.client.get::<ContextOptionList>(url).await
    }

    /// Every option of the context from `options.start_at` on, in server order.
    ///
    /// `option_id` and `only_options` are sent with every page request.
    pub async fn list_all_context_options(
        &self,
        field_id: &str,
        context_id: &str,
        options: &ListOptions,
    ) -> Result<ContextOptionList, ApiError> {
        let mut list_options = options.clone();
        let mut page = self.list_context_options(field_id, context_id, Some(&list_options)).await?.data;
        let mut all = ContextOptionList {
            starts_at: page.starts_at,
            ..ContextOptionList::default()
        };

        for page_number in 1.. {
            let more = page.has_more() && !page.values.is_empty() && page_number < MAX_PAGES;
            let next_page = page.next_page_url().map(str::to_string);
            let next_start_at = page.next_start_at();
            all.total = page.total;
            all.max_results = page.max_results;
            all.values.append(&mut page.values);
            if !more {
                all.is_last = page.is_last;
                break;
            }

            debug!(page_number, next_start_at, "fetching next page of context options");
            page = match next_page {
                Some(next_page) => self.list_context_options_page(&next_page).await?.data,
                None => {
                    list_options.start_at = u32::try_from(next_start_at)
                        .map_err(|_| ApiError::Parse(format!("startAt {next_start_at} out of range")))?;
                    self.list_context_options(field_id, context_id, Some(&list_options)).await?.data
                }
            };
        }
        Ok(all)
    }

    pub async fn create_context_options(
        &self,
        field_id: &str,
        context_id: &str,
        options: &ContextOptions,
    ) -> Result<ApiResponse<ContextOptions>, ApiError> {
        let url = self.context_options_url(field_id, context_id, None)?;
        self.client.post::<ContextOptions, _>(url, options).await
    }

    pub async fn update_context_options(
        &self,
        field_id: &str,
        context_id: &str,
        options: &ContextOptions,
    ) -> Result<ApiResponse<ContextOptions>, ApiError> {
        let url = self.context_options_url(field_id, context_id, None)?;
        self.client.put::<ContextOptions, _>(url, options).await
    }

    pub async fn delete_context_option(
        &self,
        field_id: &str,
        context_id: &str,
        option_id: &str,
    ) -> Result<RawResponse, ApiError> {
        let url = self.context_option_url(field_id, context_id, option_id)?;
        self.client.delete(url).await
    }
}
