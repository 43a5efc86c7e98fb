use super::to_output;
use crate::cli_app::{CreateArgs, DeleteArgs, ListArgs, UpdateArgs};
use crate::constants::{Message, DEFAULT_PAGE_SIZE};
use crate::external_api::field_api::models::context_option::ContextOption;
use crate::external_api::field_api::models::context_options::ContextOptions;
use crate::external_api::field_api::models::list_options::ListOptions;
use crate::external_api::field_api::FieldOptionApi;
use crate::external_api::ApiError;
use tracing::info;

/// List one page, or every page from `--start-at` on with `--all`
pub async fn list_options(args: &ListArgs, api: &FieldOptionApi) -> Result<String, ApiError> {
    let (field_id, context_id) = (&args.context.field_id, &args.context.context_id);
    let mut list_options = ListOptions {
        option_id: args.option_id.clone(),
        only_options: args.only_options,
        start_at: args.start_at,
        max_results: args.max_results,
    };
    if args.all {
        if list_options.max_results == 0 {
            list_options.max_results = DEFAULT_PAGE_SIZE;
        }
        let all = api.list_all_context_options(field_id, context_id, &list_options).await?;
        info!("{}", Message::OptionsFetched(all.values.len(), all.total).to_formatted_string());
        return to_output(&all);
    }

    let response = api.list_context_options(field_id, context_id, Some(&list_options)).await?;
    to_output(&response.data)
}

/// Create one option per `--value`
pub async fn create_options(args: &CreateArgs, api: &FieldOptionApi) -> Result<String, ApiError> {
    let options = args
        .value
        .iter()
        .map(|value| {
            let option = ContextOption::new(value).disabled(args.disabled);
            match &args.parent_option_id {
                Some(parent) => option.with_option_id(parent),
                None => option,
            }
        })
        .collect();
    let response = api
        .create_context_options(&args.context.field_id, &args.context.context_id, &ContextOptions::new(options))
        .await?;
    to_output(&response.data)
}

pub async fn update_option(args: &UpdateArgs, api: &FieldOptionApi) -> Result<String, ApiError> {
    if args.value.is_none() && !args.disabled {
        return Err(ApiError::NothingToUpdate);
    }
    let option = ContextOption::new(args.value.as_deref().unwrap_or_default())
        .with_id(&args.option_id)
        .disabled(args.disabled);
    let response = api
        .update_context_options(&args.context.field_id, &args.context.context_id, &ContextOptions::new(vec![option]))
        .await?;
    to_output(&response.data)
}

pub async fn delete_option(args: &DeleteArgs, api: &FieldOptionApi) -> Result<String, ApiError> {
    api.delete_context_option(&args.context.field_id, &args.context.context_id, &args.option_id)
        .await?;
    Ok(Message::OptionDeleted(args.option_id.clone(), args.context.context_id.clone()).to_formatted_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli_app::ContextArgs;
    use mockito::{Matcher, Server};
    use serde_json::json;

    const OPTIONS_PATH: &str = "/rest/api/3/field/customfield_100/context/10001/option";

    fn context() -> ContextArgs {
        ContextArgs { field_id: "customfield_100".to_string(), context_id: "10001".to_string() }
    }

    fn list_args(all: bool, max_results: u32) -> ListArgs {
        ListArgs {
            context: context(),
            start_at: 0,
            max_results,
            option_id: None,
            only_options: false,
            all,
        }
    }

    #[tokio::test]
    async fn test_list_single_page() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", OPTIONS_PATH)
            .match_query(Matcher::UrlEncoded("maxResults".into(), "50".into()))
            .with_status(200)
            .with_body(r#"{"isLast":true,"startsAt":0,"total":1,"values":[{"id":"1","value":"a"}]}"#)
            .create_async()
            .await;

        let output = list_options(&list_args(false, 50), &FieldOptionApi::mock(&server.url())).await.unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed["values"][0]["value"], "a");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_all_uses_default_page_size() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", OPTIONS_PATH)
            .match_query(Matcher::UrlEncoded("maxResults".into(), DEFAULT_PAGE_SIZE.to_string()))
            .with_status(200)
            .with_body(r#"{"isLast":true,"startsAt":0,"total":2,"values":[{"value":"a"},{"value":"b"}]}"#)
            .create_async()
            .await;

        let output = list_options(&list_args(true, 0), &FieldOptionApi::mock(&server.url())).await.unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed["values"].as_array().unwrap().len(), 2);
        assert_eq!(printed["isLast"], true);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_list_all_sends_filters() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", OPTIONS_PATH)
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("optionId".into(), "10000".into()),
                Matcher::UrlEncoded("onlyOptions".into(), "true".into()),
                Matcher::UrlEncoded("startAt".into(), "3".into()),
                Matcher::UrlEncoded("maxResults".into(), DEFAULT_PAGE_SIZE.to_string()),
            ]))
            .with_status(200)
            .with_body(r#"{"isLast":true,"startsAt":3,"total":4,"values":[{"value":"d"}]}"#)
            .create_async()
            .await;

        let args = ListArgs {
            start_at: 3,
            option_id: Some("10000".to_string()),
            only_options: true,
            ..list_args(true, 0)
        };
        let output = list_options(&args, &FieldOptionApi::mock(&server.url())).await.unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed["values"][0]["value"], "d");
        assert_eq!(printed["startsAt"], 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_create_cascading_options() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", OPTIONS_PATH)
            .match_body(Matcher::Json(json!({"options": [
                {"value": "Branch A", "optionId": "10000"},
                {"value": "Branch B", "optionId": "10000"}
            ]})))
            .with_status(200)
            .with_body(r#"{"options":[{"id":"2","value":"Branch A","optionId":"10000"},{"id":"3","value":"Branch B","optionId":"10000"}]}"#)
            .create_async()
            .await;

        let args = CreateArgs {
            context: context(),
            value: vec!["Branch A".to_string(), "Branch B".to_string()],
            parent_option_id: Some("10000".to_string()),
            disabled: false,
        };
        let output = create_options(&args, &FieldOptionApi::mock(&server.url())).await.unwrap();

        let printed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(printed["options"][1]["id"], "3");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_disable_only() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", OPTIONS_PATH)
            .match_body(Matcher::Json(json!({"options": [{"id": "10", "disabled": true}]})))
            .with_status(200)
            .with_body(r#"{"options":[{"id":"10","value":"a","disabled":true}]}"#)
            .create_async()
            .await;

        let args = UpdateArgs { context: context(), option_id: "10".to_string(), value: None, disabled: true };
        update_option(&args, &FieldOptionApi::mock(&server.url())).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_update_nothing_to_update() {
        let args = UpdateArgs { context: context(), option_id: "10".to_string(), value: None, disabled: false };
        let result = update_option(&args, &FieldOptionApi::mock("http://127.0.0.1:1")).await;
        assert!(matches!(result, Err(ApiError::NothingToUpdate)));
    }

    #[tokio::test]
    async fn test_delete_prints_message() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", format!("{OPTIONS_PATH}/10").as_str())
            .with_status(204)
            .create_async()
            .await;

        let args = DeleteArgs { context: context(), option_id: "10".to_string() };
        let output = delete_option(&args, &FieldOptionApi::mock(&server.url())).await.unwrap();

        assert_eq!(output, "Option 10 deleted from context 10001");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_option_in_use() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("DELETE", format!("{OPTIONS_PATH}/10").as_str())
            .with_status(400)
            .with_body(r#"{"errorMessages":["The option is in use."],"errors":{}}"#)
            .create_async()
            .await;

        let args = DeleteArgs { context: context(), option_id: "10".to_string() };
        let err = delete_option(&args, &FieldOptionApi::mock(&server.url())).await.unwrap_err();

        assert_eq!(err.to_string(), "Api error 400 Bad Request: The option is in use.");
        mock.assert_async().await;
    }
}
