use reqwest::Client;
use serde::Deserialize;
use crate::errors::YouTubeError;
use super::send_request;

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    items: Option<Vec<ApiPlaylistItem>>
}

#[derive(Debug, Deserialize)]
struct ApiPlaylistItem {
    #[serde(rename = "contentDetails")]
    content_details: Option<ItemContentDetails>,
}

#[derive(Debug, Deserialize)]
struct ItemContentDetails {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Fetches one page of a playlist, returning its video ids in playlist order.
pub async fn get_playlist_items(
    client: &Client,
    base_url: &str,
    playlist_id: &str,
    api_key: &str,
    page_token: Option<&str>,
    max_results: u32,
) -> Result<(Vec<String>, Option<String>), YouTubeError> {
    let mut url = format!(
        "{}/playlistItems?playlistId={}&part=contentDetails&maxResults={}",
        base_url,
        playlist_id,
        max_results
    );

    if let Some(token) = page_token {
        url.push_str(&format!("&pageToken={}", token));
    }

    tracing::debug!(playlist_id, ?page_token, "fetching playlist items page");

    let api_response: ApiResponse = send_request(
        client,
        &url,
        api_key,
        "nextPageToken,items(contentDetails.videoId)",
    ).await?;

    let video_ids = api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            item.content_details
                .and_then(|details| details.video_id)
                .ok_or_else(|| YouTubeError::MalformedResponse(format!(
                    "item in playlist {} is missing contentDetails.videoId",
                    playlist_id
                )))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((video_ids, api_response.next_page_token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::env;
    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::{json, Value};
    use crate::youtube::test_server;

    async fn items_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        assert_eq!(params["playlistId"], "PL1");
        assert_eq!(params["part"], "contentDetails");

        if params.get("pageToken").is_some() {
            Json(json!({"items": [{"contentDetails": {"videoId": "vid3"}}]}))
        } else {
            Json(json!({
                "nextPageToken": "EAAaBlBUOkNBVQ",
                "items": [
                    {"contentDetails": {"videoId": "vid1"}},
                    {"contentDetails": {"videoId": "vid2"}}
                ]
            }))
        }
    }

    #[tokio::test]
    async fn test_get_playlist_items() {
        let base_url = test_server::serve(Router::new().route("/playlistItems", get(items_handler))).await;
        let client = Client::new();

        let (ids, token) = get_playlist_items(&client, &base_url, "PL1", "test-key", None, 50).await.unwrap();
        assert_eq!(ids, vec!["vid1", "vid2"]);
        assert_eq!(token.as_deref(), Some("EAAaBlBUOkNBVQ"));

        let (ids, token) = get_playlist_items(&client, &base_url, "PL1", "test-key", token.as_deref(), 50).await.unwrap();
        assert_eq!(ids, vec!["vid3"]);
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_missing_video_id_is_malformed() {
        let router = Router::new().route(
            "/playlistItems",
            get(|| async { Json(json!({"items": [{"contentDetails": {}}]})) }),
        );
        let base_url = test_server::serve(router).await;

        let result = get_playlist_items(&Client::new(), &base_url, "PL1", "test-key", None, 50).await;
        assert!(matches!(result, Err(YouTubeError::MalformedResponse(_))));
    }

    #[tokio::test]
    #[ignore = "hits the live YouTube Data API"]
    async fn test_get_playlist_items_live() {
        dotenvy::dotenv().ok();
        let api_key = env::var("API_KEY").expect("API_KEY must be set");

        let result = get_playlist_items(
            &Client::new(),
            crate::config::DEFAULT_API_BASE_URL,
            "UUwBkSWEuckW8AHZ62XcSLYw",
            &api_key,
            None,
            5,
        ).await;

        match result {
            Ok((video_ids, next_page_token)) => {
                assert_eq!(video_ids.len(), 5);
                assert!(next_page_token.is_some());
                assert_eq!(video_ids[0], "gfKpRpwHckY");
            }
            Err(e) => panic!("Expected successful response, got error: {:?}", e),
        }
    }
}
