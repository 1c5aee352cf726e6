pub mod playlist_items;
pub mod playlists;
pub mod videos;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use crate::errors::YouTubeError;
use crate::pagination::Page;
use self::playlists::Playlist;
use self::videos::VideoResource;

/// The three list endpoints the tree builder consumes.
#[allow(async_fn_in_trait)]
pub trait YouTubeApi {
    async fn list_playlists(
        &self,
        channel_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<Page<Playlist>, YouTubeError>;

    /// Returns the video ids of one page of a playlist.
    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<Page<String>, YouTubeError>;

    async fn list_videos(&self, video_ids: &[String]) -> Result<Vec<VideoResource>, YouTubeError>;
}

pub struct YouTubeClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl YouTubeClient {
    pub fn new(client: Client, api_key: &str, base_url: &str) -> Self {
        YouTubeClient {
            client,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl YouTubeApi for YouTubeClient {
    async fn list_playlists(
        &self,
        channel_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<Page<Playlist>, YouTubeError> {
        let (items, next_page_token) = playlists::get_playlists(
            &self.client,
            &self.base_url,
            channel_id,
            &self.api_key,
            page_token.as_deref(),
            max_results,
        ).await?;

        Ok(Page { items, next_page_token })
    }

    async fn list_playlist_items(
        &self,
        playlist_id: &str,
        page_token: Option<String>,
        max_results: u32,
    ) -> Result<Page<String>, YouTubeError> {
        let (items, next_page_token) = playlist_items::get_playlist_items(
            &self.client,
            &self.base_url,
            playlist_id,
            &self.api_key,
            page_token.as_deref(),
            max_results,
        ).await?;

        Ok(Page { items, next_page_token })
    }

    async fn list_videos(&self, video_ids: &[String]) -> Result<Vec<VideoResource>, YouTubeError> {
        videos::get_videos(&self.client, &self.base_url, video_ids, &self.api_key).await
    }
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Error,
}

#[derive(Debug, Deserialize)]
struct Error {
    message: String,
}

pub(crate) async fn send_request<T: DeserializeOwned>(
    client: &Client,
    url: &str,
    api_key: &str,
    field_mask: &str,
) -> Result<T, YouTubeError> {
    let resp = client
        .get(url)
        .header("X-Goog-Api-Key", api_key)
        .header("X-Goog-Fieldmask", field_mask)
        .send()
        .await?;

    let resp = check_status(resp).await?;

    resp.json()
        .await
        .map_err(|e| YouTubeError::MalformedResponse(e.to_string()))
}

async fn check_status(resp: Response) -> Result<Response, YouTubeError> {
    match resp.status() {
        reqwest::StatusCode::TOO_MANY_REQUESTS => Err(YouTubeError::Ratelimited),
        reqwest::StatusCode::FORBIDDEN => {
            let error_response: Option<ErrorResponse> = resp.json().await.ok();

            match error_response {
                Some(error_response) if error_response.error.message.starts_with("The request cannot be completed because you have exceeded your") => {
                    Err(YouTubeError::Ratelimited)
                }
                _ => Err(YouTubeError::Forbidden),
            }
        },
        reqwest::StatusCode::NOT_FOUND => Err(YouTubeError::NotFound),
        reqwest::StatusCode::UNAUTHORIZED => Err(YouTubeError::Unauthorized),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            Err(YouTubeError::InternalServerError)
        },
        reqwest::StatusCode::OK => Ok(resp),
        status => {
            let body = resp.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "unknown status code from YouTube API");
            Err(YouTubeError::UnknownStatusCode(status))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Json, Router};
    use serde_json::json;

    async fn client_for(status: StatusCode, body: serde_json::Value) -> YouTubeClient {
        let router = Router::new().route(
            "/playlists",
            get(move || {
                let body = body.clone();
                async move { (status, Json(body)) }
            }),
        );
        let base_url = test_server::serve(router).await;
        YouTubeClient::new(Client::new(), "test-key", &base_url)
    }

    #[tokio::test]
    async fn test_quota_exceeded_is_ratelimited() {
        let client = client_for(
            StatusCode::FORBIDDEN,
            json!({"error": {"message": "The request cannot be completed because you have exceeded your quota."}}),
        ).await;

        let result = client.list_playlists("UC1", None, 50).await;
        assert!(matches!(result, Err(YouTubeError::Ratelimited)));
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = vec![
            (StatusCode::FORBIDDEN, "forbidden"),
            (StatusCode::NOT_FOUND, "not_found"),
            (StatusCode::UNAUTHORIZED, "unauthorized"),
            (StatusCode::SERVICE_UNAVAILABLE, "internal"),
            (StatusCode::TOO_MANY_REQUESTS, "ratelimited"),
            (StatusCode::IM_A_TEAPOT, "unknown"),
        ];

        for (status, expected) in cases {
            let client = client_for(status, json!({"error": {"message": "nope"}})).await;
            let err = client.list_playlists("UC1", None, 50).await.unwrap_err();

            let kind = match err {
                YouTubeError::Forbidden => "forbidden",
                YouTubeError::NotFound => "not_found",
                YouTubeError::Unauthorized => "unauthorized",
                YouTubeError::InternalServerError => "internal",
                YouTubeError::Ratelimited => "ratelimited",
                YouTubeError::UnknownStatusCode(code) => {
                    assert_eq!(code.as_u16(), 418);
                    "unknown"
                }
                other => panic!("unexpected error for {}: {:?}", status, other),
            };
            assert_eq!(kind, expected);
        }
    }

    #[tokio::test]
    async fn test_invalid_json_is_malformed_not_network() {
        let router = Router::new().route("/playlists", get(|| async { "definitely not json" }));
        let base_url = test_server::serve(router).await;
        let client = YouTubeClient::new(Client::new(), "test-key", &base_url);

        let result = client.list_playlists("UC1", None, 50).await;
        assert!(matches!(result, Err(YouTubeError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = YouTubeClient::new(Client::new(), "test-key", &format!("http://{}", addr));
        let result = client.list_playlists("UC1", None, 50).await;
        assert!(matches!(result, Err(YouTubeError::Network(_))));
    }
}
