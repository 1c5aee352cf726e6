use reqwest::Client;
use serde::Deserialize;
use crate::errors::YouTubeError;
use super::send_request;

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(rename = "nextPageToken")]
    next_page_token: Option<String>,
    items: Option<Vec<ApiPlaylist>>
}

#[derive(Debug, Deserialize)]
struct ApiPlaylist {
    id: Option<String>,
    snippet: Option<PlaylistSnippet>,
}

#[derive(Debug, Deserialize)]
struct PlaylistSnippet {
    title: Option<String>,
}

impl TryFrom<ApiPlaylist> for Playlist {
    type Error = YouTubeError;

    fn try_from(item: ApiPlaylist) -> Result<Self, Self::Error> {
        let id = item.id
            .ok_or_else(|| YouTubeError::MalformedResponse("playlist is missing id".to_string()))?;
        let title = item.snippet
            .and_then(|s| s.title)
            .ok_or_else(|| YouTubeError::MalformedResponse(format!("playlist {} is missing snippet.title", id)))?;

        Ok(Playlist { id, title })
    }
}

pub async fn get_playlists(
    client: &Client,
    base_url: &str,
    channel_id: &str,
    api_key: &str,
    page_token: Option<&str>,
    max_results: u32,
) -> Result<(Vec<Playlist>, Option<String>), YouTubeError> {
    let mut url = format!(
        "{}/playlists?channelId={}&part=snippet&maxResults={}",
        base_url,
        channel_id,
        max_results
    );

    if let Some(token) = page_token {
        url.push_str(&format!("&pageToken={}", token));
    }

    tracing::debug!(channel_id, ?page_token, "fetching playlists page");

    let api_response: ApiResponse = send_request(
        client,
        &url,
        api_key,
        "nextPageToken,items(id,snippet.title)",
    ).await?;

    let playlists = api_response.items
        .unwrap_or_default()
        .into_iter()
        .map(Playlist::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok((playlists, api_response.next_page_token))
}
