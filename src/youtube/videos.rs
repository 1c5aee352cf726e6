use reqwest::Client;
use serde::Deserialize;
use crate::errors::YouTubeError;
use super::send_request;

// videos.list accepts at most 50 ids per request
const MAX_IDS_PER_REQUEST: usize = 50;

/// A video record as returned by `videos.list?part=status,snippet`.
///
/// `id` and `license` are required on every record. Snippet fields stay optional
/// here; they are only required once a video is turned into a tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoResource {
    pub id: String,
    pub license: String,
    pub title: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiVideo>>
}

#[derive(Debug, Deserialize)]
struct ApiVideo {
    id: Option<String>,
    status: Option<VideoStatus>,
    snippet: Option<VideoSnippet>,
}

#[derive(Debug, Deserialize)]
struct VideoStatus {
    license: Option<String>,
}

#[derive(Debug, Deserialize)]
struct VideoSnippet {
    title: Option<String>,
    thumbnails: Option<Thumbnails>,
}

#[derive(Debug, Deserialize)]
struct Thumbnails {
    high: Option<Thumbnail>
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: Option<String>
}

impl TryFrom<ApiVideo> for VideoResource {
    type Error = YouTubeError;

    fn try_from(video: ApiVideo) -> Result<Self, Self::Error> {
        let id = video.id
            .ok_or_else(|| YouTubeError::MalformedResponse("video is missing id".to_string()))?;
        let license = video.status
            .and_then(|s| s.license)
            .ok_or_else(|| YouTubeError::MalformedResponse(format!("video {} is missing status.license", id)))?;

        let (title, thumbnail) = match video.snippet {
            Some(snippet) => {
                let thumbnail = snippet.thumbnails
                    .and_then(|t| t.high)
                    .and_then(|h| h.url);
                (snippet.title, thumbnail)
            }
            None => (None, None),
        };

        Ok(VideoResource {
            id,
            license,
            title,
            thumbnail,
        })
    }
}

/// Batch-fetches status and snippet for `video_ids`, preserving the API's response order.
pub async fn get_videos(
    client: &Client,
    base_url: &str,
    video_ids: &[String],
    api_key: &str,
) -> Result<Vec<VideoResource>, YouTubeError> {
    // If no videos, return early
    if video_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut videos = Vec::with_capacity(video_ids.len());

    for chunk in video_ids.chunks(MAX_IDS_PER_REQUEST) {
        let ids = chunk.join(",");
        let url = format!(
            "{}/videos?id={}&part=status,snippet",
            base_url,
            ids
        );

        tracing::debug!(count = chunk.len(), "fetching video details");

        let api_response: ApiResponse = send_request(
            client,
            &url,
            api_key,
            "items(id,status.license,snippet(title,thumbnails.high.url))",
        ).await?;

        for item in api_response.items.unwrap_or_default() {
            videos.push(VideoResource::try_from(item)?);
        }
    }

    Ok(videos)
}
