use crate::config::ChannelConfig;
use crate::errors::YouTubeError;
use crate::languages::is_supported_subtitle_language;
use crate::models::{ChannelTree, Diagnostic, Topic, Video};
use crate::pagination::{fetch_all, PageCursor};
use crate::youtube::playlists::Playlist;
use crate::youtube::videos::VideoResource;
use crate::youtube::YouTubeApi;

/// Turns a channel's playlists into a tree of topics holding their licensed videos.
///
/// Every call is awaited in order: a playlist is finished before the next one
/// starts, and a page of items is fully processed before the next page is requested.
pub struct ChannelTreeBuilder<'a, A> {
    api: &'a A,
    config: &'a ChannelConfig,
}

impl<'a, A: YouTubeApi> ChannelTreeBuilder<'a, A> {
    pub fn new(api: &'a A, config: &'a ChannelConfig) -> Self {
        ChannelTreeBuilder { api, config }
    }

    pub async fn build(&self, channel_id: &str) -> Result<(ChannelTree, Vec<Diagnostic>), YouTubeError> {
        let mut tree = ChannelTree::new(self.config.channel.clone());
        let mut diagnostics = Vec::new();

        let playlists = fetch_all(|page_token| {
            self.api.list_playlists(channel_id, page_token, self.config.page_size)
        }).await?;

        tracing::info!(channel_id, playlists = playlists.len(), "fetched channel playlists");

        for playlist in playlists {
            let topic = self.build_topic(playlist, &mut diagnostics).await?;
            tree.add_child(topic);
        }

        Ok((tree, diagnostics))
    }

    async fn build_topic(&self, playlist: Playlist, diagnostics: &mut Vec<Diagnostic>) -> Result<Topic, YouTubeError> {
        let mut topic = Topic::new(playlist.id, playlist.title);
        let mut cursor = PageCursor::FirstPage;
        let mut pages = 0;

        while let Some(page_token) = cursor.pending() {
            let page = self.api
                .list_playlist_items(&topic.source_id, page_token, self.config.page_size)
                .await?;
            pages += 1;

            if !page.items.is_empty() {
                let videos = self.api.list_videos(&page.items).await?;

                for resource in videos {
                    if resource.license != self.config.license_filter {
                        tracing::debug!(video_id = %resource.id, license = %resource.license, "skipping video");
                        continue;
                    }

                    let video = self.build_video(resource, diagnostics)?;
                    topic.add_child(video);
                }
            }

            cursor.advance(page.next_page_token);
        }

        tracing::info!(
            playlist_id = %topic.source_id,
            title = %topic.title,
            pages,
            videos = topic.children.len(),
            "built topic"
        );

        Ok(topic)
    }

    fn build_video(&self, resource: VideoResource, diagnostics: &mut Vec<Diagnostic>) -> Result<Video, YouTubeError> {
        let title = resource.title.ok_or_else(|| {
            YouTubeError::MalformedResponse(format!("video {} is missing snippet.title", resource.id))
        })?;
        let thumbnail = resource.thumbnail.ok_or_else(|| {
            YouTubeError::MalformedResponse(format!("video {} is missing snippet.thumbnails.high.url", resource.id))
        })?;

        let mut video = Video::new(
            resource.id,
            title,
            self.config.channel.language.clone(),
            self.config.license.clone(),
            thumbnail,
        );

        for language in &self.config.subtitle_languages {
            if is_supported_subtitle_language(language) {
                video.add_subtitle(language);
            } else {
                tracing::warn!(video_id = %video.source_id, language = %language, "unsupported subtitle language code");
                diagnostics.push(Diagnostic::UnsupportedSubtitleLanguage {
                    video_id: video.source_id.clone(),
                    language: language.clone(),
                });
            }
        }

        Ok(video)
    }
}
