use crate::errors::ChefError;
use crate::models::{ChannelTree, ContentFile, Topic, Video};

/// Structural check run once over a finished tree, before it is handed off.
pub fn validate_tree(tree: &ChannelTree) -> Result<(), ChefError> {
    let channel = &tree.channel;
    require(&channel.source_id, "channel source_id")?;
    require(&channel.title, "channel title")?;
    require(&channel.language, "channel language")?;

    if tree.topics.is_empty() {
        return Err(ChefError::InvalidTree("channel has no topics".to_string()));
    }

    for topic in &tree.topics {
        validate_topic(topic)?;
    }

    if tree.video_count() == 0 {
        return Err(ChefError::InvalidTree("channel has no videos".to_string()));
    }

    Ok(())
}

fn validate_topic(topic: &Topic) -> Result<(), ChefError> {
    require(&topic.source_id, "topic source_id")?;
    require(&topic.title, &format!("title of topic {}", topic.source_id))?;

    for video in &topic.children {
        validate_video(video)?;
    }
    Ok(())
}

fn validate_video(video: &Video) -> Result<(), ChefError> {
    require(&video.source_id, "video source_id")?;
    let id = &video.source_id;
    require(&video.title, &format!("title of video {}", id))?;
    require(&video.language, &format!("language of video {}", id))?;
    require(&video.thumbnail, &format!("thumbnail of video {}", id))?;
    require(&video.license.kind, &format!("license of video {}", id))?;

    match video.files.first() {
        Some(ContentFile::YouTubeVideo { youtube_id }) if youtube_id == id => (),
        _ => {
            return Err(ChefError::InvalidTree(format!(
                "video {} must start with its own video file",
                id
            )))
        }
    }

    for file in &video.files[1..] {
        match file {
            ContentFile::YouTubeVideo { .. } => {
                return Err(ChefError::InvalidTree(format!("video {} has more than one video file", id)));
            }
            ContentFile::YouTubeSubtitle { youtube_id, language } => {
                if youtube_id != id || language.is_empty() {
                    return Err(ChefError::InvalidTree(format!(
                        "video {} has a subtitle file for {}/{}",
                        id, youtube_id, language
                    )));
                }
            }
        }
    }

    Ok(())
}

fn require(value: &str, what: &str) -> Result<(), ChefError> {
    if value.trim().is_empty() {
        return Err(ChefError::InvalidTree(format!("{} is missing", what)));
    }
    Ok(())
}
