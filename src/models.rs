use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct License {
    pub kind: String,
    pub copyright_holder: String,
}

impl License {
    pub fn cc_by(copyright_holder: &str) -> Self {
        License {
            kind: "CC BY".to_string(),
            copyright_holder: copyright_holder.to_string(),
        }
    }
}

/// Channel-level metadata handed to the curation platform alongside the topics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelInfo {
    pub source_domain: String,
    pub source_id: String,
    pub title: String,
    pub language: String,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum ContentFile {
    #[serde(rename = "youtube_video")]
    YouTubeVideo { youtube_id: String },
    #[serde(rename = "youtube_subtitle")]
    YouTubeSubtitle { youtube_id: String, language: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub source_id: String,
    pub title: String,
    pub language: String,
    pub license: License,
    pub thumbnail: String,
    pub files: Vec<ContentFile>,
}

impl Video {
    pub fn new(source_id: String, title: String, language: String, license: License, thumbnail: String) -> Self {
        let files = vec![ContentFile::YouTubeVideo { youtube_id: source_id.clone() }];

        Video {
            source_id,
            title,
            language,
            license,
            thumbnail,
            files,
        }
    }

    pub fn add_subtitle(&mut self, language: &str) {
        self.files.push(ContentFile::YouTubeSubtitle {
            youtube_id: self.source_id.clone(),
            language: language.to_string(),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topic {
    pub source_id: String,
    pub title: String,
    pub children: Vec<Video>,
}

impl Topic {
    pub fn new(source_id: String, title: String) -> Self {
        Topic {
            source_id,
            title,
            children: Vec::new(),
        }
    }

    pub fn add_child(&mut self, video: Video) {
        self.children.push(video);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelTree {
    pub channel: ChannelInfo,
    pub topics: Vec<Topic>,
}

impl ChannelTree {
    pub fn new(channel: ChannelInfo) -> Self {
        ChannelTree {
            channel,
            topics: Vec::new(),
        }
    }

    pub fn add_child(&mut self, topic: Topic) {
        self.topics.push(topic);
    }

    pub fn video_count(&self) -> usize {
        self.topics.iter().map(|t| t.children.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    UnsupportedSubtitleLanguage { video_id: String, language: String },
}
