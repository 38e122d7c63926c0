//! Media attachment fields of a message row.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::columns::Column;
use crate::row::RowSource;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Media {
    url: Option<String>,
    mime_type: Option<String>,
    wa_type: Option<String>,
    size: i64,
    name: Option<String>,
    hash: Option<String>,
    duration: i32,
    /// Thumbnail bytes from `raw_data`.
    #[serde(skip)]
    thumbnail: Option<Vec<u8>>,
}

impl Media {
    pub fn from_row<R: RowSource + ?Sized>(row: &R) -> Self {
        Self {
            url: Column::MediaUrl.string(row),
            mime_type: Column::MediaMimeType.string(row),
            wa_type: Column::MediaWaType.string(row),
            size: Column::MediaSize.long(row),
            name: Column::MediaName.string(row),
            hash: Column::MediaHash.string(row),
            duration: Column::MediaDuration.int(row),
            thumbnail: Column::RawData.blob(row),
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn with_wa_type(mut self, wa_type: impl Into<String>) -> Self {
        self.wa_type = Some(wa_type.into());
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = size;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
        self.hash = Some(hash.into());
        self
    }

    pub fn with_duration(mut self, duration: i32) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: Vec<u8>) -> Self {
        self.thumbnail = Some(thumbnail);
        self
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn wa_type(&self) -> Option<&str> {
        self.wa_type.as_deref()
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    pub fn thumbnail(&self) -> Option<&[u8]> {
        self.thumbnail.as_deref()
    }

    /// Local file reference of the attachment.
    ///
    /// A `file://` url or a plain path in `media_url` is used as is. Remote urls
    /// (`https://mmg.whatsapp.net/...`) fall back to `media_name`, the file name the
    /// client stores the download under.
    pub fn file(&self) -> Option<PathBuf> {
        let url = self.url.as_deref().filter(|u| !u.is_empty());
        match url {
            Some(url) if url.starts_with("file://") => {
                Some(PathBuf::from(url.trim_start_matches("file://")))
            }
            Some(url) if !url.contains("://") => Some(PathBuf::from(url)),
            _ => self
                .name
                .as_deref()
                .filter(|n| !n.is_empty())
                .map(PathBuf::from),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Media::default()
    }
}

impl fmt::Display for Media {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Media{{url='{}', mime_type='{}', size={}, name='{}'}}",
            self.url.as_deref().unwrap_or(""),
            self.mime_type.as_deref().unwrap_or(""),
            self.size,
            self.name.as_deref().unwrap_or("")
        )
    }
}
