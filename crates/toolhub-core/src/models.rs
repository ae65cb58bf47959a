use serde::{Deserialize, Serialize};

/// One catalog entry - a (mostly mock) utility the hub advertises
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub platform: String,
    pub category: Category,
    pub icon: String,
    #[serde(default)]
    pub featured: bool,
    /// Accent token, resolved to a real colour by the theme
    pub color: String,
}

/// Grouping label for tools
///
/// `All` is the synthetic aggregate: it only ever shows up as a filter
/// selection, never as the category of an actual tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "All Tools")]
    All,
    #[serde(rename = "Video Downloaders")]
    VideoDownloaders,
    #[serde(rename = "Image Tools")]
    ImageTools,
    #[serde(rename = "Audio Tools")]
    AudioTools,
    #[serde(rename = "Social Media Tools")]
    SocialMediaTools,
}

impl Category {
    /// Every category in sidebar order, aggregate first
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::VideoDownloaders,
        Category::ImageTools,
        Category::AudioTools,
        Category::SocialMediaTools,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "All Tools",
            Category::VideoDownloaders => "Video Downloaders",
            Category::ImageTools => "Image Tools",
            Category::AudioTools => "Audio Tools",
            Category::SocialMediaTools => "Social Media Tools",
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            Category::All => "all-tools",
            Category::VideoDownloaders => "video-downloaders",
            Category::ImageTools => "image-tools",
            Category::AudioTools => "audio-tools",
            Category::SocialMediaTools => "social-media-tools",
        }
    }

    pub fn is_aggregate(&self) -> bool {
        matches!(self, Category::All)
    }

    /// Sidebar glyph
    pub fn icon(&self) -> &'static str {
        match self {
            Category::All => "★",
            Category::VideoDownloaders => "▶",
            Category::ImageTools => "▣",
            Category::AudioTools => "♫",
            Category::SocialMediaTools => "⇪",
        }
    }

    /// Parse from a label or slug, case-insensitive
    ///
    /// "all" is accepted as shorthand for the aggregate because nobody
    /// wants to type `--category "All Tools"`.
    pub fn parse(input: &str) -> crate::Result<Self> {
        let needle = input.trim().to_lowercase();
        if needle == "all" {
            return Ok(Category::All);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == needle || c.slug() == needle)
            .ok_or_else(|| crate::Error::UnknownCategory(input.to_string()))
    }

    /// The next category in sidebar order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A sidebar row: category plus how many tools live in it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryDescriptor {
    pub category: Category,
    pub count: usize,
}

/// What the catalog screen is currently filtering by
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_query: String,
    pub selected_category: Category,
}

impl FilterState {
    pub fn new(search_query: impl Into<String>, selected_category: Category) -> Self {
        Self {
            search_query: search_query.into(),
            selected_category,
        }
    }

    /// Aggregate category and no query - the untouched landing state
    pub fn is_unfiltered(&self) -> bool {
        self.selected_category.is_aggregate() && self.search_query.is_empty()
    }
}

/// Video details shown on the preview panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoMetadata {
    pub title: String,
    pub thumbnail_ref: String,
    pub duration: String,
    pub view_count: String,
    pub like_count: String,
    pub channel_name: String,
    pub upload_date: String,
    pub description: String,
}

impl VideoMetadata {
    /// The canned record every successful lookup returns
    pub fn mock() -> Self {
        Self {
            title: "Amazing Nature Documentary - Wildlife in 4K".to_string(),
            thumbnail_ref: "/wildlife-docu-thumbnail.png".to_string(),
            duration: "15:42".to_string(),
            view_count: "2.5M views".to_string(),
            like_count: "45K".to_string(),
            channel_name: "Nature Explorer".to_string(),
            upload_date: "2 days ago".to_string(),
            description: "Explore the breathtaking beauty of wildlife in stunning 4K resolution. \
                          This documentary takes you on a journey through diverse ecosystems..."
                .to_string(),
        }
    }
}

/// A row in the "Download Options" list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadOption {
    pub label: &'static str,
    pub detail: &'static str,
    pub recommended: bool,
}

/// The three fixed options every preview offers
pub const DOWNLOAD_OPTIONS: [DownloadOption; 3] = [
    DownloadOption {
        label: "MP4 - 1080p",
        detail: "High quality video",
        recommended: true,
    },
    DownloadOption {
        label: "MP4 - 720p",
        detail: "Standard quality",
        recommended: false,
    },
    DownloadOption {
        label: "MP3 - Audio Only",
        detail: "Extract audio track",
        recommended: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_accepts_labels_and_slugs() {
        assert_eq!(Category::parse("Image Tools").unwrap(), Category::ImageTools);
        assert_eq!(Category::parse("image tools").unwrap(), Category::ImageTools);
        assert_eq!(Category::parse("audio-tools").unwrap(), Category::AudioTools);
        assert_eq!(Category::parse("all").unwrap(), Category::All);
        assert!(matches!(
            Category::parse("Cooking"),
            Err(crate::Error::UnknownCategory(_))
        ));
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(Category::All.next(), Category::VideoDownloaders);
        assert_eq!(Category::SocialMediaTools.next(), Category::All);
        assert_eq!(Category::All.previous(), Category::SocialMediaTools);
    }

    #[test]
    fn test_category_serializes_as_label() {
        let json = serde_json::to_string(&Category::VideoDownloaders).unwrap();
        assert_eq!(json, "\"Video Downloaders\"");
    }

    #[test]
    fn test_default_filter_is_unfiltered() {
        let state = FilterState::default();
        assert!(state.is_unfiltered());
        assert!(!FilterState::new("x", Category::All).is_unfiltered());
    }

    #[test]
    fn test_only_first_option_recommended() {
        let recommended: Vec<_> = DOWNLOAD_OPTIONS.iter().filter(|o| o.recommended).collect();
        assert_eq!(recommended.len(), 1);
        assert_eq!(recommended[0].label, "MP4 - 1080p");
    }
}
