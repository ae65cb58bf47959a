// The tool list, passed around as a value instead of living in a global
use crate::models::{Category, ToolDescriptor};
use crate::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// Immutable collection of tool descriptors
///
/// Construction checks the catalog is sane (unique ids, no tool tagged with
/// the aggregate category); after that nothing can add, edit or remove a
/// tool, so every view derived from a catalog stays consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tools: Vec<ToolDescriptor>,
}

impl Catalog {
    pub fn new(tools: Vec<ToolDescriptor>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(tools.len());
        for tool in &tools {
            if !seen.insert(tool.id) {
                return Err(Error::DuplicateToolId(tool.id));
            }
            if tool.category.is_aggregate() {
                return Err(Error::InvalidCategory { id: tool.id });
            }
        }
        Ok(Self { tools })
    }

    /// The eight tools the hub ships with
    pub fn builtin() -> Self {
        let entry = |id: u32,
                     name: &str,
                     description: &str,
                     platform: &str,
                     category: Category,
                     icon: &str,
                     featured: bool,
                     color: &str| ToolDescriptor {
            id,
            name: name.to_string(),
            description: description.to_string(),
            platform: platform.to_string(),
            category,
            icon: icon.to_string(),
            featured,
            color: color.to_string(),
        };

        Self {
            tools: vec![
                entry(
                    1,
                    "YouTube Downloader",
                    "Download videos from YouTube in various formats and qualities",
                    "YouTube",
                    Category::VideoDownloaders,
                    "🎥",
                    true,
                    "red",
                ),
                entry(
                    2,
                    "Instagram Downloader",
                    "Save Instagram photos, videos, stories, and reels",
                    "Instagram",
                    Category::VideoDownloaders,
                    "📷",
                    true,
                    "pink",
                ),
                entry(
                    3,
                    "TikTok Downloader",
                    "Download TikTok videos without watermark",
                    "TikTok",
                    Category::VideoDownloaders,
                    "🎵",
                    true,
                    "black",
                ),
                entry(
                    4,
                    "Douyin Downloader",
                    "Download short videos from Douyin, the Chinese video platform",
                    "Douyin",
                    Category::VideoDownloaders,
                    "🎭",
                    false,
                    "blue",
                ),
                entry(
                    5,
                    "Facebook Downloader",
                    "Save Facebook videos and photos to your device",
                    "Facebook",
                    Category::VideoDownloaders,
                    "👥",
                    false,
                    "dark-blue",
                ),
                entry(
                    6,
                    "Twitter Downloader",
                    "Download Twitter videos and GIFs easily",
                    "Twitter",
                    Category::VideoDownloaders,
                    "🐦",
                    false,
                    "sky",
                ),
                entry(
                    7,
                    "Image Compressor",
                    "Compress images without losing quality",
                    "Universal",
                    Category::ImageTools,
                    "🖼",
                    false,
                    "green",
                ),
                entry(
                    8,
                    "Audio Converter",
                    "Convert audio files between different formats",
                    "Universal",
                    Category::AudioTools,
                    "🎧",
                    false,
                    "purple",
                ),
            ],
        }
    }

    /// Parse a JSON array of tool descriptors
    pub fn from_json_str(json: &str) -> Result<Self> {
        let tools: Vec<ToolDescriptor> = serde_json::from_str(json)?;
        Self::new(tools)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json_str(&contents)?;
        tracing::debug!(
            "Loaded {} tools from {}",
            catalog.len(),
            path.as_ref().display()
        );
        Ok(catalog)
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn find(&self, id: u32) -> Option<&ToolDescriptor> {
        self.tools.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool(id: u32, category: Category) -> ToolDescriptor {
        ToolDescriptor {
            id,
            name: format!("Tool {}", id),
            description: String::new(),
            platform: "Universal".to_string(),
            category,
            icon: "?".to_string(),
            featured: false,
            color: "green".to_string(),
        }
    }

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 8);
        assert!(Catalog::new(catalog.tools().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            tool(1, Category::ImageTools),
            tool(1, Category::AudioTools),
        ]);
        assert!(matches!(result, Err(Error::DuplicateToolId(1))));
    }

    #[test]
    fn test_aggregate_category_rejected() {
        let result = Catalog::new(vec![tool(9, Category::All)]);
        assert!(matches!(result, Err(Error::InvalidCategory { id: 9 })));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.find(3).map(|t| t.name.as_str()), Some("TikTok Downloader"));
        assert!(catalog.find(42).is_none());
    }

    #[test]
    fn test_from_json_str() {
        let json = r#"[
            {
                "id": 10,
                "name": "Reddit Downloader",
                "description": "Grab Reddit clips",
                "platform": "Reddit",
                "category": "Social Media Tools",
                "icon": "R",
                "color": "orange"
            }
        ]"#;
        let catalog = Catalog::from_json_str(json).unwrap();
        let reddit = catalog.find(10).unwrap();
        assert_eq!(reddit.category, Category::SocialMediaTools);
        assert!(!reddit.featured);
    }

    #[test]
    fn test_from_json_file_reads_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, "[]").unwrap();
        let catalog = Catalog::from_json_file(&path).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_from_json_str_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json_str("{not json"),
            Err(Error::SerializationError(_))
        ));
    }
}
