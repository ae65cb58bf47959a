// Static description of each tool that has its own screen
use crate::launch::{Route, YOUTUBE_DOWNLOADER_ID, YOUTUBE_DOWNLOADER_PATH};
use crate::lookup::UrlRule;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPage {
    pub tool_id: u32,
    pub route: Route,
    pub icon: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub input_label: &'static str,
    pub url_placeholder: &'static str,
    pub url_rule: UrlRule,
    pub instructions: &'static [&'static str],
    pub disclaimer: &'static str,
}

impl ToolPage {
    pub fn youtube() -> Self {
        Self {
            tool_id: YOUTUBE_DOWNLOADER_ID,
            route: Route::Tool(YOUTUBE_DOWNLOADER_PATH.to_string()),
            icon: "🎥",
            title: "YouTube Downloader",
            subtitle: "Download videos from YouTube",
            input_label: "Enter YouTube URL",
            url_placeholder: "https://www.youtube.com/watch?v=...",
            url_rule: UrlRule::youtube(),
            instructions: &[
                "Copy the YouTube video URL from your browser",
                "Paste the URL in the input field above",
                "Press Enter to fetch video information",
                "Review the video details and select your preferred quality",
                "Press Ctrl+D to download the video",
                "Press Ctrl+R to start over with a new URL",
            ],
            disclaimer: "This is a demo interface. In a real implementation, you would \
                         integrate with a YouTube download API or service.",
        }
    }

    /// Every page that exists
    pub fn all() -> Vec<ToolPage> {
        vec![Self::youtube()]
    }

    pub fn for_route(route: &Route) -> Result<ToolPage> {
        Self::all()
            .into_iter()
            .find(|page| &page.route == route)
            .ok_or_else(|| Error::UnknownRoute(route.to_string()))
    }
}
