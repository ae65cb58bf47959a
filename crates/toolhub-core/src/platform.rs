// Figure out which platform a pasted link belongs to
use url::Url;

/// Host suffix -> platform name
const HOSTS: &[(&str, &str)] = &[
    ("youtube.com", "YouTube"),
    ("youtu.be", "YouTube"),
    ("tiktok.com", "TikTok"),
    ("douyin.com", "Douyin"),
    ("instagram.com", "Instagram"),
    ("facebook.com", "Facebook"),
    ("fb.watch", "Facebook"),
    ("twitter.com", "Twitter"),
    ("x.com", "Twitter"),
];

/// Lowercased host of `input`, trying `https://` when there's no scheme
pub fn host_of(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = Url::parse(trimmed)
        .ok()
        .filter(|u| u.host_str().is_some())
        .or_else(|| Url::parse(&format!("https://{}", trimmed)).ok())?;

    parsed.host_str().map(|h| h.to_lowercase())
}

pub fn detect_platform(input: &str) -> Option<&'static str> {
    let host = host_of(input)?;
    HOSTS
        .iter()
        .find(|(suffix, _)| host == *suffix || host.ends_with(&format!(".{}", suffix)))
        .map(|(_, platform)| *platform)
}
