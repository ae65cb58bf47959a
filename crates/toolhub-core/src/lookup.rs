// Mock metadata lookup for the tool detail screen
//
// The state machine is plain data + `apply`, so the UI only has to feed it
// events and run whatever lookup it asks for. The "network" part is a sleep
// behind the `Delay` trait followed by a substring check.
use crate::launch::Notice;
use crate::models::VideoMetadata;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid URL for this platform";

pub const DEFAULT_LATENCY_MS: u64 = 2000;

/// A URL is accepted when it contains any of the required substrings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRule {
    pub required: Vec<String>,
}

impl UrlRule {
    pub fn new<I, S>(required: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            required: required.into_iter().map(Into::into).collect(),
        }
    }

    pub fn youtube() -> Self {
        Self::new(["youtube.com", "youtu.be"])
    }

    pub fn accepts(&self, url: &str) -> bool {
        self.required.iter().any(|needle| url.contains(needle.as_str()))
    }
}

/// How a finished lookup came out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(VideoMetadata),
    Invalid(String),
}

/// Validate `url` and produce the canned result
pub fn resolve(rule: &UrlRule, url: &str) -> LookupOutcome {
    if rule.accepts(url) {
        LookupOutcome::Found(VideoMetadata::mock())
    } else {
        LookupOutcome::Invalid(INVALID_URL_MESSAGE.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LookupPhase {
    #[default]
    Idle,
    Loading,
    Loaded(VideoMetadata),
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupEvent {
    EditUrl(String),
    Submit,
    Resolved(LookupOutcome),
    Reset,
    Download,
}

/// Side effects a transition asks the caller to perform
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Transition {
    pub notice: Option<Notice>,
    /// URL to look up; set exactly when the state just entered Loading
    pub start_lookup: Option<String>,
}

/// Detail screen state: the URL field plus where the lookup stands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupState {
    pub url: String,
    pub phase: LookupPhase,
}

impl LookupState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LookupPhase::Loading)
    }

    pub fn metadata(&self) -> Option<&VideoMetadata> {
        match &self.phase {
            LookupPhase::Loaded(metadata) => Some(metadata),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LookupPhase::Error(message) => Some(message),
            _ => None,
        }
    }

    /// Submit button state: disabled while loading or with a blank URL
    pub fn can_submit(&self) -> bool {
        !self.is_loading() && !self.url.trim().is_empty()
    }

    pub fn apply(&mut self, event: LookupEvent) -> Transition {
        let mut transition = Transition::default();

        match event {
            LookupEvent::EditUrl(url) => {
                if !self.is_loading() {
                    self.url = url;
                }
            }
            LookupEvent::Submit => {
                if self.can_submit() {
                    debug!("Lookup submitted: {}", self.url);
                    self.phase = LookupPhase::Loading;
                    transition.start_lookup = Some(self.url.clone());
                }
            }
            LookupEvent::Resolved(outcome) => {
                if self.is_loading() {
                    self.phase = match outcome {
                        LookupOutcome::Found(metadata) => LookupPhase::Loaded(metadata),
                        LookupOutcome::Invalid(message) => LookupPhase::Error(message),
                    };
                    debug!("Lookup resolved: {:?}", self.phase);
                }
            }
            LookupEvent::Reset => {
                // No cancellation: a lookup in flight always runs to completion
                if !self.is_loading() {
                    *self = Self::default();
                }
            }
            LookupEvent::Download => {
                if self.metadata().is_some() {
                    transition.notice = Some(Notice::DownloadStarted);
                }
            }
        }

        transition
    }
}

/// Something that can wait
///
/// Real runs sleep on the tokio timer; tests swap in `NoDelay` (or a mock)
/// so Loading -> Loaded happens without wall-clock time.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait::async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait::async_trait]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

/// Pretends to fetch video info: wait, then validate
#[derive(Clone)]
pub struct LookupSimulator {
    rule: UrlRule,
    delay: Arc<dyn Delay>,
    latency: Duration,
}

impl LookupSimulator {
    pub fn new(rule: UrlRule, delay: Arc<dyn Delay>, latency: Duration) -> Self {
        Self {
            rule,
            delay,
            latency,
        }
    }

    /// Real timer, default latency
    pub fn with_rule(rule: UrlRule) -> Self {
        Self::new(
            rule,
            Arc::new(TokioDelay),
            Duration::from_millis(DEFAULT_LATENCY_MS),
        )
    }

    pub fn rule(&self) -> &UrlRule {
        &self.rule
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// The delay always completes before the outcome is decided
    pub async fn lookup(&self, url: &str) -> LookupOutcome {
        info!("Looking up {} ({}ms simulated latency)", url, self.latency.as_millis());
        self.delay.wait(self.latency).await;
        resolve(&self.rule, url)
    }
}

impl std::fmt::Debug for LookupSimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupSimulator")
            .field("rule", &self.rule)
            .field("latency", &self.latency)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn submitted(url: &str) -> (LookupState, Transition) {
        let mut state = LookupState::new();
        let _ = state.apply(LookupEvent::EditUrl(url.to_string()));
        let transition = state.apply(LookupEvent::Submit);
        (state, transition)
    }

    #[test]
    fn test_rule_accepts_either_host() {
        let rule = UrlRule::youtube();
        assert!(rule.accepts("https://www.youtube.com/watch?v=abc"));
        assert!(rule.accepts("https://youtu.be/abc"));
        assert!(!rule.accepts("https://example.com/video"));
    }

    #[test]
    fn test_blank_url_does_not_submit() {
        let (state, transition) = submitted("   ");
        assert_eq!(state.phase, LookupPhase::Idle);
        assert!(transition.start_lookup.is_none());
    }

    #[test]
    fn test_submit_enters_loading_with_untrimmed_url() {
        let (state, transition) = submitted(" https://youtu.be/x ");
        assert!(state.is_loading());
        assert_eq!(transition.start_lookup.as_deref(), Some(" https://youtu.be/x "));
    }

    #[test]
    fn test_loading_blocks_edits_and_resubmits() {
        let (mut state, _) = submitted("https://youtu.be/x");
        let _ = state.apply(LookupEvent::EditUrl("something else".to_string()));
        assert_eq!(state.url, "https://youtu.be/x");
        let again = state.apply(LookupEvent::Submit);
        assert!(again.start_lookup.is_none());
    }

    #[test]
    fn test_reset_ignored_while_loading() {
        let (mut state, _) = submitted("https://youtu.be/x");
        let _ = state.apply(LookupEvent::Reset);
        assert!(state.is_loading());
    }

    #[test]
    fn test_invalid_url_lands_in_error() {
        let (mut state, _) = submitted("https://example.com/video");
        let outcome = resolve(&UrlRule::youtube(), &state.url);
        let _ = state.apply(LookupEvent::Resolved(outcome));
        assert_eq!(state.error(), Some(INVALID_URL_MESSAGE));
        assert!(state.metadata().is_none());
    }

    #[test]
    fn test_error_allows_editing_and_resubmitting() {
        let (mut state, _) = submitted("nope");
        let _ = state.apply(LookupEvent::Resolved(LookupOutcome::Invalid(
            INVALID_URL_MESSAGE.to_string(),
        )));
        let _ = state.apply(LookupEvent::EditUrl("https://youtu.be/ok".to_string()));
        let transition = state.apply(LookupEvent::Submit);
        assert!(state.is_loading());
        assert!(state.error().is_none());
        assert!(transition.start_lookup.is_some());
    }

    #[test]
    fn test_resolved_outside_loading_is_ignored() {
        let mut state = LookupState::new();
        let _ = state.apply(LookupEvent::Resolved(LookupOutcome::Found(VideoMetadata::mock())));
        assert_eq!(state.phase, LookupPhase::Idle);
    }

    #[test]
    fn test_download_only_notifies_when_loaded() {
        let mut state = LookupState::new();
        assert!(state.apply(LookupEvent::Download).notice.is_none());

        let (mut state, _) = submitted("https://youtu.be/x");
        let _ = state.apply(LookupEvent::Resolved(LookupOutcome::Found(VideoMetadata::mock())));
        let before = state.clone();
        let transition = state.apply(LookupEvent::Download);
        assert_eq!(transition.notice, Some(Notice::DownloadStarted));
        assert_eq!(state, before);
    }

    #[test]
    fn test_reset_clears_everything() {
        let (mut state, _) = submitted("https://youtu.be/x");
        let _ = state.apply(LookupEvent::Resolved(LookupOutcome::Found(VideoMetadata::mock())));
        let _ = state.apply(LookupEvent::Reset);
        assert_eq!(state, LookupState::default());
    }

    #[tokio::test]
    async fn test_simulator_waits_for_configured_latency() {
        let mut delay = MockDelay::new();
        delay
            .expect_wait()
            .with(eq(Duration::from_millis(2000)))
            .times(1)
            .returning(|_| ());

        let simulator = LookupSimulator::new(
            UrlRule::youtube(),
            Arc::new(delay),
            Duration::from_millis(DEFAULT_LATENCY_MS),
        );
        let outcome = simulator.lookup("https://www.youtube.com/watch?v=1").await;
        assert_eq!(outcome, LookupOutcome::Found(VideoMetadata::mock()));
    }

    #[tokio::test]
    async fn test_simulator_rejects_foreign_urls() {
        let simulator = LookupSimulator::new(UrlRule::youtube(), Arc::new(NoDelay), Duration::ZERO);
        let outcome = simulator.lookup("https://example.com/video").await;
        assert_eq!(outcome, LookupOutcome::Invalid(INVALID_URL_MESSAGE.to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_sleeps() {
        let simulator = LookupSimulator::with_rule(UrlRule::youtube());
        let started = tokio::time::Instant::now();
        let _ = simulator.lookup("https://youtu.be/x").await;
        assert!(started.elapsed() >= Duration::from_millis(DEFAULT_LATENCY_MS));
    }
}
