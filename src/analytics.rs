//! Analytics event vocabulary and sinks.
//!
//! The beacon itself lives outside this crate. What lives here is the set of
//! event names the site fires and the contract that firing one never fails:
//! with no backend available, [`NoopSink`] swallows everything.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::models::ContactKind;

/// Properties attached to an event. Plain strings keep the sink contract
/// simple; numbers and booleans are formatted by the caller.
pub type Props = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyticsEvent {
    PageView,
    PortfolioOpened,
    ViewProject(String),
    DownloadCv,
    ClickGithub,
    ClickLinkedin,
    ClickEmail,
}

impl AnalyticsEvent {
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            AnalyticsEvent::PageView => Cow::Borrowed("pageview"),
            AnalyticsEvent::PortfolioOpened => Cow::Borrowed("portfolio_opened"),
            AnalyticsEvent::ViewProject(slug) => Cow::Owned(format!("view_project_{}", slug)),
            AnalyticsEvent::DownloadCv => Cow::Borrowed("download_cv"),
            AnalyticsEvent::ClickGithub => Cow::Borrowed("click_github"),
            AnalyticsEvent::ClickLinkedin => Cow::Borrowed("click_linkedin"),
            AnalyticsEvent::ClickEmail => Cow::Borrowed("click_email"),
        }
    }

    /// Outbound click event for a contact link.
    pub fn for_contact(kind: ContactKind) -> Self {
        match kind {
            ContactKind::Github => AnalyticsEvent::ClickGithub,
            ContactKind::Linkedin => AnalyticsEvent::ClickLinkedin,
            ContactKind::Email => AnalyticsEvent::ClickEmail,
        }
    }
}

pub trait AnalyticsSink {
    /// Must not fail or panic when the backend is unavailable.
    fn track(&self, event: &AnalyticsEvent, props: Option<&Props>);
}

/// Backend unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn track(&self, _event: &AnalyticsEvent, _props: Option<&Props>) {}
}

/// Records events as `tracing` events under the `analytics` target.
#[derive(Debug, Clone)]
pub struct LogSink {
    domain: String,
}

impl LogSink {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
        }
    }
}

impl AnalyticsSink for LogSink {
    fn track(&self, event: &AnalyticsEvent, props: Option<&Props>) {
        tracing::info!(
            target: "analytics",
            domain = %self.domain,
            event = %event.name(),
            props = ?props,
            "event"
        );
    }
}

/// Sink selected by configuration.
pub fn sink_for(config: &crate::config::AnalyticsConfig) -> Box<dyn AnalyticsSink> {
    match (config.enabled, config.domain.as_deref()) {
        (true, Some(domain)) => Box::new(LogSink::new(domain)),
        _ => Box::new(NoopSink),
    }
}
