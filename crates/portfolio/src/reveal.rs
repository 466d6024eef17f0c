//! One-shot entrance reveal for page sections.
//!
//! Each section owns a [`SectionReveal`]; the page shares a single
//! [`ViewportObserver`] that routes intersection events to them. Content is always
//! present in the document, so the reveal is purely additive: when observation is
//! unavailable every section is reported as revealed.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    Unseen,
    Revealing,
    Revealed,
}

impl RevealState {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unseen => "unseen",
            Self::Revealing => "revealing",
            Self::Revealed => "revealed",
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Revealed)
    }
}

/// What happened when an event reached a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Started,
    Completed,
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReveal {
    state: RevealState,
}

impl Default for SectionReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionReveal {
    pub const fn new() -> Self {
        Self {
            state: RevealState::Unseen,
        }
    }

    /// A section that is already on screen at first paint.
    pub const fn revealed() -> Self {
        Self {
            state: RevealState::Revealed,
        }
    }

    pub const fn state(&self) -> RevealState {
        self.state
    }

    pub fn observe(&mut self, intersecting: bool) -> Transition {
        match (self.state, intersecting) {
            (RevealState::Unseen, true) => {
                self.state = RevealState::Revealing;
                Transition::Started
            }
            _ => Transition::Ignored,
        }
    }

    pub fn complete(&mut self) -> Transition {
        match self.state {
            RevealState::Revealing => {
                self.state = RevealState::Revealed;
                Transition::Completed
            }
            _ => Transition::Ignored,
        }
    }

    fn force_revealed(&mut self) {
        self.state = RevealState::Revealed;
    }
}

/// Stable anchor id of a subscribed section.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SectionId(pub String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObserverMode {
    #[default]
    Available,
    /// Intersection detection is missing or failed; fail open.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealOptions {
    /// CSS margin applied to the viewport when testing intersection.
    pub root_margin: String,
    pub duration_ms: u32,
    /// Extra delay per section index, so adjacent sections cascade.
    pub stagger_ms: u32,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            root_margin: "-10%".to_string(),
            duration_ms: 800,
            stagger_ms: 0,
        }
    }
}

impl RevealOptions {
    /// `data-*` attributes read by the client observer.
    pub fn data_attributes(&self, state: RevealState, delay_ms: u32) -> String {
        let delay = if delay_ms > 0 {
            format!(" data-reveal-delay=\"{delay_ms}\"")
        } else {
            String::new()
        };
        format!(
            " data-reveal=\"{}\" data-reveal-duration=\"{}\"{delay}",
            state.as_str(),
            self.duration_ms
        )
    }
}

/// Shared observer service: one registry, many independent sections.
#[derive(Debug, Default)]
pub struct ViewportObserver {
    mode: ObserverMode,
    sections: BTreeMap<SectionId, SectionReveal>,
}

impl ViewportObserver {
    pub fn new(mode: ObserverMode) -> Self {
        Self {
            mode,
            sections: BTreeMap::new(),
        }
    }

    pub fn mode(&self) -> ObserverMode {
        self.mode
    }

    /// Registers a section; re-subscribing an existing id keeps its state.
    pub fn subscribe(&mut self, id: SectionId) -> RevealState {
        let fail_open = self.mode == ObserverMode::Unavailable;
        let reveal = self.sections.entry(id).or_default();
        if fail_open {
            reveal.force_revealed();
        }
        reveal.state()
    }

    /// Subscribes a section that starts on screen and never animates.
    pub fn subscribe_revealed(&mut self, id: SectionId) -> RevealState {
        let reveal = self.sections.entry(id).or_insert_with(SectionReveal::revealed);
        reveal.force_revealed();
        reveal.state()
    }

    pub fn state(&self, id: &SectionId) -> Option<RevealState> {
        self.sections.get(id).map(SectionReveal::state)
    }

    /// Routes an intersection change to one section; unknown ids are ignored.
    pub fn intersect(&mut self, id: &SectionId, intersecting: bool) -> Transition {
        let Some(reveal) = self.sections.get_mut(id) else {
            return Transition::Ignored;
        };
        let transition = reveal.observe(intersecting);
        if transition == Transition::Started {
            debug!(section = id.as_str(), "reveal started");
        }
        transition
    }

    pub fn animation_finished(&mut self, id: &SectionId) -> Transition {
        self.sections
            .get_mut(id)
            .map(SectionReveal::complete)
            .unwrap_or(Transition::Ignored)
    }

    /// Called when the observer breaks after sections were subscribed.
    pub fn mark_unavailable(&mut self) {
        self.mode = ObserverMode::Unavailable;
        for reveal in self.sections.values_mut() {
            reveal.force_revealed();
        }
    }

    pub fn snapshot(&self) -> Vec<(SectionId, RevealState)> {
        self.sections
            .iter()
            .map(|(id, reveal)| (id.clone(), reveal.state()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_runs_once_per_instance() {
        let mut reveal = SectionReveal::new();
        assert_eq!(reveal.observe(false), Transition::Ignored);
        assert_eq!(reveal.observe(true), Transition::Started);
        assert_eq!(reveal.observe(true), Transition::Ignored);
        assert_eq!(reveal.complete(), Transition::Completed);

        // scrolled out and back in
        assert_eq!(reveal.observe(false), Transition::Ignored);
        assert_eq!(reveal.observe(true), Transition::Ignored);
        assert_eq!(reveal.state(), RevealState::Revealed);
    }

    #[test]
    fn complete_before_intersection_is_ignored() {
        let mut reveal = SectionReveal::new();
        assert_eq!(reveal.complete(), Transition::Ignored);
        assert_eq!(reveal.state(), RevealState::Unseen);
    }

    #[test]
    fn observer_tracks_sections_independently() {
        let mut observer = ViewportObserver::default();
        let about = SectionId::new("about");
        let contact = SectionId::new("contact");
        observer.subscribe(about.clone());
        observer.subscribe(contact.clone());

        assert_eq!(observer.intersect(&about, true), Transition::Started);
        assert_eq!(observer.state(&about), Some(RevealState::Revealing));
        assert_eq!(observer.state(&contact), Some(RevealState::Unseen));
        assert_eq!(
            observer.intersect(&SectionId::new("missing"), true),
            Transition::Ignored
        );
    }

    #[test]
    fn unavailable_observer_fails_open() {
        let mut observer = ViewportObserver::new(ObserverMode::Unavailable);
        assert_eq!(
            observer.subscribe(SectionId::new("projects")),
            RevealState::Revealed
        );
    }

    #[test]
    fn breaking_midway_reveals_everything() {
        let mut observer = ViewportObserver::default();
        let research = SectionId::new("research");
        observer.subscribe(research.clone());
        observer.mark_unavailable();
        assert_eq!(observer.state(&research), Some(RevealState::Revealed));
        assert_eq!(observer.intersect(&research, true), Transition::Ignored);
    }

    #[test]
    fn resubscribing_keeps_revealed_state() {
        let mut observer = ViewportObserver::default();
        let id = SectionId::new("education");
        observer.subscribe(id.clone());
        observer.intersect(&id, true);
        observer.animation_finished(&id);
        assert_eq!(observer.subscribe(id), RevealState::Revealed);
    }

    #[test]
    fn data_attributes_include_delay_only_when_set() {
        let options = RevealOptions::default();
        let attrs = options.data_attributes(RevealState::Unseen, 0);
        assert!(attrs.contains("data-reveal=\"unseen\""));
        assert!(!attrs.contains("data-reveal-delay"));
        assert!(options
            .data_attributes(RevealState::Unseen, 120)
            .contains("data-reveal-delay=\"120\""));
    }
}
