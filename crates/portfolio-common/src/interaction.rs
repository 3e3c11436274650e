/// Per-instance UI state: achievement modals and project hover playback.
use crate::model::Media;
use crate::motion::{Spring, SpringConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

/// Modal toggle owned by a single achievement card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalToggle {
    state: ModalState,
}

impl ModalToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    /// Returns `true` if the state changed.
    pub fn preview_clicked(&mut self) -> bool {
        self.transition(ModalState::Closed, ModalState::Open)
    }

    pub fn overlay_clicked(&mut self) -> bool {
        self.transition(ModalState::Open, ModalState::Closed)
    }

    pub fn close_clicked(&mut self) -> bool {
        self.transition(ModalState::Open, ModalState::Closed)
    }

    fn transition(&mut self, from: ModalState, to: ModalState) -> bool {
        if self.state != from {
            return false;
        }
        self.state = to;
        true
    }
}

/// An achievement modal together with its spring-in/out transition.
///
/// The overlay stays on screen after a dismissal until the exit springs
/// settle; hosts hide it once [`is_visible`] turns false.
///
/// [`is_visible`]: ModalPresence::is_visible
#[derive(Debug, Clone, Copy)]
pub struct ModalPresence {
    toggle: ModalToggle,
    scale: Spring,
    opacity: Spring,
}

impl ModalPresence {
    /// Image scale at the start of the entrance and the end of the exit.
    pub const START_SCALE: f64 = 0.8;

    pub fn new() -> Self {
        Self {
            toggle: ModalToggle::new(),
            scale: Spring::new(SpringConfig::MODAL, Self::START_SCALE),
            opacity: Spring::new(SpringConfig::MODAL, 0.0),
        }
    }

    /// Open, or still animating out.
    pub fn is_visible(&self) -> bool {
        self.toggle.is_open() || !self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.scale.is_at_rest() && self.opacity.is_at_rest()
    }

    pub fn preview_clicked(&mut self) -> bool {
        let was_visible = self.is_visible();
        if !self.toggle.preview_clicked() {
            return false;
        }
        // Reopening mid-exit continues from where the exit got to.
        if !was_visible {
            self.scale.snap(Self::START_SCALE);
            self.opacity.snap(0.0);
        }
        self.scale.set_target(1.0);
        self.opacity.set_target(1.0);
        true
    }

    /// Any click that reaches the overlay dismisses it, including clicks on
    /// the enlarged image.
    pub fn overlay_clicked(&mut self) -> bool {
        self.toggle.overlay_clicked() && self.start_exit()
    }

    pub fn close_clicked(&mut self) -> bool {
        self.toggle.close_clicked() && self.start_exit()
    }

    /// Advance `dt` seconds. Returns `true` while anything moved; once
    /// settled, both springs sit exactly on their targets.
    pub fn step(&mut self, dt: f64) -> bool {
        if self.is_settled() {
            self.scale.step(0.0);
            self.opacity.step(0.0);
            return false;
        }
        self.scale.step(dt);
        self.opacity.step(dt);
        true
    }

    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.value().clamp(0.0, 1.0)
    }

    fn start_exit(&mut self) -> bool {
        self.scale.set_target(Self::START_SCALE);
        self.opacity.set_target(0.0);
        true
    }
}

impl Default for ModalPresence {
    fn default() -> Self {
        Self::new()
    }
}

/// What the host should do with a card's media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaCommand {
    Play,
    PauseAndRewind,
}

/// Hover-driven video playback for the project list.
#[derive(Debug, Clone)]
pub struct HoverTracker {
    media: Vec<Media>,
    active: Option<usize>,
}

impl HoverTracker {
    pub fn new(media: impl IntoIterator<Item = Media>) -> Self {
        Self {
            media: media.into_iter().collect(),
            active: None,
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn pointer_enter(&mut self, index: usize) -> Option<MediaCommand> {
        let media = self.media.get(index)?;
        self.active = Some(index);
        media.is_video().then_some(MediaCommand::Play)
    }

    pub fn pointer_leave(&mut self, index: usize) -> Option<MediaCommand> {
        let media = self.media.get(index)?;
        if self.active == Some(index) {
            self.active = None;
        }
        media.is_video().then_some(MediaCommand::PauseAndRewind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_opens_and_closes() {
        let mut modal = ModalToggle::new();
        assert_eq!(modal.state(), ModalState::Closed);

        assert!(modal.preview_clicked());
        assert!(modal.is_open());
        assert!(!modal.preview_clicked(), "already open");

        assert!(modal.overlay_clicked());
        assert_eq!(modal.state(), ModalState::Closed);

        modal.preview_clicked();
        assert!(modal.close_clicked());
        assert!(!modal.close_clicked(), "already closed");
        assert!(!modal.overlay_clicked());
    }

    #[test]
    fn cards_do_not_share_modal_state() {
        let mut cards = vec![ModalToggle::new(); 3];
        cards[1].preview_clicked();
        assert_eq!(
            cards.iter().map(ModalToggle::is_open).collect::<Vec<_>>(),
            [false, true, false]
        );
        cards[1].overlay_clicked();
        assert!(cards.iter().all(|c| !c.is_open()));
    }

    fn settle(modal: &mut ModalPresence) -> usize {
        let mut frames = 0;
        while modal.step(1.0 / 60.0) {
            frames += 1;
            assert!(frames < 600, "modal never settled");
        }
        frames
    }

    #[test]
    fn modal_springs_in_from_start_scale() {
        let mut modal = ModalPresence::new();
        assert!(!modal.is_visible());

        assert!(modal.preview_clicked());
        assert!(modal.is_visible());
        assert_eq!(modal.scale(), ModalPresence::START_SCALE);
        assert_eq!(modal.opacity(), 0.0);

        assert!(settle(&mut modal) > 1);
        assert!((modal.scale() - 1.0).abs() < 1e-9);
        assert!((modal.opacity() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn dismissed_modal_stays_visible_until_exit_settles() {
        let mut modal = ModalPresence::new();
        modal.preview_clicked();
        settle(&mut modal);

        assert!(modal.close_clicked());
        assert!(!modal.close_clicked(), "already dismissed");
        assert!(modal.is_visible(), "exit has not run yet");

        modal.step(1.0 / 60.0);
        assert!(modal.opacity() < 1.0);
        assert!(modal.is_visible());

        settle(&mut modal);
        assert!(!modal.is_visible());
        assert!((modal.scale() - ModalPresence::START_SCALE).abs() < 1e-9);
        assert_eq!(modal.opacity(), 0.0);
    }

    #[test]
    fn any_overlay_click_dismisses() {
        let mut modal = ModalPresence::new();
        assert!(!modal.overlay_clicked(), "closed modal ignores overlay clicks");

        modal.preview_clicked();
        assert!(modal.overlay_clicked());
        assert!(!modal.overlay_clicked(), "second click while exiting is a no-op");
        assert!(!modal.close_clicked());
    }

    #[test]
    fn reopening_mid_exit_keeps_current_frame() {
        let mut modal = ModalPresence::new();
        modal.preview_clicked();
        settle(&mut modal);
        modal.overlay_clicked();
        for _ in 0..3 {
            modal.step(1.0 / 60.0);
        }
        let opacity = modal.opacity();
        assert!(opacity > 0.0 && opacity < 1.0);

        assert!(modal.preview_clicked());
        assert_eq!(modal.opacity(), opacity);
        settle(&mut modal);
        assert!(modal.is_visible());
        assert!((modal.opacity() - 1.0).abs() < 1e-9);
    }

    fn tracker() -> HoverTracker {
        HoverTracker::new([
            Media::Image { src: "/a.png" },
            Media::Video { src: "/b.mp4" },
        ])
    }

    #[test]
    fn video_cards_play_and_rewind() {
        let mut hover = tracker();
        assert_eq!(hover.pointer_enter(1), Some(MediaCommand::Play));
        assert_eq!(hover.active(), Some(1));
        assert_eq!(hover.pointer_leave(1), Some(MediaCommand::PauseAndRewind));
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn image_cards_issue_no_media_commands() {
        let mut hover = tracker();
        assert_eq!(hover.pointer_enter(0), None);
        assert_eq!(hover.active(), Some(0));
        assert_eq!(hover.pointer_leave(0), None);
        assert_eq!(hover.active(), None);
    }

    #[test]
    fn stale_leave_keeps_newer_active_card() {
        let mut hover = tracker();
        hover.pointer_enter(0);
        hover.pointer_enter(1);
        hover.pointer_leave(0);
        assert_eq!(hover.active(), Some(1));
    }

    #[test]
    fn out_of_range_index_is_ignored() {
        let mut hover = tracker();
        assert_eq!(hover.pointer_enter(9), None);
        assert_eq!(hover.active(), None);
    }
}
