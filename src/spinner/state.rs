//! Overlay state machine
//!
//! `SpinnerState` owns the visible -> fading -> hidden lifecycle. It has no
//! timers of its own: every operation takes the current instant, and
//! `next_deadline` tells the driver when the next time-based transition
//! could happen.

use std::collections::HashSet;
use std::fmt;
use std::time::Duration;
use tokio::time::Instant;

use super::config::SpinnerConfig;

/// An input record as seen by the overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDescriptor {
    pub id: String,
    pub has_image: bool,
}

impl ItemDescriptor {
    pub fn new(id: impl Into<String>, has_image: bool) -> Self {
        Self {
            id: id.into(),
            has_image,
        }
    }

}

/// Overlay lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Visible,
    Fading,
    Hidden,
}

impl Phase {
    /// The `data-fading` flag: set as soon as the fade starts and kept after
    pub fn data_fading(self) -> bool {
        !matches!(self, Phase::Visible)
    }

    /// Whether the overlay is still part of the render tree
    pub fn is_rendered(self) -> bool {
        !matches!(self, Phase::Hidden)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Visible => "visible",
            Phase::Fading => "fading",
            Phase::Hidden => "hidden",
        };
        f.write_str(name)
    }
}

/// Published view of the state, cheap to copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpinnerSnapshot {
    pub phase: Phase,
    pub loaded_count: usize,
    pub effective_threshold: usize,
    pub image_count: usize,
}

impl SpinnerSnapshot {
    pub fn data_fading(&self) -> bool {
        self.phase.data_fading()
    }
}

/// Run state for one page mount
#[derive(Debug)]
pub struct SpinnerState {
    config: SpinnerConfig,
    /// Ids of the image-bearing items
    image_ids: HashSet<String>,
    /// Ids that have already reported loaded
    seen: HashSet<String>,
    effective_threshold: usize,
    phase: Phase,
    started_at: Instant,
    fade_started_at: Option<Instant>,
}

impl SpinnerState {
    /// Start a run at `now` for the given items
    pub fn new(items: &[ItemDescriptor], config: SpinnerConfig, now: Instant) -> Self {
        let image_ids: HashSet<String> = items
            .iter()
            .filter(|item| item.has_image)
            .map(|item| item.id.clone())
            .collect();
        let effective_threshold = config.image_threshold.min(image_ids.len());

        Self {
            config,
            image_ids,
            seen: HashSet::new(),
            effective_threshold,
            phase: Phase::Visible,
            started_at: now,
            fade_started_at: None,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn loaded_count(&self) -> usize {
        self.seen.len()
    }

    pub fn effective_threshold(&self) -> usize {
        self.effective_threshold
    }

    pub fn image_count(&self) -> usize {
        self.image_ids.len()
    }

    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.started_at)
    }

    pub fn threshold_met(&self) -> bool {
        self.loaded_count() >= self.effective_threshold
    }

    pub fn snapshot(&self) -> SpinnerSnapshot {
        SpinnerSnapshot {
            phase: self.phase,
            loaded_count: self.loaded_count(),
            effective_threshold: self.effective_threshold,
            image_count: self.image_ids.len(),
        }
    }

    /// Record a load signal for `id` and re-evaluate the fade condition.
    ///
    /// Repeated signals for the same id, and signals for ids that carry no
    /// image, leave the count untouched. Returns the phase entered, if any.
    pub fn report_image_loaded(&mut self, id: &str, now: Instant) -> Option<Phase> {
        if !self.image_ids.contains(id) {
            log::debug!("Ignoring load signal for unknown image item {}", id);
            return None;
        }
        if self.seen.insert(id.to_string()) {
            log::trace!(
                "Image {} loaded ({}/{})",
                id,
                self.loaded_count(),
                self.effective_threshold
            );
        }
        self.try_begin_fade(now)
    }

    /// Timer-driven evaluation. Starts the fade when eligible and completes
    /// it once the fade duration has passed.
    pub fn tick(&mut self, now: Instant) -> Option<Phase> {
        match self.phase {
            Phase::Visible => self.try_begin_fade(now),
            Phase::Fading => self.try_finish_fade(now),
            Phase::Hidden => None,
        }
    }

    /// `elapsed >= min && (loaded >= threshold || elapsed >= max)`
    pub fn fade_eligible(&self, now: Instant) -> bool {
        let elapsed = self.elapsed(now);
        elapsed >= self.config.min_display()
            && (self.threshold_met() || elapsed >= self.config.max_wait())
    }

    /// The instant at which the next time-based transition becomes possible,
    /// or `None` once hidden.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            Phase::Visible => {
                let wait = if self.threshold_met() {
                    self.config.min_display()
                } else {
                    self.config.min_display().max(self.config.max_wait())
                };
                Some(self.started_at + wait)
            }
            Phase::Fading => self.fade_started_at.map(|t| t + self.config.fade()),
            Phase::Hidden => None,
        }
    }

    fn try_begin_fade(&mut self, now: Instant) -> Option<Phase> {
        if self.phase != Phase::Visible || !self.fade_eligible(now) {
            return None;
        }
        self.phase = Phase::Fading;
        self.fade_started_at = Some(now);
        log::debug!(
            "Page spinner visible -> fading after {:?} ({}/{} images)",
            self.elapsed(now),
            self.loaded_count(),
            self.effective_threshold
        );
        Some(Phase::Fading)
    }

    fn try_finish_fade(&mut self, now: Instant) -> Option<Phase> {
        let fade_start = self.fade_started_at?;
        if now.saturating_duration_since(fade_start) < self.config.fade() {
            return None;
        }
        self.phase = Phase::Hidden;
        log::debug!("Page spinner fading -> hidden");
        Some(Phase::Hidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn images(ids: &[&str]) -> Vec<ItemDescriptor> {
        ids.iter().map(|id| ItemDescriptor::new(*id, true)).collect()
    }

    #[test]
    fn starts_visible_with_nothing_loaded() {
        let t0 = Instant::now();
        let state = SpinnerState::new(&images(&["a", "b"]), SpinnerConfig::default(), t0);
        assert_eq!(state.phase(), Phase::Visible);
        assert_eq!(state.loaded_count(), 0);
        assert_eq!(state.effective_threshold(), 2);
        assert!(!state.snapshot().data_fading());
    }

    #[test]
    fn threshold_met_before_timeout() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(10, 5000, 2, 400);
        let mut state = SpinnerState::new(&images(&["a", "b"]), config, t0);

        assert_eq!(state.tick(t0 + ms(10)), None);
        assert_eq!(state.report_image_loaded("a", t0 + ms(20)), None);
        assert_eq!(
            state.report_image_loaded("b", t0 + ms(30)),
            Some(Phase::Fading)
        );
        assert_eq!(state.phase(), Phase::Fading);
    }

    #[test]
    fn loads_before_min_floor_fade_when_floor_passes() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(100, 5000, 2, 400);
        let mut state = SpinnerState::new(&images(&["a", "b"]), config, t0);

        state.report_image_loaded("a", t0 + ms(5));
        state.report_image_loaded("b", t0 + ms(6));
        assert_eq!(state.phase(), Phase::Visible);
        assert_eq!(state.next_deadline(), Some(t0 + ms(100)));

        assert_eq!(state.tick(t0 + ms(99)), None);
        assert_eq!(state.tick(t0 + ms(100)), Some(Phase::Fading));
    }

    #[test]
    fn timeout_dominates_when_images_never_complete() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(10, 50, 5, 400);
        let mut state = SpinnerState::new(&images(&["a", "b", "c", "d"]), config, t0);

        assert_eq!(state.next_deadline(), Some(t0 + ms(50)));
        assert_eq!(state.tick(t0 + ms(49)), None);
        assert_eq!(state.tick(t0 + ms(60)), Some(Phase::Fading));
    }

    #[test]
    fn minimum_floor_dominates_short_max() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(500, 100, 0, 400);
        let mut state = SpinnerState::new(&[], config, t0);

        assert_eq!(state.tick(t0 + ms(100)), None);
        assert_eq!(state.phase(), Phase::Visible);
        assert_eq!(state.tick(t0 + ms(499)), None);
        assert_eq!(state.tick(t0 + ms(501)), Some(Phase::Fading));
    }

    #[test]
    fn max_below_min_deadline_is_min() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(500, 100, 3, 0);
        let state = SpinnerState::new(&images(&["a", "b", "c"]), config, t0);
        assert_eq!(state.next_deadline(), Some(t0 + ms(500)));
    }

    #[test]
    fn no_image_items_fade_at_min_floor() {
        let t0 = Instant::now();
        let items = vec![
            ItemDescriptor::new("poem", false),
            ItemDescriptor::new("song", false),
        ];
        let mut state = SpinnerState::new(&items, SpinnerConfig::default(), t0);

        assert_eq!(state.effective_threshold(), 0);
        assert!(state.threshold_met());
        assert_eq!(state.tick(t0 + ms(799)), None);
        assert_eq!(state.tick(t0 + ms(800)), Some(Phase::Fading));
    }

    #[test]
    fn duplicate_signals_count_once() {
        let t0 = Instant::now();
        let mut state = SpinnerState::new(&images(&["a", "b"]), SpinnerConfig::default(), t0);

        for _ in 0..3 {
            state.report_image_loaded("a", t0);
        }
        assert_eq!(state.loaded_count(), 1);
    }

    #[test]
    fn signals_for_items_without_images_are_ignored() {
        let t0 = Instant::now();
        let items = vec![
            ItemDescriptor::new("a", true),
            ItemDescriptor::new("poem", false),
        ];
        let mut state = SpinnerState::new(&items, SpinnerConfig::default(), t0);

        state.report_image_loaded("poem", t0);
        state.report_image_loaded("never-listed", t0);
        assert_eq!(state.loaded_count(), 0);
    }

    #[test]
    fn effective_threshold_clamps_to_available_images() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(10, 5000, 5, 400);
        let mut state = SpinnerState::new(&images(&["a", "b"]), config, t0);

        assert_eq!(state.effective_threshold(), 2);
        state.report_image_loaded("a", t0 + ms(20));
        assert_eq!(state.phase(), Phase::Visible);
        state.report_image_loaded("b", t0 + ms(21));
        assert_eq!(state.phase(), Phase::Fading);
    }

    #[test]
    fn fade_duration_is_honored() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(0, 5000, 0, 400);
        let mut state = SpinnerState::new(&[], config, t0);

        assert_eq!(state.tick(t0 + ms(10)), Some(Phase::Fading));
        assert_eq!(state.next_deadline(), Some(t0 + ms(410)));
        assert_eq!(state.tick(t0 + ms(409)), None);
        assert_eq!(state.phase(), Phase::Fading);
        assert_eq!(state.tick(t0 + ms(410)), Some(Phase::Hidden));
        assert_eq!(state.next_deadline(), None);
    }

    #[test]
    fn phase_never_moves_backwards() {
        let t0 = Instant::now();
        let config = SpinnerConfig::from_signed(0, 0, 1, 0);
        let mut state = SpinnerState::new(&images(&["a"]), config, t0);

        state.tick(t0);
        assert_eq!(state.phase(), Phase::Fading);
        assert_eq!(state.report_image_loaded("a", t0), None);
        assert_eq!(state.phase(), Phase::Fading);
        assert_eq!(state.loaded_count(), 1);

        state.tick(t0);
        assert_eq!(state.phase(), Phase::Hidden);
        for step in 0..5 {
            assert_eq!(state.tick(t0 + ms(step * 100)), None);
            assert_eq!(state.report_image_loaded("a", t0 + ms(step)), None);
            assert_eq!(state.phase(), Phase::Hidden);
        }
        assert!(state.snapshot().data_fading());
        assert!(!state.phase().is_rendered());
    }

    #[test]
    fn phase_display_names() {
        assert_eq!(Phase::Visible.to_string(), "visible");
        assert_eq!(Phase::Fading.to_string(), "fading");
        assert_eq!(Phase::Hidden.to_string(), "hidden");
    }
}
