//! Timer-driven controller for the page spinner.
//!
//! The controller wraps a `SpinnerState` behind a mutex. Load signals are
//! evaluated synchronously on the caller's side; a single timer task sleeps
//! until the state's next deadline (minimum floor, maximum ceiling, or end of
//! the fade) and evaluates again. Every change is published on a watch
//! channel so the render loop can read the latest snapshot.

use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::config::SpinnerConfig;
use super::state::{ItemDescriptor, Phase, SpinnerSnapshot, SpinnerState};

/// State shared between the controller handle and its timer task
struct Shared {
    state: Mutex<SpinnerState>,
    /// Wakes the timer task when a deadline may have moved
    wake: Notify,
    published: watch::Sender<SpinnerSnapshot>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, SpinnerState> {
        // The state holds no invariants a panicking reader could break
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn publish(&self, state: &SpinnerState) {
        let snapshot = state.snapshot();
        self.published.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}

/// Owns the overlay lifecycle for one page mount
pub struct SpinnerController {
    shared: Arc<Shared>,
    timer: Option<JoinHandle<()>>,
}

impl SpinnerController {
    /// Start a run for `items`. Must be called inside a tokio runtime.
    pub fn start(items: &[ItemDescriptor], config: SpinnerConfig) -> Self {
        let state = SpinnerState::new(items, config, Instant::now());
        let (published, _) = watch::channel(state.snapshot());

        log::debug!(
            "Page spinner started: {} image items, threshold {}, min {}ms, max {}ms, fade {}ms",
            state.image_count(),
            state.effective_threshold(),
            config.min_display_ms,
            config.max_wait_ms,
            config.fade_ms
        );

        let shared = Arc::new(Shared {
            state: Mutex::new(state),
            wake: Notify::new(),
            published,
        });

        let timer = tokio::spawn(run_timer(shared.clone()));

        Self {
            shared,
            timer: Some(timer),
        }
    }

    /// Record that the image for `id` finished loading
    pub fn report_image_loaded(&self, id: &str) {
        {
            let mut state = self.shared.lock();
            state.report_image_loaded(id, Instant::now());
            self.shared.publish(&state);
        }
        self.shared.wake.notify_one();
    }

    pub fn snapshot(&self) -> SpinnerSnapshot {
        *self.shared.published.borrow()
    }

    pub fn phase(&self) -> Phase {
        self.snapshot().phase
    }

    /// Subscribe to snapshot changes
    pub fn subscribe(&self) -> watch::Receiver<SpinnerSnapshot> {
        self.shared.published.subscribe()
    }

    /// Whether the timer task is still scheduled
    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Cancel pending timers. The published phase is frozen where it is.
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            if !timer.is_finished() {
                log::debug!("Page spinner cancelled in phase {}", self.phase());
            }
            timer.abort();
        }
    }
}

impl Drop for SpinnerController {
    fn drop(&mut self) {
        self.cancel();
    }
}

async fn run_timer(shared: Arc<Shared>) {
    loop {
        let next = shared.lock().next_deadline();
        let Some(deadline) = next else {
            break;
        };

        tokio::select! {
            _ = tokio::time::sleep_until(deadline) => {
                let mut state = shared.lock();
                state.tick(Instant::now());
                shared.publish(&state);
            }
            _ = shared.wake.notified() => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn images(ids: &[&str]) -> Vec<ItemDescriptor> {
        ids.iter().map(|id| ItemDescriptor::new(*id, true)).collect()
    }

    /// Let the timer task observe the current (paused) clock
    async fn settle() {
        for _ in 0..5 {
            tokio::task::yield_now().await;
        }
    }

    async fn advance(n: u64) {
        tokio::time::advance(ms(n)).await;
        settle().await;
    }

    #[tokio::test(start_paused = true)]
    async fn threshold_met_before_timeout() {
        let config = SpinnerConfig::from_signed(10, 5000, 2, 400);
        let controller = SpinnerController::start(&images(&["a", "b"]), config);
        settle().await;

        advance(15).await;
        assert_eq!(controller.phase(), Phase::Visible);

        controller.report_image_loaded("a");
        assert_eq!(controller.phase(), Phase::Visible);
        controller.report_image_loaded("b");
        assert_eq!(controller.phase(), Phase::Fading);
        assert!(controller.snapshot().data_fading());
    }

    #[tokio::test(start_paused = true)]
    async fn loads_before_floor_fade_at_floor() {
        let config = SpinnerConfig::from_signed(100, 5000, 2, 400);
        let controller = SpinnerController::start(&images(&["a", "b"]), config);
        settle().await;

        controller.report_image_loaded("a");
        controller.report_image_loaded("b");
        settle().await;

        advance(90).await;
        assert_eq!(controller.phase(), Phase::Visible);
        advance(20).await;
        assert_eq!(controller.phase(), Phase::Fading);
    }

    #[tokio::test(start_paused = true)]
    async fn timeout_dominates_when_images_never_complete() {
        let config = SpinnerConfig::from_signed(10, 50, 5, 400);
        let controller = SpinnerController::start(&images(&["a", "b", "c", "d"]), config);
        settle().await;

        advance(40).await;
        assert_eq!(controller.phase(), Phase::Visible);
        advance(20).await;
        assert_eq!(controller.phase(), Phase::Fading);
    }

    #[tokio::test(start_paused = true)]
    async fn minimum_floor_dominates() {
        let config = SpinnerConfig::from_signed(500, 100, 0, 400);
        let controller = SpinnerController::start(&[], config);
        settle().await;

        advance(100).await;
        assert_eq!(controller.phase(), Phase::Visible);
        advance(300).await;
        assert_eq!(controller.phase(), Phase::Visible);
        advance(101).await;
        assert_eq!(controller.phase(), Phase::Fading);
    }

    #[tokio::test(start_paused = true)]
    async fn idempotent_counting() {
        let controller = SpinnerController::start(&images(&["a", "b"]), SpinnerConfig::default());
        for _ in 0..3 {
            controller.report_image_loaded("a");
        }
        assert_eq!(controller.snapshot().loaded_count, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn effective_threshold_clamps_to_available_images() {
        let config = SpinnerConfig::from_signed(10, 5000, 5, 400);
        let controller = SpinnerController::start(&images(&["a", "b"]), config);
        settle().await;
        assert_eq!(controller.snapshot().effective_threshold, 2);

        advance(20).await;
        controller.report_image_loaded("a");
        assert_eq!(controller.phase(), Phase::Visible);
        controller.report_image_loaded("b");
        assert_eq!(controller.phase(), Phase::Fading);
    }

    #[tokio::test(start_paused = true)]
    async fn fade_duration_honored() {
        let config = SpinnerConfig::from_signed(0, 5000, 1, 400);
        let controller = SpinnerController::start(&images(&["a"]), config);
        settle().await;

        advance(10).await;
        controller.report_image_loaded("a");
        assert_eq!(controller.phase(), Phase::Fading);
        settle().await;

        advance(399).await;
        assert_eq!(controller.phase(), Phase::Fading);
        advance(2).await;
        assert_eq!(controller.phase(), Phase::Hidden);
        settle().await;
        assert!(!controller.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn zero_fade_hides_on_next_timer_turn() {
        let config = SpinnerConfig::from_signed(0, 0, 0, 0);
        let controller = SpinnerController::start(&[], config);
        let mut rx = controller.subscribe();

        let mut seen = Vec::new();
        while rx.changed().await.is_ok() {
            let phase = rx.borrow_and_update().phase;
            seen.push(phase);
            if phase == Phase::Hidden {
                break;
            }
        }
        assert_eq!(seen.last(), Some(&Phase::Hidden));
        assert_eq!(controller.phase(), Phase::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_never_see_phase_go_backwards() {
        let config = SpinnerConfig::from_signed(20, 60, 3, 30);
        let controller = SpinnerController::start(&images(&["a", "b", "c"]), config);
        let mut rx = controller.subscribe();

        let watcher = tokio::spawn(async move {
            let mut last = Phase::Visible;
            while rx.changed().await.is_ok() {
                let phase = rx.borrow_and_update().phase;
                let rank = |p: Phase| match p {
                    Phase::Visible => 0,
                    Phase::Fading => 1,
                    Phase::Hidden => 2,
                };
                assert!(rank(phase) >= rank(last), "{} after {}", phase, last);
                last = phase;
                if phase == Phase::Hidden {
                    break;
                }
            }
            last
        });

        for (step, id) in ["a", "a", "b", "x", "c", "c"].iter().enumerate() {
            advance(step as u64 * 7).await;
            controller.report_image_loaded(id);
        }
        advance(200).await;

        assert_eq!(watcher.await.unwrap(), Phase::Hidden);
        controller.report_image_loaded("a");
        assert_eq!(controller.phase(), Phase::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_controller_cancels_timers() {
        let config = SpinnerConfig::from_signed(10, 20, 1, 10);
        let controller = SpinnerController::start(&images(&["a"]), config);
        let mut rx = controller.subscribe();
        settle().await;

        drop(controller);
        advance(100).await;

        assert_eq!(rx.borrow_and_update().phase, Phase::Visible);
        assert!(rx.changed().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_freezes_phase() {
        let config = SpinnerConfig::from_signed(0, 5000, 1, 400);
        let mut controller = SpinnerController::start(&images(&["a"]), config);
        settle().await;

        controller.report_image_loaded("a");
        assert_eq!(controller.phase(), Phase::Fading);
        controller.cancel();
        assert!(!controller.is_running());

        advance(1000).await;
        assert_eq!(controller.phase(), Phase::Fading);
    }
}
