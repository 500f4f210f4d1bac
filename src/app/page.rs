//! One mount of the gallery page
//!
//! A mount owns the page spinner controller, the image load tasks that feed
//! it, and the channel between them. Dropping the mount cancels all three,
//! so a reload or a filter change never lets an old load count towards the
//! new spinner.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::config::Config;
use crate::gallery::{spawn_image_loads, Gallery, ImageLoad, TimelineItem, INITIAL_WINDOW};
use crate::spinner::{SpinnerController, SpinnerSnapshot};

use super::types::LoadStats;

pub struct PageMount {
    spinner: SpinnerController,
    /// Spinner changes, so the view redraws as soon as the phase moves
    spinner_rx: watch::Receiver<SpinnerSnapshot>,
    image_rx: mpsc::UnboundedReceiver<ImageLoad>,
    image_tasks: Vec<JoinHandle<()>>,
    stats: LoadStats,
    count_failed_loads: bool,
}

impl PageMount {
    /// Mount the page for `timeline`, starting the spinner and the loads for
    /// the initial window
    pub fn mount(gallery: &Gallery, timeline: &[TimelineItem], config: &Config) -> Self {
        let descriptors = Gallery::initial_descriptors(timeline);
        let spinner = SpinnerController::start(&descriptors, config.spinner);
        let spinner_rx = spinner.subscribe();

        let (tx, image_rx) = mpsc::unbounded_channel();
        let window = timeline
            .iter()
            .take(INITIAL_WINDOW)
            .filter_map(TimelineItem::artwork);
        let image_tasks = spawn_image_loads(window, gallery.image_root(), tx);

        log::info!(
            "Page mounted: {} timeline entries, {} image loads started",
            timeline.len(),
            image_tasks.len()
        );

        Self {
            spinner,
            spinner_rx,
            image_rx,
            image_tasks,
            stats: LoadStats::default(),
            count_failed_loads: config.count_failed_loads,
        }
    }

    /// Wait until an image load finishes (and forward it to the spinner) or
    /// the spinner publishes a change. Pends forever once neither can happen.
    pub async fn next_update(&mut self) {
        tokio::select! {
            Some(load) = self.image_rx.recv() => self.apply(load),
            Ok(()) = self.spinner_rx.changed() => {
                self.spinner_rx.borrow_and_update();
            }
            else => std::future::pending::<()>().await,
        }
    }

    /// Wait for the next image load and forward it. Returns `false` once
    /// every load task has finished and nothing is left to receive.
    #[cfg(test)]
    pub async fn next_image_load(&mut self) -> bool {
        match self.image_rx.recv().await {
            Some(load) => {
                self.apply(load);
                true
            }
            None => false,
        }
    }

    fn apply(&mut self, load: ImageLoad) {
        match load {
            ImageLoad::Loaded { id } => {
                self.stats.loaded += 1;
                self.spinner.report_image_loaded(&id);
            }
            ImageLoad::Failed { id, reason } => {
                self.stats.failed += 1;
                log::debug!("Image {} failed: {}", id, reason);
                if self.count_failed_loads {
                    self.spinner.report_image_loaded(&id);
                }
            }
        }
    }

    pub fn spinner(&self) -> SpinnerSnapshot {
        *self.spinner_rx.borrow()
    }

    pub fn load_stats(&self) -> LoadStats {
        self.stats
    }
}

impl Drop for PageMount {
    fn drop(&mut self) {
        for task in self.image_tasks.drain(..) {
            task.abort();
        }
        self.spinner.cancel();
    }
}
