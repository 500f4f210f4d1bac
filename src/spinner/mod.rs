//! Page-load spinner
//!
//! Decides when the full-page loading overlay fades out: after a minimum
//! display time, once enough images have loaded or a maximum wait has
//! elapsed, followed by a fixed-length fade.

mod config;
mod controller;
mod state;

pub use config::SpinnerConfig;
pub use controller::SpinnerController;
pub use state::{ItemDescriptor, Phase, SpinnerSnapshot};
