//! Reusable UI components

mod list;
mod spinner;

pub use list::StatefulList;
pub use spinner::Spinner;
