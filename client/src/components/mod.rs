//! Reusable UI components shared across pages.

pub mod loader;
pub mod toaster;
