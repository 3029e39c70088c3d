//! UI layer: app shell for the SWOT board screen.

pub mod app;

pub use app::SwotBoardApp;
