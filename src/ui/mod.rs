//! Presentation layer: screen state, navigation, notices and text views.

pub mod app;
pub mod form;
pub mod mvi;
pub mod navigation;
pub mod notice;
pub mod profile;
pub mod view;

pub use app::{App, NavOutcome};
pub use navigation::{Navigator, Route};
pub use notice::Notice;
