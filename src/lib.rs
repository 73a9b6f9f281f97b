//! Personal data form with local persistence and two derived views.
//!
//! Raw form input is validated into a [`person::PersonRecord`], written to a
//! namespaced key-value [`store`], and read back by the profile screen
//! (enriched with a [`genderize`] lookup) and the [`bmi`] screen.

pub mod bmi;
pub mod config;
pub mod genderize;
pub mod logging;
pub mod person;
pub mod store;
pub mod ui;
