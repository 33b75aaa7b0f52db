//! Meal logging backend: calorie targets from body metrics, daily intake
//! totals and food history over an external record store.

pub mod app;
pub mod config;
pub mod dashboard;
pub mod entries;
pub mod error;
pub mod profiles;
pub mod state;
pub mod store;
