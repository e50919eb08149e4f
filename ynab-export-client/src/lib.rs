// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # `ynab-export` Client
//!
//! Configuration loading and the YNAB HTTP client.
//!
//! - [`Config`] - environment-driven configuration (token, budget id,
//!   currency, rate limits)
//! - [`YnabClient`] - typed client for the four read operations this tool
//!   uses (list budgets, budget detail, accounts, category groups)
//! - [`BudgetApi`] - the trait seam the exporter is written against, so
//!   tests can substitute a mock
//! - [`Throttle`] - client-side sliding-window rate limiting

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod throttle;

pub use api::BudgetApi;
pub use client::YnabClient;
pub use config::{Config, RateLimit};
pub use error::ClientError;
pub use throttle::Throttle;
