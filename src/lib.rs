//! KPIs Service
//!
//! A small HTTP service exposing read-only trading KPI endpoints
//! (equity, daily P&L, period P&L, drawdown) plus a combined endpoint
//! and a health check.
//!
//! ## Architecture
//!
//! ```text
//! HTTP request → Router → handler → KPI snapshot → JSON response
//! ```
//!
//! The KPI values are static placeholders. They will be replaced by
//! database-backed computation once the persistence layer lands; the
//! database settings in [`config::ServiceConfig`] are reserved for that.

pub mod config;
pub mod error;
pub mod kpi;
pub mod server;

#[cfg(test)]
mod config_tests;
