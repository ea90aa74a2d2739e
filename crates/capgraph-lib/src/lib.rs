//! Core library for the WAN capacity graph CLI
//!
//! This crate provides:
//! - Fuzzy resolution of a site name against the tenant inventory
//! - UTC time-window construction for historical queries
//! - Partitioning of per-direction capacity samples
//! - Fixed-height ASCII chart rendering
//! - A thin client for the controller's REST endpoints

pub mod chart;
pub mod chooser;
pub mod client;
pub mod error;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod resolve;
pub mod series;
pub mod window;

pub use chart::{render, render_baseline, ChartConfig};
pub use error::{Error, Result};
pub use models::*;
pub use resolve::{best_match, SiteMatch};
pub use series::{partition, PartitionedSeries};
pub use window::TimeWindow;
