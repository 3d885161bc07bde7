//! File export for dashboard data.

pub mod export;
