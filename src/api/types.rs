//! API request and response types.

use serde::{Deserialize, Serialize};

use crate::model::billing::{BillLine, BillingSummary};
use crate::model::types::OutletReading;

/// One live table row.
#[derive(Debug, Serialize)]
pub struct OutletRow {
    /// Stable outlet index.
    pub index: usize,
    /// Outlet display label.
    pub label: String,
    /// Name of the device behind the outlet.
    pub device: String,
    /// Whether the outlet is currently switched on.
    pub is_on: bool,
    /// Instantaneous reading (kWh); zero when off.
    pub current_draw_kwh: f64,
}

impl From<&OutletReading> for OutletRow {
    fn from(r: &OutletReading) -> Self {
        Self {
            index: r.index,
            label: r.label.clone(),
            device: r.device_name.clone(),
            is_on: r.is_on,
            current_draw_kwh: r.current_draw_kwh,
        }
    }
}

/// One outlet's chart series.
#[derive(Debug, Serialize)]
pub struct OutletSeries {
    /// Stable outlet index.
    pub index: usize,
    /// Outlet display label.
    pub label: String,
    /// Whether the outlet is currently switched on.
    pub is_on: bool,
    /// Displayed (state-gated) daily values, oldest first.
    pub values: Vec<f64>,
}

/// Chart payload: shared day labels plus every outlet's displayed series.
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    /// Day labels, oldest first, ending "today".
    pub days: Vec<String>,
    /// Per-outlet displayed series in index order.
    pub outlets: Vec<OutletSeries>,
    /// House consumption per day (state-gated).
    pub house_daily_total: Vec<f64>,
}

/// One outlet's line on the billing response.
#[derive(Debug, Serialize)]
pub struct BillLineDto {
    /// Stable outlet index.
    pub index: usize,
    /// Outlet display label.
    pub label: String,
    /// Name of the device behind the outlet.
    pub device: String,
    /// Window consumption (kWh); zero when off.
    pub total_kwh: f64,
    /// Window cost.
    pub total_cost: f64,
}

impl From<&BillLine> for BillLineDto {
    fn from(line: &BillLine) -> Self {
        Self {
            index: line.index,
            label: line.label.clone(),
            device: line.device_name.clone(),
            total_kwh: line.total_kwh,
            total_cost: line.total_cost,
        }
    }
}

/// Billing summary response.
#[derive(Debug, Serialize)]
pub struct BillingResponse {
    /// Per-outlet lines in index order.
    pub lines: Vec<BillLineDto>,
    /// House consumption over the window (kWh).
    pub house_kwh: f64,
    /// House cost over the window.
    pub house_cost: f64,
    /// Flat price per kWh.
    pub tariff_rate: f64,
}

impl From<&BillingSummary> for BillingResponse {
    fn from(summary: &BillingSummary) -> Self {
        Self {
            lines: summary.lines.iter().map(BillLineDto::from).collect(),
            house_kwh: summary.house_kwh,
            house_cost: summary.house_cost,
            tariff_rate: summary.tariff_rate,
        }
    }
}

/// Rename request body.
#[derive(Debug, Deserialize)]
pub struct RenameRequest {
    /// New outlet label.
    pub label: String,
    /// New device name.
    pub device: String,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
