//! Shared test fixtures for integration tests.

use chrono::NaiveDate;

use outlet_sim::config::DashboardConfig;
use outlet_sim::model::{ConsumptionModel, SampleSource};

/// Fixed "today" used across integration tests (2025-03-15).
pub fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 15).expect("valid test date")
}

/// Baseline model (5 outlets, tariff 80, 30 days, seed 42) at the fixed date.
pub fn baseline_model() -> ConsumptionModel {
    ConsumptionModel::new(&DashboardConfig::baseline(), fixed_today()).expect("baseline builds")
}

/// Source that always draws the same value.
pub struct Constant(pub f64);

impl SampleSource for Constant {
    fn draw_kwh(&mut self) -> f64 {
        self.0
    }
}

/// Source replaying a fixed sequence, then zeros.
///
/// The model draws outlet-major, oldest day first, so the first `days`
/// entries land on outlet 0, the next `days` on outlet 1, and so on.
pub struct Replay {
    values: Vec<f64>,
    next: usize,
}

impl Replay {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl SampleSource for Replay {
    fn draw_kwh(&mut self) -> f64 {
        let v = self.values.get(self.next).copied().unwrap_or(0.0);
        self.next += 1;
        v
    }
}
