//! Post-hoc billing aggregation from the model state.

use std::fmt;

use super::consumption::ConsumptionModel;

/// One outlet's line on the bill.
#[derive(Debug, Clone)]
pub struct BillLine {
    /// Stable outlet index.
    pub index: usize,
    /// Outlet display label.
    pub label: String,
    /// Name of the device behind the outlet.
    pub device_name: String,
    /// Window consumption (kWh), zero when the outlet is off.
    pub total_kwh: f64,
    /// Window cost: `total_kwh` times the tariff.
    pub total_cost: f64,
}

/// Billing summary for the simulated month.
///
/// Derived, never stored: computed in one pass from the model so the house
/// totals are the sum of the lines by construction. The same live-state
/// gating as every other aggregate applies, so lines for outlets that are
/// currently off read zero.
#[derive(Debug, Clone)]
pub struct BillingSummary {
    /// Per-outlet lines in index order.
    pub lines: Vec<BillLine>,
    /// House consumption over the window (kWh).
    pub house_kwh: f64,
    /// House cost over the window.
    pub house_cost: f64,
    /// Flat price per kWh the costs were computed with.
    pub tariff_rate: f64,
}

impl BillingSummary {
    /// Computes the summary from the current model state.
    pub fn from_model(model: &ConsumptionModel) -> Self {
        let tariff_rate = model.tariff_rate();
        let mut house_kwh = 0.0;

        let lines: Vec<BillLine> = model
            .outlets()
            .iter()
            .enumerate()
            .map(|(index, outlet)| {
                let total_kwh = if outlet.is_on {
                    model
                        .series(index)
                        .map(|series| series.iter().sum())
                        .unwrap_or(0.0)
                } else {
                    0.0
                };
                house_kwh += total_kwh;
                BillLine {
                    index,
                    label: outlet.label.clone(),
                    device_name: outlet.device_name.clone(),
                    total_kwh,
                    total_cost: total_kwh * tariff_rate,
                }
            })
            .collect();

        Self {
            lines,
            house_kwh,
            house_cost: house_kwh * tariff_rate,
            tariff_rate,
        }
    }
}

impl fmt::Display for BillingSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Billing Summary ---")?;
        for line in &self.lines {
            writeln!(
                f,
                "{:<20} {:<20} {:>8.2} kWh  ${:>10.0}",
                line.label, line.device_name, line.total_kwh, line.total_cost
            )?;
        }
        write!(
            f,
            "House total:         {:>8.2} kWh  ${:>10.0}  (at {}/kWh)",
            self.house_kwh, self.house_cost, self.tariff_rate
        )
    }
}
