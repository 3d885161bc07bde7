//! Authoritative dashboard state: outlets, simulated history, aggregates.

use chrono::NaiveDate;

use crate::config::{ConfigError, DashboardConfig};

use super::billing::BillingSummary;
use super::calendar::day_labels;
use super::outlet::Outlet;
use super::sampler::{SampleSource, UniformDraw, round2};
use super::types::{IndexError, OutletReading};

/// Consumption model owning all outlet state and simulated history.
///
/// One instance per session; construction is the only initialization path
/// and a reset is a new instance. The model holds, per outlet, a series of
/// exactly `days` daily kWh values (oldest first, ending "today") plus the
/// shared day-label sequence, and derives every displayed aggregate from
/// them on demand.
///
/// Aggregates gate on the *live* on/off flag: an outlet that is currently
/// off contributes zero to every historical day, not just today. Toggling
/// a switch therefore retroactively zeroes that outlet's entire monthly
/// history in all displayed totals.
pub struct ConsumptionModel {
    outlets: Vec<Outlet>,
    /// Per-outlet daily kWh history, same index set as `day_labels`.
    series: Vec<Vec<f64>>,
    day_labels: Vec<String>,
    days: usize,
    tariff_rate: f64,
    sampler: UniformDraw,
}

impl ConsumptionModel {
    /// Builds the model from a configuration and runs the first simulation.
    ///
    /// All outlets start switched on, named from the configured
    /// (label, device) pairs.
    ///
    /// # Arguments
    ///
    /// * `cfg` - Dashboard configuration
    /// * `today` - Calendar day the history window ends at
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the pair list length does not match
    /// `house.outlet_count`, or if the simulation window or draw range is
    /// unusable (`days == 0`, negative or inverted kWh bounds).
    pub fn new(cfg: &DashboardConfig, today: NaiveDate) -> Result<Self, ConfigError> {
        if cfg.outlets.len() != cfg.house.outlet_count {
            return Err(ConfigError {
                field: "outlets".into(),
                message: format!(
                    "expected {} (label, device) pairs, got {}",
                    cfg.house.outlet_count,
                    cfg.outlets.len()
                ),
            });
        }
        let s = &cfg.simulation;
        if s.days == 0 {
            return Err(ConfigError {
                field: "simulation.days".into(),
                message: "must be > 0".into(),
            });
        }
        if s.min_kwh < 0.0 || s.min_kwh > s.max_kwh {
            return Err(ConfigError {
                field: "simulation.min_kwh".into(),
                message: "must satisfy 0 <= min_kwh <= max_kwh".into(),
            });
        }

        let outlets: Vec<Outlet> = cfg
            .outlets
            .iter()
            .map(|names| Outlet::new(&names.label, &names.device))
            .collect();

        let mut model = Self {
            series: vec![vec![0.0; s.days]; outlets.len()],
            outlets,
            day_labels: Vec::new(),
            days: s.days,
            tariff_rate: cfg.house.tariff_rate,
            sampler: UniformDraw::new(s.min_kwh, s.max_kwh, s.seed),
        };
        model.simulate(today);
        Ok(model)
    }

    /// Regenerates the day labels and every outlet's series from the owned
    /// seeded source, discarding prior values.
    ///
    /// On/off flags and names are untouched; they belong to the outlets,
    /// not the series.
    pub fn simulate(&mut self, today: NaiveDate) {
        self.day_labels = day_labels(today, self.days);
        refill(&mut self.series, &mut self.sampler);
    }

    /// Same as [`ConsumptionModel::simulate`], drawing from an injected
    /// source instead of the owned one.
    ///
    /// Values are drawn outlet-major, oldest day first, and each drawn
    /// value is rounded to two decimals before storage.
    pub fn simulate_with(&mut self, today: NaiveDate, source: &mut dyn SampleSource) {
        self.day_labels = day_labels(today, self.days);
        refill(&mut self.series, source);
    }

    /// Flips the on/off flag of one outlet and returns the new state.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index` is out of range.
    pub fn toggle(&mut self, index: usize) -> Result<bool, IndexError> {
        self.check_index(index)?;
        Ok(self.outlets[index].toggle())
    }

    /// Overwrites one outlet's display strings. Empty strings are accepted.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index` is out of range.
    pub fn rename(
        &mut self,
        index: usize,
        label: impl Into<String>,
        device_name: impl Into<String>,
    ) -> Result<(), IndexError> {
        self.check_index(index)?;
        self.outlets[index].rename(label, device_name);
        Ok(())
    }

    /// Instantaneous reading for the live table: today's series value if the
    /// outlet is on, else 0.0.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index` is out of range.
    pub fn current_draw(&self, index: usize) -> Result<f64, IndexError> {
        self.check_index(index)?;
        if !self.outlets[index].is_on {
            return Ok(0.0);
        }
        Ok(self.series[index].last().copied().unwrap_or(0.0))
    }

    /// One live table row per outlet, in index order.
    pub fn readings(&self) -> Vec<OutletReading> {
        self.outlets
            .iter()
            .enumerate()
            .map(|(index, outlet)| OutletReading {
                index,
                label: outlet.label.clone(),
                device_name: outlet.device_name.clone(),
                is_on: outlet.is_on,
                current_draw_kwh: if outlet.is_on {
                    self.series[index].last().copied().unwrap_or(0.0)
                } else {
                    0.0
                },
            })
            .collect()
    }

    /// House consumption per day, outlets gated by their live on/off state.
    pub fn daily_totals(&self) -> Vec<f64> {
        (0..self.days)
            .map(|day| {
                self.outlets
                    .iter()
                    .zip(&self.series)
                    .filter(|(outlet, _)| outlet.is_on)
                    .map(|(_, series)| series[day])
                    .sum()
            })
            .collect()
    }

    /// House consumption over the whole window (kWh).
    pub fn monthly_total_kwh(&self) -> f64 {
        self.daily_totals().iter().sum()
    }

    /// House cost over the whole window: total kWh times the tariff.
    pub fn monthly_cost(&self) -> f64 {
        self.monthly_total_kwh() * self.tariff_rate
    }

    /// One outlet's consumption over the whole window: the series sum if the
    /// outlet is on, else 0.0.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index` is out of range.
    pub fn per_outlet_monthly_total(&self, index: usize) -> Result<f64, IndexError> {
        self.check_index(index)?;
        if !self.outlets[index].is_on {
            return Ok(0.0);
        }
        Ok(self.series[index].iter().sum())
    }

    /// Raw (ungated) series for one outlet, oldest day first.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index` is out of range.
    pub fn series(&self, index: usize) -> Result<&[f64], IndexError> {
        self.check_index(index)?;
        Ok(&self.series[index])
    }

    /// Series for one outlet as charts consume it: the raw values if the
    /// outlet is on, all zeros otherwise.
    ///
    /// # Errors
    ///
    /// Returns an `IndexError` if `index` is out of range.
    pub fn displayed_series(&self, index: usize) -> Result<Vec<f64>, IndexError> {
        self.check_index(index)?;
        if self.outlets[index].is_on {
            Ok(self.series[index].clone())
        } else {
            Ok(vec![0.0; self.days])
        }
    }

    /// Derives the billing summary from the current state.
    pub fn billing_summary(&self) -> BillingSummary {
        BillingSummary::from_model(self)
    }

    /// The shared day-label sequence, oldest first, ending "today".
    pub fn day_labels(&self) -> &[String] {
        &self.day_labels
    }

    /// All outlets in index order.
    pub fn outlets(&self) -> &[Outlet] {
        &self.outlets
    }

    /// Number of monitored outlets.
    pub fn outlet_count(&self) -> usize {
        self.outlets.len()
    }

    /// Length of the history window in days.
    pub fn days(&self) -> usize {
        self.days
    }

    /// Flat price per kWh used for billing.
    pub fn tariff_rate(&self) -> f64 {
        self.tariff_rate
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index < self.outlets.len() {
            Ok(())
        } else {
            Err(IndexError {
                index,
                len: self.outlets.len(),
            })
        }
    }
}

/// Refills every series in place, one rounded draw per outlet per day.
fn refill(series: &mut [Vec<f64>], source: &mut dyn SampleSource) {
    for outlet_series in series {
        for value in outlet_series.iter_mut() {
            *value = round2(source.draw_kwh());
        }
    }
}
