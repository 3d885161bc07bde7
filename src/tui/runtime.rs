//! Dashboard application state.

use chrono::Local;

use crate::model::ConsumptionModel;

/// Which rendering the consumption chart uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// One line per outlet.
    Lines,
    /// House daily totals as bars.
    Bars,
}

impl ChartKind {
    /// Returns the other kind.
    pub fn cycled(self) -> Self {
        match self {
            Self::Lines => Self::Bars,
            Self::Bars => Self::Lines,
        }
    }

    /// Short label for the header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lines => "lines",
            Self::Bars => "bars",
        }
    }
}

/// TUI application state.
pub struct App {
    /// The household model being displayed.
    pub model: ConsumptionModel,
    /// Title shown in the header (preset or config file name).
    pub title: String,
    /// Active chart rendering.
    pub chart: ChartKind,
    /// Index of the outlet the cursor is on.
    pub selected: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
}

impl App {
    /// Wraps an already-built model for display.
    pub fn new(model: ConsumptionModel, title: &str) -> Self {
        Self {
            model,
            title: title.to_string(),
            chart: ChartKind::Lines,
            selected: 0,
            quit: false,
        }
    }

    /// Regenerates the simulated history ending at the current local date.
    pub fn refresh(&mut self) {
        self.model.simulate(Local::now().date_naive());
    }

    /// Moves the cursor down, stopping at the last outlet.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.model.outlet_count() {
            self.selected += 1;
        }
    }

    /// Moves the cursor up, stopping at the first outlet.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Toggles the outlet under the cursor.
    pub fn toggle_selected(&mut self) {
        // cursor is kept in range, so the toggle cannot fail
        let _ = self.model.toggle(self.selected);
    }

    /// Toggles an outlet by number key; out-of-range keys are ignored.
    pub fn toggle_at(&mut self, index: usize) {
        if index < self.model.outlet_count() {
            let _ = self.model.toggle(index);
        }
    }

    /// Switches between the line and bar chart.
    pub fn cycle_chart(&mut self) {
        self.chart = self.chart.cycled();
    }
}
