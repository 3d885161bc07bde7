//! Shared model types: indexed-access errors and live table rows.

use std::fmt;

/// Out-of-range outlet reference.
///
/// Raised by every indexed model operation when `index` falls outside
/// `[0, len)`. A caller contract violation, never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexError {
    /// The offending index.
    pub index: usize,
    /// Number of outlets in the model.
    pub len: usize,
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "outlet index {} out of range (0..{})",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexError {}

/// One row of the live dashboard table.
#[derive(Debug, Clone)]
pub struct OutletReading {
    /// Stable outlet index.
    pub index: usize,
    /// Outlet display label.
    pub label: String,
    /// Name of the device behind the outlet.
    pub device_name: String,
    /// Whether the outlet is currently switched on.
    pub is_on: bool,
    /// Instantaneous reading: today's value if on, else 0.0 (kWh).
    pub current_draw_kwh: f64,
}

impl fmt::Display for OutletReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:<2} {:<20} {:<20} {:>4}  draw={:>5.2} kWh",
            self.index + 1,
            self.label,
            self.device_name,
            if self.is_on { "ON" } else { "OFF" },
            self.current_draw_kwh,
        )
    }
}
