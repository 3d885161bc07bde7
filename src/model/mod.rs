//! Consumption model components for the outlet dashboard.

/// Billing summary derived from the model state.
pub mod billing;
/// Calendar-day label generation.
pub mod calendar;
/// Authoritative model state and operations.
pub mod consumption;
/// Per-outlet state: names and the on/off flag.
pub mod outlet;
/// Daily-draw sampling sources.
pub mod sampler;
pub mod types;

// Re-export the main types for convenience
pub use billing::BillingSummary;
pub use consumption::ConsumptionModel;
pub use outlet::Outlet;
pub use sampler::SampleSource;
pub use sampler::UniformDraw;
pub use types::IndexError;
pub use types::OutletReading;
