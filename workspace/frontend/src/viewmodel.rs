//! Pure view derivations. Everything here is deterministic given its
//! inputs, so the dashboard copy can be unit tested without a browser.

mod badges;
mod drivers;
mod stats;
mod summary;
mod trajectory;

pub use badges::{risk_badge, trend_badge, RiskBadge, TrendBadge};
pub use drivers::{key_drivers, DriverCard};
pub use stats::{custom_stat_panels, default_stat_panels, StatPanel};
pub use summary::{
    custom_outlook, custom_summary, default_summary, predicted_change, ChangeIndicator,
};
pub use trajectory::{trajectory_series, TrajectorySeries};

use std::fmt;

/// Why a derivation could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewError {
    /// The baseline divisor (last historical value or previous-week cases)
    /// is zero, or the required series is empty. Returned instead of
    /// propagating NaN/Infinity into user-facing copy.
    MissingBaseline,
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewError::MissingBaseline => write!(f, "baseline case count is missing or zero"),
        }
    }
}
