//! forewarn-analytics
//!
//! Read-side analytics over stored diagnoses: benchmark comparison against
//! the built-in industry profiles, and period-over-period trend analysis.
//! Pure functions throughout; nothing here talks to AWS.

pub mod benchmark;
pub mod profiles;
pub mod trend;

pub use benchmark::{compare, estimate_percentile, percent_difference, UserMetrics};
pub use profiles::profile_for;
pub use trend::{analyze, analyze_history};
