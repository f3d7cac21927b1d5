//! Logging conventions for Horizon Cascade.
//!
//! The workspace uses the `tracing` crate for structured instrumentation. To
//! see logs, install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event in the workspace carries an explicit `target:` so subsystems
//! can be filtered individually, e.g.
//! `RUST_LOG=horizon_cascade::layout::reflow=trace`.

/// Span names used throughout Horizon Cascade for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Balance reflow pass span.
    pub const REFLOW: &str = "horizon_cascade::reflow";
    /// Signal emission span.
    pub const SIGNAL: &str = "horizon_cascade::signal";
    /// Frame queue drain span.
    pub const FRAME: &str = "horizon_cascade::frame";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "horizon_cascade_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_cascade_core::signal";
    /// Frame queue target.
    pub const FRAME: &str = "horizon_cascade_core::frame";
    /// Configuration resolution target.
    pub const CONFIG: &str = "horizon_cascade::config";
    /// Slot classification target.
    pub const SLOT: &str = "horizon_cascade::slot";
    /// Column model and initializer target.
    pub const LAYOUT: &str = "horizon_cascade::layout";
    /// Balance reflow engine target.
    pub const REFLOW: &str = "horizon_cascade::layout::reflow";
    /// Sticky header emulation target.
    pub const STICKY: &str = "horizon_cascade::sticky";
    /// Touch gesture tracking target.
    pub const GESTURE: &str = "horizon_cascade::gesture";
    /// View facade target.
    pub const VIEW: &str = "horizon_cascade::view";
}
