//! Logging facilities for chart styling.
//!
//! The crate emits diagnostics through `tracing` and never installs a
//! subscriber. To see what the parser skipped, install one in the host
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("chartkit_style::parser=debug")
//!     .init();
//! ```
//!
//! Unknown properties and values a reader could not handle are logged at
//! `debug`. Malformed rules are logged at `warn`, as are malformed property
//! values when [`ParseOptions::report_malformed`] is set.
//!
//! [`ParseOptions::report_malformed`]: crate::parser::ParseOptions::report_malformed

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Crate-wide target.
    pub const STYLE: &str = "chartkit_style";
    /// Tokenizing, declaration and stylesheet parsing.
    pub const PARSER: &str = "chartkit_style::parser";
    /// Property registry construction.
    pub const REGISTRY: &str = "chartkit_style::registry";
    /// Rule matching and style resolution.
    pub const RESOLVE: &str = "chartkit_style::resolve";
}

