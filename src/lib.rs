//! # numberformat
//!
//! Configurable human-readable number formatting for UI contexts (games,
//! dashboards): magnitude suffixes, scientific and engineering notation,
//! grouped plain decimals.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Data** — static suffix tables ([`suffix`])
//! 2. **Options** — four-layer option resolution: defaults < format
//!    preset < flavor preset < caller overrides ([`options`])
//! 3. **Rendering** — pure numeric-to-string helpers ([`render`])
//! 4. **Formatter** — tier selection, the three-way
//!    plain/suffixed/scientific algorithm, and the facade ([`formatter`])
//!
//! ## Quick start
//!
//! ```rust
//! use numberformat::prelude::*;
//!
//! assert_eq!(numberformat::format(99_999.0).unwrap(), "99,999");
//! assert_eq!(numberformat::format(1_500_000.0).unwrap(), "1.5000 million");
//!
//! let short = Formatter::with_overrides(Overrides::new().flavor("short"));
//! assert_eq!(short.format(1_230_000.0).unwrap(), "1.23M");
//!
//! let sci = Overrides::new().format("scientific");
//! assert_eq!(numberformat::format_with(1_000_000.0, &sci).unwrap(), "1.0000e6");
//! ```

// ── Layer 1: Data ────────────────────────────────────────────────────────────

/// Static suffix-group tables.
pub mod suffix;

// ── Layer 2: Options ─────────────────────────────────────────────────────────

/// Option layers, merging, and resolution.
pub mod options;

/// Configuration resolution errors.
pub mod error;

// ── Layer 3: Rendering ───────────────────────────────────────────────────────

/// Pure numeric rendering helpers.
pub mod render;

// ── Layer 4: Formatter ───────────────────────────────────────────────────────

/// Tier selection, formatting algorithm, and the `Formatter` facade.
pub mod formatter;

pub use error::ConfigError;
pub use formatter::{format, format_with, index, suffix, suffix_with, Formatter};
pub use options::{Options, Overrides, PresetTable, SuffixFn};

pub mod prelude {
    pub use crate::error::ConfigError;
    pub use crate::formatter::{format, format_with, index, Formatter};
    pub use crate::options::{Options, Overrides, PresetTable, SuffixFn};
    pub use crate::suffix::SuffixGroups;
}
