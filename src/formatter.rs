//! Tier selection, the formatting algorithm, and the `Formatter` facade.
//!
//! Three rendering paths per value:
//!
//! 1. **Plain** — below `min_suffix` (and always for zero): grouped
//!    decimal, optionally truncated toward zero above `min_round`.
//! 2. **Suffixed** — a suffix resolved for the value's tier: prefix at
//!    `sigfigs` significant digits, suffix appended with no separator.
//! 3. **Scientific** — no suffix available for the tier: exponential
//!    notation with `sigfigs - 1` fractional digits.

use tracing::debug;

use crate::error::ConfigError;
use crate::options::{Options, Overrides};
use crate::render;

/// Magnitude tier of a value: which suffix-table index it wants.
///
/// Tier 0 covers `|v| < 1000`, tier 1 covers thousands, tier 2 millions,
/// and so on. Sign-independent; zero and non-finite values are tier 0.
pub fn tier_index(value: f64) -> u32 {
    if value == 0.0 || !value.is_finite() {
        return 0;
    }
    let tier = (value.abs().log10() / 3.0).floor();
    if tier < 0.0 {
        0
    } else {
        tier as u32
    }
}

/// Render a value against fully resolved options. Never fails for
/// finite input.
fn format_value(value: f64, opts: &Options) -> String {
    if !value.is_finite() {
        // NaN and infinities never reach suffix resolution.
        return value.to_string();
    }

    // Zero takes the plain path under every configuration, even when
    // min_suffix is overridden to 0.
    if value == 0.0 || value.abs() < opts.min_suffix {
        let shown = if value.abs() >= opts.min_round {
            value.trunc()
        } else {
            value
        };
        return render::grouped_max_sigfigs(shown, opts.sigfigs);
    }

    let tier = tier_index(value);
    match opts.suffix_for(tier) {
        // Past the suffix table: scientific notation, not an error.
        None => render::exponential(value, opts.sigfigs),
        Some(sfx) => {
            let prefix = value / 1000f64.powi(tier as i32);
            format!("{}{}", render::to_sigfigs(prefix, opts.sigfigs), sfx)
        }
    }
}

// ─── Formatter ───────────────────────────────────────────────────────────────

/// Formatting facade carrying a persistent override layer.
///
/// The persistent overrides participate at caller precedence for every
/// call made through the instance; per-call overrides merge over them
/// field by field.
///
/// ```rust
/// use numberformat::{Formatter, Overrides};
///
/// let fmt = Formatter::with_overrides(Overrides::new().flavor("short"));
/// assert_eq!(fmt.format(1_230_000.0).unwrap(), "1.23M");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    overrides: Overrides,
}

impl Formatter {
    /// A formatter with no persistent overrides (pure defaults).
    pub fn new() -> Self {
        Self::default()
    }

    /// A formatter whose `overrides` apply to every call.
    pub fn with_overrides(overrides: Overrides) -> Self {
        Self { overrides }
    }

    /// The persistent override layer.
    pub fn overrides(&self) -> &Overrides {
        &self.overrides
    }

    /// Resolve effective options for one call.
    pub fn resolve(&self, call: &Overrides) -> Result<Options, ConfigError> {
        Options::resolve(&self.overrides, call)
    }

    /// The magnitude tier of a value.
    pub fn index(&self, value: f64) -> u32 {
        tier_index(value)
    }

    /// Format a value with this formatter's persistent overrides.
    pub fn format(&self, value: f64) -> Result<String, ConfigError> {
        self.format_with(value, &Overrides::new())
    }

    /// Format a value with additional per-call overrides.
    pub fn format_with(&self, value: f64, call: &Overrides) -> Result<String, ConfigError> {
        let opts = self.resolve(call)?;
        let rendered = format_value(value, &opts);
        debug!(value, rendered = %rendered, "formatted");
        Ok(rendered)
    }

    /// The suffix for a value's tier, without rendering the number.
    ///
    /// `Ok(None)` when the tier has no suffix available (the formatter
    /// would fall back to scientific notation).
    pub fn suffix(&self, value: f64) -> Result<Option<String>, ConfigError> {
        self.suffix_with(value, &Overrides::new())
    }

    /// Like [`Formatter::suffix`], with per-call overrides.
    pub fn suffix_with(
        &self,
        value: f64,
        call: &Overrides,
    ) -> Result<Option<String>, ConfigError> {
        let opts = self.resolve(call)?;
        Ok(opts.suffix_for(tier_index(value)))
    }
}

// ─── Convenience functions ───────────────────────────────────────────────────

/// Format with the default configuration.
pub fn format(value: f64) -> Result<String, ConfigError> {
    Formatter::new().format(value)
}

/// Format with per-call overrides.
pub fn format_with(value: f64, overrides: &Overrides) -> Result<String, ConfigError> {
    Formatter::new().format_with(value, overrides)
}

/// The suffix for a value's tier with the default configuration.
pub fn suffix(value: f64) -> Result<Option<String>, ConfigError> {
    Formatter::new().suffix(value)
}

/// Like [`suffix`], with per-call overrides.
pub fn suffix_with(value: f64, overrides: &Overrides) -> Result<Option<String>, ConfigError> {
    Formatter::new().suffix_with(value, overrides)
}

/// The magnitude tier of a value.
pub fn index(value: f64) -> u32 {
    tier_index(value)
}
