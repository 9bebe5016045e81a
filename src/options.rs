//! Option layers, merging, and resolution.
//!
//! Four layers, lowest to highest precedence: built-in defaults, the
//! named format preset, the named flavor preset, and caller overrides
//! (a `Formatter`'s persistent overrides merged with per-call
//! overrides). Merging is shallow and per field: a later layer replaces
//! only the fields it defines.
//!
//! Format and flavor are independent axes. Format selects the suffixing
//! scheme a UI exposes to end users (standard, scientific, hybrid,
//! engineering); flavor controls verbosity and precision (long-form vs
//! short-form suffixes, sigfig count).

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use tracing::trace;

use crate::error::ConfigError;
use crate::suffix::{self, SuffixGroups};

/// Pluggable suffix resolution: tier index plus the *resolved* options.
///
/// `Some(s)` is a suffix, possibly empty. `None` means no suffix is
/// available at that tier, and the formatter falls back to scientific
/// notation. The two cases are distinct on purpose: an empty string is a
/// deliberate blank suffix, not a missing one.
pub type SuffixFn = Arc<dyn Fn(u32, &Options) -> Option<String> + Send + Sync>;

/// Named partial-option presets (the `formats` and `flavors` tables).
pub type PresetTable = HashMap<String, Overrides>;

// ─── Overrides ───────────────────────────────────────────────────────────────

/// One partial-configuration layer: every field optional.
///
/// Used for the built-in presets, a `Formatter`'s persistent overrides,
/// and per-call overrides alike.
#[derive(Clone, Default)]
pub struct Overrides {
    pub format: Option<String>,
    pub flavor: Option<String>,
    pub formats: Option<PresetTable>,
    pub flavors: Option<PresetTable>,
    pub suffix_group: Option<String>,
    pub suffix_groups: Option<SuffixGroups>,
    /// Direct override of the resolved suffix sequence, bypassing group
    /// lookup.
    pub suffixes: Option<Vec<String>>,
    pub suffix_fn: Option<SuffixFn>,
    pub min_suffix: Option<f64>,
    pub min_round: Option<f64>,
    pub sigfigs: Option<u32>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format(mut self, name: impl Into<String>) -> Self {
        self.format = Some(name.into());
        self
    }

    pub fn flavor(mut self, name: impl Into<String>) -> Self {
        self.flavor = Some(name.into());
        self
    }

    pub fn formats(mut self, table: PresetTable) -> Self {
        self.formats = Some(table);
        self
    }

    pub fn flavors(mut self, table: PresetTable) -> Self {
        self.flavors = Some(table);
        self
    }

    pub fn suffix_group(mut self, name: impl Into<String>) -> Self {
        self.suffix_group = Some(name.into());
        self
    }

    pub fn suffix_groups(mut self, groups: SuffixGroups) -> Self {
        self.suffix_groups = Some(groups);
        self
    }

    pub fn suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = Some(suffixes);
        self
    }

    pub fn suffix_fn(
        mut self,
        f: impl Fn(u32, &Options) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.suffix_fn = Some(Arc::new(f));
        self
    }

    pub fn min_suffix(mut self, value: f64) -> Self {
        self.min_suffix = Some(value);
        self
    }

    pub fn min_round(mut self, value: f64) -> Self {
        self.min_round = Some(value);
        self
    }

    pub fn sigfigs(mut self, count: u32) -> Self {
        self.sigfigs = Some(count);
        self
    }

    /// Field-level merge of two override layers; fields set in `other`
    /// win.
    pub fn merged_with(&self, other: &Overrides) -> Overrides {
        Overrides {
            format: other.format.clone().or_else(|| self.format.clone()),
            flavor: other.flavor.clone().or_else(|| self.flavor.clone()),
            formats: other.formats.clone().or_else(|| self.formats.clone()),
            flavors: other.flavors.clone().or_else(|| self.flavors.clone()),
            suffix_group: other
                .suffix_group
                .clone()
                .or_else(|| self.suffix_group.clone()),
            suffix_groups: other
                .suffix_groups
                .clone()
                .or_else(|| self.suffix_groups.clone()),
            suffixes: other.suffixes.clone().or_else(|| self.suffixes.clone()),
            suffix_fn: other.suffix_fn.clone().or_else(|| self.suffix_fn.clone()),
            min_suffix: other.min_suffix.or(self.min_suffix),
            min_round: other.min_round.or(self.min_round),
            sigfigs: other.sigfigs.or(self.sigfigs),
        }
    }

    /// Overlay this layer onto resolved options, replacing only the
    /// fields it defines.
    fn apply_to(&self, opts: &mut Options) {
        if let Some(v) = &self.format {
            opts.format = v.clone();
        }
        if let Some(v) = &self.flavor {
            opts.flavor = v.clone();
        }
        if let Some(v) = &self.formats {
            opts.formats = v.clone();
        }
        if let Some(v) = &self.flavors {
            opts.flavors = v.clone();
        }
        if let Some(v) = &self.suffix_group {
            opts.suffix_group = v.clone();
        }
        if let Some(v) = &self.suffix_groups {
            opts.suffix_groups = v.clone();
        }
        if let Some(v) = &self.suffixes {
            opts.suffixes = Some(v.clone());
        }
        if let Some(v) = &self.suffix_fn {
            opts.suffix_fn = Some(v.clone());
        }
        if let Some(v) = self.min_suffix {
            opts.min_suffix = v;
        }
        if let Some(v) = self.min_round {
            opts.min_round = v;
        }
        if let Some(v) = self.sigfigs {
            opts.sigfigs = v;
        }
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("format", &self.format)
            .field("flavor", &self.flavor)
            .field("suffix_group", &self.suffix_group)
            .field("suffixes", &self.suffixes)
            .field("suffix_fn", &self.suffix_fn.as_ref().map(|_| "<fn>"))
            .field("min_suffix", &self.min_suffix)
            .field("min_round", &self.min_round)
            .field("sigfigs", &self.sigfigs)
            .finish_non_exhaustive()
    }
}

// ─── Options ─────────────────────────────────────────────────────────────────

/// The effective configuration for one formatting call, fully merged.
///
/// Derived fresh per call by [`Options::resolve`]; never stored
/// long-term.
#[derive(Clone)]
pub struct Options {
    pub suffix_groups: SuffixGroups,
    pub suffix_group: String,
    pub suffixes: Option<Vec<String>>,
    /// Custom suffix resolution; `None` uses the table lookup.
    pub suffix_fn: Option<SuffixFn>,
    /// Below this absolute value, plain grouped decimal is used ("99,999"
    /// is prettier than "99.9K").
    pub min_suffix: f64,
    /// At or above this absolute value, plain decimals are truncated to
    /// the integer boundary before rendering.
    pub min_round: f64,
    pub sigfigs: u32,
    pub format: String,
    pub flavor: String,
    pub formats: PresetTable,
    pub flavors: PresetTable,
}

impl Options {
    /// The built-in defaults: standard format, long flavor, full suffix
    /// tables. Constructed once, never mutated.
    pub fn defaults() -> &'static Options {
        static DEFAULTS: OnceLock<Options> = OnceLock::new();
        DEFAULTS.get_or_init(|| Options {
            suffix_groups: suffix::groups().clone(),
            suffix_group: "long".to_string(),
            suffixes: None,
            suffix_fn: None,
            min_suffix: 1e5,
            min_round: 0.0,
            sigfigs: 3,
            format: "standard".to_string(),
            flavor: "long".to_string(),
            formats: builtin_formats(),
            flavors: builtin_flavors(),
        })
    }

    /// Merge `instance` and `call` overrides over the defaults and the
    /// named presets.
    ///
    /// The combined caller layer is applied last, so caller-set fields
    /// are never shadowed by preset expansion — including the
    /// `format`/`flavor` selection itself and the preset tables used to
    /// look them up.
    pub fn resolve(instance: &Overrides, call: &Overrides) -> Result<Options, ConfigError> {
        let defaults = Options::defaults();
        let caller = instance.merged_with(call);

        let format_name = caller
            .format
            .clone()
            .unwrap_or_else(|| defaults.format.clone());
        let format_table = caller.formats.as_ref().unwrap_or(&defaults.formats);
        let format_preset = format_table
            .get(&format_name)
            .ok_or_else(|| ConfigError::UnknownFormat(format_name.clone()))?
            .clone();

        let flavor_name = caller
            .flavor
            .clone()
            .unwrap_or_else(|| defaults.flavor.clone());
        let flavor_table = caller.flavors.as_ref().unwrap_or(&defaults.flavors);
        let flavor_preset = flavor_table
            .get(&flavor_name)
            .ok_or_else(|| ConfigError::UnknownFlavor(flavor_name.clone()))?
            .clone();

        let mut opts = defaults.clone();
        format_preset.apply_to(&mut opts);
        flavor_preset.apply_to(&mut opts);
        caller.apply_to(&mut opts);

        // The default suffix lookup needs a resolvable sequence; fail at
        // resolution time, not mid-format.
        if opts.suffix_fn.is_none()
            && opts.suffixes.is_none()
            && !opts.suffix_groups.contains_key(&opts.suffix_group)
        {
            return Err(ConfigError::UnknownSuffixGroup(opts.suffix_group.clone()));
        }

        trace!(format = %opts.format, flavor = %opts.flavor, "resolved formatting options");
        Ok(opts)
    }

    /// Resolve the suffix for a tier against these options.
    ///
    /// Custom `suffix_fn` first, then a direct `suffixes` override, then
    /// the active group. `None` past the end of the table.
    pub fn suffix_for(&self, tier: u32) -> Option<String> {
        if let Some(f) = &self.suffix_fn {
            return f(tier, self);
        }
        let table = match &self.suffixes {
            Some(t) => t.as_slice(),
            None => self
                .suffix_groups
                .get(&self.suffix_group)
                .map(Vec::as_slice)
                .unwrap_or(&[]),
        };
        suffix::lookup(table, tier)
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("suffix_group", &self.suffix_group)
            .field("suffixes", &self.suffixes)
            .field("suffix_fn", &self.suffix_fn.as_ref().map(|_| "<fn>"))
            .field("min_suffix", &self.min_suffix)
            .field("min_round", &self.min_round)
            .field("sigfigs", &self.sigfigs)
            .field("format", &self.format)
            .field("flavor", &self.flavor)
            .finish_non_exhaustive()
    }
}

// ─── Built-in presets ────────────────────────────────────────────────────────

/// User-visible format choices, like a game's options screen. Each is a
/// different suffixing scheme.
fn builtin_formats() -> PresetTable {
    let groups = suffix::groups();
    let truncated: SuffixGroups = groups
        .iter()
        .map(|(name, table)| (name.clone(), table.iter().take(12).cloned().collect()))
        .collect();
    let empty: SuffixGroups = groups
        .keys()
        .map(|name| (name.clone(), Vec::new()))
        .collect();

    HashMap::from([
        ("standard".to_string(), Overrides::new()),
        // No suffixes at all: every suffixed tier falls through to
        // scientific notation.
        ("scientific".to_string(), Overrides::new().suffix_groups(empty)),
        // A smaller suffix set; past it, scientific notation.
        ("hybrid".to_string(), Overrides::new().suffix_groups(truncated)),
        // An unbounded suffix set: E3, E6, E9, …
        (
            "engineering".to_string(),
            Overrides::new().suffix_fn(|tier, _opts| {
                if tier == 0 {
                    Some(String::new())
                } else {
                    Some(format!("E{}", tier * 3))
                }
            }),
        ),
    ])
}

/// Developer-facing verbosity/precision bundles, orthogonal to format.
fn builtin_flavors() -> PresetTable {
    HashMap::from([
        (
            "long".to_string(),
            Overrides::new().suffix_group("long").sigfigs(5),
        ),
        (
            "short".to_string(),
            Overrides::new().suffix_group("short").sigfigs(3),
        ),
    ])
}
