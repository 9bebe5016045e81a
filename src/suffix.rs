//! Static suffix-group data.
//!
//! Two built-in groups, both indexed by magnitude tier (tier 0 = no
//! suffix, tier 1 = thousands, tier 2 = millions, …):
//!
//! - `long` — space-prefixed full words (`" thousand"`, `" million"`, …)
//! - `short` — abbreviations (`"K"`, `"M"`, `"B"`, …)
//!
//! The tables live in `data/suffixes.json` and are parsed once on first
//! access.

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

/// Named, tier-indexed suffix sequences.
pub type SuffixGroups = HashMap<String, Vec<String>>;

/// Shape of `data/suffixes.json`.
#[derive(Debug, Deserialize)]
struct BuiltinGroups {
    long: Vec<String>,
    short: Vec<String>,
}

static GROUPS: OnceLock<SuffixGroups> = OnceLock::new();

/// The built-in suffix groups.
pub fn groups() -> &'static SuffixGroups {
    GROUPS.get_or_init(|| {
        let data: BuiltinGroups =
            serde_json::from_str(include_str!("../data/suffixes.json")).unwrap();
        HashMap::from([
            ("long".to_string(), data.long),
            ("short".to_string(), data.short),
        ])
    })
}

/// Look up a tier in a suffix sequence.
///
/// `Some` for an in-range entry (possibly the empty string, which is a
/// deliberate blank suffix), `None` once the tier runs past the table —
/// the caller falls back to scientific notation for `None`.
pub fn lookup(table: &[String], tier: u32) -> Option<String> {
    table.get(tier as usize).cloned()
}
