//! End-to-end formatting scenarios across the public API.

use numberformat::prelude::*;
use numberformat::{suffix, suffix_with};

#[test]
fn tier_zero_covers_sub_thousand_values() {
    for v in [0.0, 0.001, 0.5, 1.0, 42.0, 999.0, 999.999, -999.0] {
        assert_eq!(index(v), 0, "index({})", v);
    }
}

#[test]
fn tier_is_sign_independent() {
    for v in [1.0, 999.0, 1000.0, 250_000.0, 1e9, 1e18] {
        assert_eq!(index(v), index(-v));
    }
}

#[test]
fn tier_boundaries() {
    assert_eq!(index(999.0), 0);
    assert_eq!(index(1000.0), 1);
    assert_eq!(index(1_000_000.0), 2);
}

#[test]
fn tier_is_monotonic() {
    let values = [1.0, 10.0, 999.0, 1000.0, 5e4, 1e6, 3e7, 1e12, 1e30];
    for pair in values.windows(2) {
        assert!(index(pair[0]) <= index(pair[1]));
    }
}

#[test]
fn zero_renders_plain_under_any_configuration() {
    assert_eq!(format(0.0).unwrap(), "0");
    for call in [
        Overrides::new().format("scientific"),
        Overrides::new().format("engineering"),
        Overrides::new().min_suffix(0.0),
        Overrides::new().flavor("short").min_suffix(0.0),
    ] {
        assert_eq!(format_with(0.0, &call).unwrap(), "0");
    }
}

#[test]
fn default_configuration_examples() {
    assert_eq!(format(999.0).unwrap(), "999");
    assert_eq!(format(99_999.0).unwrap(), "99,999");
    // Above min_suffix: long-flavor suffix, sigfigs 5.
    assert_eq!(format(250_000.0).unwrap(), "250.00 thousand");
    assert_eq!(format(250_000_000.0).unwrap(), "250.00 million");
}

#[test]
fn scientific_preset_uses_exponential_above_min_suffix() {
    let call = Overrides::new().format("scientific");
    // Long flavor default: sigfigs 5, so 4 fractional digits, lowercase
    // e, no plus sign.
    assert_eq!(format_with(1_000_000.0, &call).unwrap(), "1.0000e6");
    assert_eq!(format_with(250_000.0, &call).unwrap(), "2.5000e5");

    let call = Overrides::new().format("scientific").sigfigs(3);
    assert_eq!(format_with(12_345_678.0, &call).unwrap(), "1.23e7");
}

#[test]
fn hybrid_preset_falls_back_past_truncated_table() {
    let call = Overrides::new().format("hybrid").flavor("short");
    // Tier 11 is the last hybrid entry; tier 12 falls to scientific.
    assert_eq!(format_with(1e33, &call).unwrap(), "1.00Dc");
    assert_eq!(format_with(1e36, &call).unwrap(), "1.00e36");
}

#[test]
fn engineering_preset_never_runs_out() {
    let call = Overrides::new().format("engineering").flavor("short");
    assert_eq!(format_with(1500.0, &call).unwrap(), "1,500");
    assert_eq!(format_with(250_000.0, &call).unwrap(), "250E3");
    assert_eq!(format_with(1e60, &call).unwrap(), "1.00E60");
}

#[test]
fn unknown_preset_names_error() {
    let err = format_with(1.0, &Overrides::new().format("nonexistent")).unwrap_err();
    assert_eq!(err.to_string(), "no such format: nonexistent");

    let err = format_with(1.0, &Overrides::new().flavor("nonexistent")).unwrap_err();
    assert_eq!(err.to_string(), "no such flavor: nonexistent");

    let err = format_with(1.0, &Overrides::new().suffix_group("nonexistent")).unwrap_err();
    assert_eq!(err.to_string(), "no such suffixgroup: nonexistent");
}

#[test]
fn caller_sigfigs_beats_every_preset_combination() {
    for format_name in ["standard", "scientific", "hybrid", "engineering"] {
        for flavor_name in ["long", "short"] {
            let call = Overrides::new()
                .format(format_name)
                .flavor(flavor_name)
                .sigfigs(6);
            let fmt = Formatter::new();
            let opts = fmt.resolve(&call).unwrap();
            assert_eq!(opts.sigfigs, 6, "{}/{}", format_name, flavor_name);
        }
    }
}

#[test]
fn suffix_reflects_flavor() {
    let long = suffix(1500.0).unwrap();
    let short = suffix_with(1500.0, &Overrides::new().flavor("short")).unwrap();
    assert_eq!(long, Some(" thousand".to_string()));
    assert_eq!(short, Some("K".to_string()));
    assert_ne!(long, short);
}

#[test]
fn suffix_unavailable_past_table() {
    assert_eq!(suffix(1e90).unwrap(), None);
    let call = Overrides::new().format("engineering");
    assert_eq!(
        suffix_with(1e90, &call).unwrap(),
        Some("E90".to_string())
    );
}

#[test]
fn persistent_overrides_participate_in_every_call() {
    let fmt = Formatter::with_overrides(Overrides::new().flavor("short").min_suffix(1e3));
    assert_eq!(fmt.format(1500.0).unwrap(), "1.50K");
    // Per-call layer wins over the persistent one.
    assert_eq!(
        fmt.format_with(1500.0, &Overrides::new().min_suffix(1e5)).unwrap(),
        "1,500"
    );
}

#[test]
fn caller_extended_preset_tables() {
    // Callers extend formats by supplying their own table; the custom
    // table is used for lookup instead of the built-in one. sigfigs
    // rides in the caller layer so no flavor preset can overlay it.
    let defaults = Options::defaults();
    let mut formats = defaults.formats.clone();
    formats.insert("terse".to_string(), Overrides::new().min_suffix(1e3));
    let call = Overrides::new()
        .format("terse")
        .formats(formats)
        .flavor("short")
        .sigfigs(2);
    assert_eq!(format_with(1500.0, &call).unwrap(), "1.5K");
    assert_eq!(format_with(1_500_000.0, &call).unwrap(), "1.5M");
}

#[test]
fn defaults_are_introspectable() {
    let defaults = Options::defaults();
    assert_eq!(defaults.format, "standard");
    assert_eq!(defaults.flavor, "long");
    assert!(defaults.formats.len() >= 4);
    assert!(defaults.flavors.len() >= 2);
    assert!(numberformat::suffix::groups().contains_key("long"));
}
