//! Legacy runtime version comparison.
//!
//! Runtime versions are dotted strings (`1.5`, `1.4.2`, `1.6*`) compared
//! component by component as floating-point numbers, with two quirks that
//! existing dependency strings rely on:
//!
//! - A component ending in `*` sets a truncation index. The component at
//!   that index is still compared, everything after it is ignored. When
//!   both sides carry a `*`, the smaller index wins.
//! - Any component after the first that starts with `0` is read as a
//!   fraction: `1.04` compares as `1` then `0.04`, not `1` then `4`.

use std::cmp::Ordering;

/// Compare two version strings under wildcard and legacy-fraction rules.
///
/// Never fails: components that do not parse as numbers compare as zero.
pub fn compare(v1: &str, v2: &str) -> Ordering {
    if v1 == v2 {
        return Ordering::Equal;
    }

    let (mut left, left_trunc) = components(v1);
    let (mut right, right_trunc) = components(v2);

    let truncate = match (left_trunc, right_trunc) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    };

    let len = left.len().max(right.len());
    left.resize(len, 0.0);
    right.resize(len, 0.0);

    for (index, (a, b)) in left.iter().zip(&right).enumerate() {
        if truncate.is_some_and(|t| index > t) {
            return Ordering::Equal;
        }
        let diff = a - b;
        if diff > 0.0 {
            return Ordering::Greater;
        }
        if diff < 0.0 {
            return Ordering::Less;
        }
    }
    Ordering::Equal
}

/// Check `version` against `required` using a dependency operator.
///
/// `>=`, `<=`, `>` and `<` compare as usual. Any other operator, including
/// the empty one produced by `virtual/jdk:1.5`, means equality.
pub fn matches(version: &str, required: &str, operator: &str) -> bool {
    let ord = compare(version, required);
    match operator {
        ">=" => ord != Ordering::Less,
        "<=" => ord != Ordering::Greater,
        ">" => ord == Ordering::Greater,
        "<" => ord == Ordering::Less,
        _ => ord == Ordering::Equal,
    }
}

/// The `X.Y` class a version belongs to, as used by preference files.
///
/// `1.4*` becomes `1.4`, `1.6.0_20` becomes `1.6`.
pub fn preference_key(version: &str) -> String {
    version
        .trim_matches('*')
        .split('.')
        .take(2)
        .collect::<Vec<_>>()
        .join(".")
}

fn components(version: &str) -> (Vec<f64>, Option<usize>) {
    let mut truncate = None;
    let values = version
        .split('.')
        .enumerate()
        .map(|(index, raw)| {
            let part = match raw.strip_suffix('*') {
                Some(stripped) => {
                    truncate.get_or_insert(index);
                    stripped
                }
                None => raw,
            };
            component_value(index, part)
        })
        .collect();
    (values, truncate)
}

fn component_value(index: usize, part: &str) -> f64 {
    let parsed = if index > 0 && part.starts_with('0') {
        format!("0.{part}").parse::<f64>()
    } else {
        part.parse::<f64>()
    };
    parsed.unwrap_or(0.0)
}
