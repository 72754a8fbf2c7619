use std::collections::BTreeMap;
use std::path::Path;

use javaconf_util::errors::{JavaconfError, JavaconfResult};

/// Loads a shell-style `KEY="value"` descriptor file.
///
/// Runtime descriptors under the runtime directory and installed
/// `package.env` files share this format. Blank lines and `#` comments
/// are skipped, surrounding quotes are stripped and `${KEY}` references
/// are expanded from keys defined earlier in the same file.
pub fn load_env_file(path: &Path) -> JavaconfResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path).map_err(JavaconfError::Io)?;
    Ok(parse_env(&content))
}

/// Parse descriptor content. See [`load_env_file`].
pub fn parse_env(content: &str) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
        if let Some((key, value)) = trimmed.split_once('=') {
            let value = interpolate(unquote(value.trim()), &map);
            map.insert(key.trim().to_string(), value);
        }
    }
    map
}

/// Interpolate `${KEY}` references in a string.
///
/// Unknown keys expand to the empty string.
pub fn interpolate(input: &str, vars: &BTreeMap<String, String>) -> String {
    let mut result = input.to_string();
    let mut search_from = 0;
    while let Some(offset) = result[search_from..].find("${") {
        let start = search_from + offset;
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let end = start + end;
        let value = vars
            .get(&result[start + 2..end])
            .cloned()
            .unwrap_or_default();
        result.replace_range(start..=end, &value);
        search_from = start + value.len();
    }
    result
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|v| v.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
