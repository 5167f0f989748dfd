use crate::enums::admin_error::*;

use globset::{GlobBuilder, GlobMatcher};

#[doc = "Function that selects the index names matching a shell-glob pattern"]
/// Supports `*`, `?`, `[...]` character classes negated with `[^...]` or `[!...]`,
/// and `\` escapes for literal metacharacters.
///
/// # Arguments
/// * `pattern` - glob pattern, e.g. `logs-2023.*`
/// * `names`   - candidate index names, in listing order
///
/// # Returns
/// * anyhow::Result<Vec<String>> - matches in the order they were given
pub fn filter_by_glob<'a, I>(pattern: &str, names: I) -> anyhow::Result<Vec<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let matcher: GlobMatcher = GlobBuilder::new(pattern)
        .backslash_escape(true)
        .build()
        .map_err(|e| AdminError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        })?
        .compile_matcher();

    Ok(names
        .into_iter()
        .filter(|name| matcher.is_match(*name))
        .map(str::to_string)
        .collect())
}
