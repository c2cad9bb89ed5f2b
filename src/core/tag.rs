use std::sync::LazyLock;

use regex::Regex;

static NON_TAG_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-z,-]").expect("valid tag regex"));

/// Build the tag attached to assets from `parts`, joined with `-`.
///
/// Only ASCII letters, `,` and `-` survive, so `("web", "app_2")` becomes
/// `"web-app"`.
pub fn asset_tag(parts: &[&str]) -> String {
    NON_TAG_CHARS.replace_all(&parts.join("-"), "").into_owned()
}
