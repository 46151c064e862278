// crates/situ-core/src/assets.rs
// Asset path normalization against the deployment prefix

/// Resolve `relative_path` against `base_prefix`.
///
/// A single leading `/` is stripped before joining, so `"img/a.jpg"` and
/// `"/img/a.jpg"` both become `"{base_prefix}/img/a.jpg"`. Not idempotent:
/// callers apply it exactly once per raw path.
pub fn normalize(base_prefix: &str, relative_path: &str) -> String {
    let stripped = relative_path.strip_prefix('/').unwrap_or(relative_path);
    format!("{}/{}", base_prefix, stripped)
}

/// Like [`normalize`], passing an absent path through untouched
pub fn normalize_opt(base_prefix: &str, relative_path: Option<&str>) -> Option<String> {
    relative_path.map(|p| normalize(base_prefix, p))
}
