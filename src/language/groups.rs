//! File extension compatibility groups.

/// Extension of `path`: the text after the last `.` of its final segment,
/// or the whole final segment when it has no `.`.
pub fn extension_of(path: &str) -> &str {
    let name = path.rsplit(['/', '\\']).next().unwrap_or(path);
    name.rsplit('.').next().unwrap_or(name)
}

/// The group of extensions compatible with `extension`.
///
/// The first configured group containing `extension` wins. An extension that
/// belongs to no group is still compatible with itself.
pub fn compatible_extensions<G: AsRef<[String]>>(groups: &[G], extension: &str) -> Vec<String> {
    groups
        .iter()
        .map(|group| group.as_ref())
        .find(|group| group.iter().any(|ext| ext == extension))
        .map(|group| group.to_vec())
        .unwrap_or_else(|| vec![extension.to_string()])
}
