use std::path::Path;

/// Check if a path has an extension in the allow-list (case-insensitive).
pub fn has_matching_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| extensions.iter().any(|allowed| e.eq_ignore_ascii_case(allowed)))
        .unwrap_or(false)
}

/// File name without its last extension, if it is valid UTF-8.
pub fn file_stem_key(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}

/// Resource path with its last extension removed.
///
/// Resource paths are dotted (`MyMod.Images.slot.png`) or slash-separated;
/// only the final `.ext` is dropped.
pub fn resource_stem(resource_path: &str) -> String {
    file_stem_key(Path::new(resource_path)).unwrap_or_else(|| resource_path.to_string())
}
