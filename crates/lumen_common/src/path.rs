//! Project-relative path normalization for content-id computation.
//!
//! Content ids must be identical for the same file regardless of the
//! platform the build runs on, so the path fed into the hash is made
//! relative to the project root and always uses forward-slash separators.

use std::path::{Component, Path};

/// Normalizes `filename` relative to `root` with forward-slash separators.
///
/// If `filename` is not located under `root` (including when it is already
/// a relative path), it is normalized as-is rather than rebased. Non-UTF-8
/// components are converted lossily; the result is still deterministic for
/// a given path value.
pub fn project_relative(filename: &Path, root: &Path) -> String {
    let rel = filename.strip_prefix(root).unwrap_or(filename);
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            // Root and prefix components only appear when the fallback path
            // is absolute; the separator itself carries no information.
            _ => None,
        })
        .collect();
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn strips_project_root() {
        let rel = project_relative(Path::new("/proj/src/App.lumen"), Path::new("/proj"));
        assert_eq!(rel, "src/App.lumen");
    }

    #[test]
    fn relative_input_kept_as_is() {
        let rel = project_relative(Path::new("src/App.lumen"), Path::new("/proj"));
        assert_eq!(rel, "src/App.lumen");
    }

    #[test]
    fn nested_directories_use_forward_slashes() {
        let path: PathBuf = ["/proj", "src", "lib", "Button.lumen"].iter().collect();
        let rel = project_relative(&path, Path::new("/proj"));
        assert_eq!(rel, "src/lib/Button.lumen");
    }

    #[test]
    fn path_outside_root_is_not_rebased() {
        let rel = project_relative(Path::new("/other/App.lumen"), Path::new("/proj"));
        assert_eq!(rel, "other/App.lumen");
    }

    #[test]
    fn deterministic() {
        let a = project_relative(Path::new("/proj/src/App.lumen"), Path::new("/proj"));
        let b = project_relative(Path::new("/proj/src/App.lumen"), Path::new("/proj"));
        assert_eq!(a, b);
    }
}
