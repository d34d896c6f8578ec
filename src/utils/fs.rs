//! File system utilities

use std::path::Path;

use crate::core::config::UNKNOWN_REPO_NAME;

/// Display label of a repository location: its final path component
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| {
            let full = path.to_string_lossy();
            if full.is_empty() {
                UNKNOWN_REPO_NAME.to_string()
            } else {
                full.into_owned()
            }
        })
}

/// Shortens long paths for display
pub fn shorten_path(path: &str, max_length: usize) -> String {
    if path.len() <= max_length {
        return path.to_string();
    }

    let components: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if components.len() <= 2 {
        // Too few components to shorten meaningfully
        return path.to_string();
    }

    // Keep last 2 components with ellipsis prefix
    format!(
        ".../{}/{}",
        components[components.len() - 2],
        components[components.len() - 1]
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Path::new("/home/me/code/api")), "api");
        assert_eq!(display_name(Path::new("/")), "/");
        assert_eq!(display_name(Path::new("")), "unknown");
    }

    #[test]
    fn test_shorten_path() {
        assert_eq!(shorten_path("/a/b", 40), "/a/b");
        assert_eq!(
            shorten_path("/home/someone/projects/clients/acme/backend-service", 30),
            ".../acme/backend-service"
        );
        assert_eq!(shorten_path("/averyveryverylongname/x", 5), "/averyveryverylongname/x");
    }
}
