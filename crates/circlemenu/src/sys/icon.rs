use freedesktop_icons::lookup;
use radial::IconName;
use std::path::{Path, PathBuf};

const ICON_LOOKUP_SIZE: u16 = 128;

/// Resolves an icon name against the freedesktop icon themes. Absolute paths
/// to existing files are returned as they are.
pub fn find_icon_path(icon_name: &IconName) -> Option<PathBuf> {
    if icon_name.is_empty() {
        return None;
    }

    let path = Path::new(icon_name.as_str());
    if path.is_absolute() && path.exists() {
        return Some(path.to_path_buf());
    }

    lookup(icon_name.as_str())
        .with_size(ICON_LOOKUP_SIZE)
        .with_scale(1)
        .find()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_name_has_no_icon() {
        assert_eq!(find_icon_path(&IconName::from("")), None);
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let path = std::env::temp_dir().join("circlemenu-test-icon.png");
        fs_err::write(&path, b"").unwrap();

        let found = find_icon_path(&IconName::new(path.to_string_lossy()));
        assert_eq!(found, Some(path.clone()));

        fs_err::remove_file(&path).unwrap();
    }
}
