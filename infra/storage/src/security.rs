use crate::error::StorageError;
use std::path::{Component, Path, PathBuf};

fn traversal(path: &Path, reason: &'static str) -> StorageError {
    StorageError::PathTraversalAttempt {
        message: path.display().to_string().into(),
        context: Some(reason.into()),
    }
}

/// Collapses `.` and `..` lexically. A `..` may only cancel a segment seen before it.
fn normalize_relative(path: &Path) -> Result<PathBuf, StorageError> {
    let mut out = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {},
            Component::Normal(segment) => out.push(segment),
            Component::ParentDir => {
                if !out.pop() {
                    return Err(traversal(path, "Path climbs above the storage root"));
                }
            },
            Component::RootDir | Component::Prefix(_) => {
                return Err(traversal(path, "Absolute paths are not allowed"));
            },
        }
    }

    if out.as_os_str().is_empty() {
        return Err(traversal(path, "Path names no file"));
    }

    Ok(out)
}

/// Joins `path` onto `root` and proves the result stays inside it, following symlinks
/// for every part that already exists.
pub(crate) fn resolve_path(root: &Path, path: impl AsRef<Path>) -> Result<PathBuf, StorageError> {
    let path = path.as_ref();

    if path.is_absolute() {
        return Err(traversal(path, "Absolute paths are not allowed"));
    }

    let joined = root.join(normalize_relative(path)?);

    match joined.canonicalize() {
        Ok(canonical) if canonical.starts_with(root) => Ok(canonical),
        Ok(canonical) => Err(traversal(&canonical, "Symlink leads outside the storage root")),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => validate_ancestors(root, &joined),
        Err(e) => Err(StorageError::Io { source: e, context: None }),
    }
}

/// For a path that does not exist yet: the nearest existing ancestor must resolve inside
/// the root.
fn validate_ancestors(root: &Path, joined: &Path) -> Result<PathBuf, StorageError> {
    if !joined.starts_with(root) {
        return Err(traversal(joined, "Path is outside the storage root"));
    }

    for ancestor in joined.ancestors() {
        if ancestor == root {
            return Ok(joined.to_path_buf());
        }

        if ancestor.exists() {
            return match ancestor.canonicalize() {
                Ok(canonical) if canonical.starts_with(root) => Ok(joined.to_path_buf()),
                Ok(canonical) => {
                    Err(traversal(&canonical, "Existing parent is a symlink outside the storage root"))
                },
                Err(e) => Err(StorageError::Io {
                    source: e,
                    context: Some("Failed to verify parent directory".into()),
                }),
            };
        }
    }

    Err(traversal(joined, "No parent directory inside the storage root"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dots_collapse_inside_the_root() {
        assert_eq!(normalize_relative(Path::new("a/./b/../c.json")).unwrap(), Path::new("a/c.json"));
    }

    #[test]
    fn escaping_paths_are_rejected() {
        for path in ["../etc/passwd", "a/../../b", ".", "a/.."] {
            assert!(
                matches!(normalize_relative(Path::new(path)), Err(StorageError::PathTraversalAttempt { .. })),
                "{path} was accepted"
            );
        }
    }
}
