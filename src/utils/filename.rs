//! Output path utilities

use std::path::{Path, PathBuf};

/// Resolve where a thumbnail should be written.
///
/// `None` means the current directory, an existing directory gets `file_name`
/// appended, anything else is taken as the target file path.
pub fn resolve_output_path(output: Option<&Path>, file_name: &str) -> PathBuf {
    match output {
        None => PathBuf::from(file_name),
        Some(path) if path.is_dir() => path.join(file_name),
        Some(path) => path.to_path_buf(),
    }
}

/// Generate a unique filename by appending a number if the file already exists
pub fn generate_unique_filename(base_path: &Path, filename: &str) -> std::io::Result<String> {
    let mut counter = 1;
    let mut final_filename = filename.to_string();

    while base_path.join(&final_filename).exists() {
        let path = Path::new(filename);
        let stem = path.file_stem().unwrap_or_default();
        let extension = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();

        final_filename = format!("{} ({}){}", stem.to_string_lossy(), counter, extension);
        counter += 1;

        // Prevent infinite loop
        if counter > 10000 {
            return Err(std::io::Error::new(
                std::io::ErrorKind::AlreadyExists,
                "Too many files with similar names",
            ));
        }
    }

    Ok(final_filename)
}

/// Make `path` unique within its parent directory
pub fn unique_path(path: &Path) -> std::io::Result<PathBuf> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let unique = generate_unique_filename(&parent, &file_name)?;
    Ok(match path.parent() {
        Some(p) => p.join(unique),
        None => PathBuf::from(unique),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            resolve_output_path(None, "thumbnail_dQw4w9WgXcQ.jpg"),
            PathBuf::from("thumbnail_dQw4w9WgXcQ.jpg")
        );
        assert_eq!(
            resolve_output_path(Some(dir.path()), "thumbnail_dQw4w9WgXcQ.jpg"),
            dir.path().join("thumbnail_dQw4w9WgXcQ.jpg")
        );

        let file = dir.path().join("cover.jpg");
        assert_eq!(
            resolve_output_path(Some(&file), "thumbnail_dQw4w9WgXcQ.jpg"),
            file
        );
    }

    #[test]
    fn test_generate_unique_filename() {
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(
            generate_unique_filename(dir.path(), "thumbnail_x.jpg").unwrap(),
            "thumbnail_x.jpg"
        );

        std::fs::write(dir.path().join("thumbnail_x.jpg"), b"a").unwrap();
        assert_eq!(
            generate_unique_filename(dir.path(), "thumbnail_x.jpg").unwrap(),
            "thumbnail_x (1).jpg"
        );

        std::fs::write(dir.path().join("thumbnail_x (1).jpg"), b"b").unwrap();
        assert_eq!(
            generate_unique_filename(dir.path(), "thumbnail_x.jpg").unwrap(),
            "thumbnail_x (2).jpg"
        );
    }

    #[test]
    fn test_unique_path() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("thumbnail_x.jpg");
        assert_eq!(unique_path(&target).unwrap(), target);

        std::fs::write(&target, b"a").unwrap();
        assert_eq!(
            unique_path(&target).unwrap(),
            dir.path().join("thumbnail_x (1).jpg")
        );
    }
}
