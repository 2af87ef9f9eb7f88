use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
}

/// Read a text file (Markdown source or HTML template)
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, replacing any existing content
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files under the content directory, sorted by path
pub fn scan_markdown_files(content_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_content_dir(content_root)?;

    let mut files = Vec::new();
    scan_directory_recursive(content_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "content directory not found: {}",
            path.display()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_content_dir, create_test_file};

    #[test]
    fn test_scan_and_load_files() {
        // Given a content directory with markdown files
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "test1.md", "# First");
        create_test_file(&content_dir, "test2.md", "# Second");

        // When scanning for files
        let files = scan_markdown_files(content_dir.path()).unwrap();

        // Then we find the expected files
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test1.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "test2.md"));
    }

    #[test]
    fn test_handle_invalid_content_directory() {
        let nonexistent_path = PathBuf::from("/this/path/does/not/exist");

        let result = scan_markdown_files(&nonexistent_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("content directory"));
    }

    #[test]
    fn test_scan_nested_directories() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "index.md", "# Root file");

        let sub_dir = content_dir.path().join("blog");
        std::fs::create_dir(&sub_dir).unwrap();
        std::fs::write(sub_dir.join("post.md"), "# Nested file").unwrap();

        let files = scan_markdown_files(content_dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "index.md"));
        assert!(files.iter().any(|f| f.file_name().unwrap() == "post.md"));
    }

    #[test]
    fn test_ignore_non_markdown_files() {
        let content_dir = create_test_content_dir();
        create_test_file(&content_dir, "document.md", "# Markdown");
        create_test_file(&content_dir, "image.png", "fake image data");
        create_test_file(&content_dir, "styles.css", "body {}");

        let files = scan_markdown_files(content_dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "document.md");
    }

    #[test]
    fn test_validate_content_dir_rejects_file() {
        let content_dir = create_test_content_dir();
        let file = create_test_file(&content_dir, "index.md", "# Index");
        assert!(matches!(
            validate_content_dir(&file),
            Err(IoError::InvalidContentDir(_))
        ));
    }

    #[test]
    fn test_read_file_success() {
        let content_dir = create_test_content_dir();
        let file_path = create_test_file(&content_dir, "test.md", "# Test Content\n\nParagraph");

        let content = read_file(&file_path).unwrap();
        assert_eq!(content, "# Test Content\n\nParagraph");
    }

    #[test]
    fn test_read_file_not_found() {
        let content_dir = create_test_content_dir();
        let result = read_file(&content_dir.path().join("nonexistent.md"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let output_dir = create_test_content_dir();
        let path = output_dir.path().join("folder/subfolder/index.html");

        write_file(&path, "<h1>Hi</h1>").unwrap();

        assert_eq!(read_file(&path).unwrap(), "<h1>Hi</h1>");
        assert!(output_dir.path().join("folder").join("subfolder").is_dir());
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let output_dir = create_test_content_dir();
        let path = create_test_file(&output_dir, "index.html", "old");

        write_file(&path, "new").unwrap();

        assert_eq!(read_file(&path).unwrap(), "new");
    }
}
