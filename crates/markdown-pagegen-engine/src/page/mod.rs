//! # Page Generation
//!
//! Glue between storage and the conversion core: read a Markdown source,
//! convert it, substitute title and body into a template, write the page.
//!
//! - **`template`**: `Template` placeholder substitution
//! - `generate_page` for one file, `generate_pages_recursive` for a content tree
//!
//! A page that fails to convert is never written.

pub mod template;

use std::path::{Path, PathBuf};

use relative_path::RelativePathBuf;

use crate::{
    document::Document,
    error::ConvertError,
    io::{IoError, read_file, scan_markdown_files, write_file},
};

pub use template::Template;

/// Extension given to generated pages.
pub const PAGE_EXTENSION: &str = "html";

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Failed to convert {path}: {source}")]
    Convert {
        path: PathBuf,
        source: ConvertError,
    },
    #[error("{path} is not inside content directory {root}")]
    OutsideContentDir { path: PathBuf, root: PathBuf },
}

/// Converts `markdown` and fills `template` with its title and body.
pub fn render_page(markdown: &str, template: &Template) -> Result<String, ConvertError> {
    let document = Document::from_markdown(markdown)?;
    log::debug!("Extracted title: {}", document.title);
    Ok(template.render(&document.title, &document.to_html()))
}

/// Generates one HTML page from a Markdown file.
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path) -> Result<(), PageError> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );

    let template = Template::load(template_path)?;
    write_page(from, &template, dest)
}

/// Generates a page for every Markdown file under `content_root`.
///
/// `content_root/a/b.md` is written to `output_root/a/b.html`. Stops at the
/// first page that fails. Returns the written paths in source order.
pub fn generate_pages_recursive(
    content_root: &Path,
    template_path: &Path,
    output_root: &Path,
) -> Result<Vec<PathBuf>, PageError> {
    let template = Template::load(template_path)?;
    let sources = scan_markdown_files(content_root)?;
    log::info!(
        "Found {} markdown files in {}",
        sources.len(),
        content_root.display()
    );

    let mut written = Vec::with_capacity(sources.len());
    for source in sources {
        let dest = output_path_for(content_root, &source, output_root)?;
        log::info!("Generating page from {} to {}", source.display(), dest.display());
        write_page(&source, &template, &dest)?;
        written.push(dest);
    }

    Ok(written)
}

/// Maps a source file under `content_root` to its page under `output_root`.
pub fn output_path_for(
    content_root: &Path,
    source: &Path,
    output_root: &Path,
) -> Result<PathBuf, PageError> {
    let relative = source
        .strip_prefix(content_root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| PageError::OutsideContentDir {
            path: source.to_path_buf(),
            root: content_root.to_path_buf(),
        })?;

    Ok(relative.with_extension(PAGE_EXTENSION).to_path(output_root))
}

fn write_page(from: &Path, template: &Template, dest: &Path) -> Result<(), PageError> {
    let markdown = read_file(from)?;
    log::debug!("Read {} bytes from {}", markdown.len(), from.display());

    let html = render_page(&markdown, template).map_err(|source| PageError::Convert {
        path: from.to_path_buf(),
        source,
    })?;

    write_file(dest, &html)?;
    log::debug!("Wrote {} bytes to {}", html.len(), dest.display());
    Ok(())
}
