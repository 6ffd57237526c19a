use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use ignore::WalkBuilder;
use std::path::Path;
use tracing::debug;

/// Lists the image files below `<root>/gallery` as `/gallery/...` paths.
///
/// Files at the wrong depth are listed too; the index reports them as
/// skipped.
pub fn collect_paths(root: &Path) -> Result<Vec<String>> {
    let gallery_dir = root.join("gallery");
    if !gallery_dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} is not a directory", gallery_dir.display()),
        )
        .into());
    }

    let walker = WalkBuilder::new(&gallery_dir)
        .hidden(true)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .ignore(false)
        .parents(false)
        .build();

    let mut paths = Vec::new();
    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_some_and(|t| t.is_file()) {
            continue;
        }
        let path = entry.path();
        if !is_supported_image(path) {
            debug!("Not an image: {}", path.display());
            continue;
        }
        let Ok(relative) = path.strip_prefix(root) else {
            continue;
        };
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        paths.push(format!("/{}", segments.join("/")));
    }

    debug!("Found {} files below {}", paths.len(), gallery_dir.display());
    Ok(paths)
}

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
