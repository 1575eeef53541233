//! Icon assets for stat lines.
//!
//! Icons are optional decoration. [`resolve`] never fails: a missing icon
//! is logged and replaced by [`Icon::Placeholder`].

use std::path::PathBuf;

use super::RenderError;

/// Where a stat's icon comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Icon {
    /// An image file on disk.
    File(PathBuf),
    /// Stand-in drawn when the asset is missing.
    Placeholder,
}

/// Looks up icon assets by name.
pub trait IconSource: Send + Sync {
    /// Locate the asset for `name`.
    fn locate(&self, name: &str) -> Result<PathBuf, RenderError>;
}

/// Resolve an icon, substituting a placeholder when the lookup fails.
pub fn resolve(source: &dyn IconSource, name: &str) -> Icon {
    match source.locate(name) {
        Ok(path) => Icon::File(path),
        Err(e) => {
            log::warn!("could not load icon {name}: {e}");
            Icon::Placeholder
        }
    }
}

/// Icons stored as `<dir>/<name>.png`.
#[derive(Debug, Clone)]
pub struct DirIconSource {
    dir: PathBuf,
}

impl DirIconSource {
    /// Icons under `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl IconSource for DirIconSource {
    fn locate(&self, name: &str) -> Result<PathBuf, RenderError> {
        let path = self.dir.join(format!("{name}.png"));
        if path.is_file() {
            Ok(path)
        } else {
            Err(RenderError::MissingIcon(name.to_string()))
        }
    }
}

/// No icon assets at all; every lookup yields a placeholder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoIcons;

impl IconSource for NoIcons {
    fn locate(&self, name: &str) -> Result<PathBuf, RenderError> {
        Err(RenderError::MissingIcon(name.to_string()))
    }
}
