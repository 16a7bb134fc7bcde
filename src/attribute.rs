//! Extended attribute accessor
//!
//! String-valued metadata attached to a file through the OS extended
//! attribute store. Nothing is cached: every call goes to the filesystem.
//!
//! Two surfaces are offered. The `try_*` functions return `AttrError` so the
//! caller can tell a missing file from a permission problem. The plain
//! functions collapse every failure into `false`, `None` or an empty list.

use crate::backend;
use crate::config::Settings;
use crate::constant::{DEFAULT_FOLLOW_SYMLINKS, DEFAULT_NAMESPACE};
use crate::error::AttrError;
use std::path::{Path, PathBuf};
use tracing::debug;

#[cfg(target_os = "linux")]
use crate::constant::KNOWN_NAMESPACES;

/// Attribute access for a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAttributes {
    path: PathBuf,
    namespace: String,
    follow_symlinks: bool,
}

impl FileAttributes {
    /// Handle using the platform's default namespace ("user." on Linux)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            namespace: DEFAULT_NAMESPACE.to_string(),
            follow_symlinks: DEFAULT_FOLLOW_SYMLINKS,
        }
    }

    pub fn from_settings(path: impl Into<PathBuf>, settings: &Settings) -> Self {
        Self::new(path)
            .with_namespace(settings.namespace.clone())
            .follow_symlinks(settings.follow_symlinks)
    }

    /// Prefix bare attribute names with `namespace`, e.g. "user."
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn follow_symlinks(mut self, follow: bool) -> Self {
        self.follow_symlinks = follow;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Validate `name` and apply the namespace prefix at most once
    pub fn qualify(&self, name: &str) -> Result<String, AttrError> {
        if name.is_empty() || name.contains('\0') {
            return Err(AttrError::InvalidName(name.to_string()));
        }
        let qualified = if self.namespace.is_empty()
            || has_known_namespace(name)
            || name.starts_with(&self.namespace)
        {
            name.to_string()
        } else {
            format!("{}{}", self.namespace, name)
        };
        // Linux answers EOPNOTSUPP here, which reads as a filesystem without xattrs
        if cfg!(target_os = "linux") && !has_known_namespace(&qualified) {
            return Err(AttrError::InvalidName(qualified));
        }
        Ok(qualified)
    }

    pub fn try_set(&self, name: &str, value: &str) -> Result<(), AttrError> {
        let name = self.qualify(name)?;
        backend::write(&self.path, &name, value.as_bytes(), self.follow_symlinks)
    }

    /// `Ok(None)` means the file exists but carries no such attribute
    pub fn try_get(&self, name: &str) -> Result<Option<String>, AttrError> {
        let name = self.qualify(name)?;
        match backend::read(&self.path, &name, self.follow_symlinks)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|source| AttrError::InvalidUtf8 { name, source }),
            None => Ok(None),
        }
    }

    pub fn try_remove(&self, name: &str) -> Result<(), AttrError> {
        let name = self.qualify(name)?;
        backend::delete(&self.path, &name, self.follow_symlinks)
    }

    /// Sorted attribute names; names that are not valid UTF-8 are skipped
    pub fn try_list(&self) -> Result<Vec<String>, AttrError> {
        let mut names: Vec<String> = backend::names(&self.path, self.follow_symlinks)?
            .into_iter()
            .filter_map(|name| match name.into_string() {
                Ok(name) => Some(name),
                Err(raw) => {
                    debug!("Skipping non UTF-8 attribute {:?} on {:?}", raw, self.path);
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }

    pub fn set(&self, name: &str, value: &str) -> bool {
        match self.try_set(name, value) {
            Ok(()) => true,
            Err(e) => {
                debug!("Failed to set attribute {:?} on {:?}: {}", name, self.path, e);
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        self.try_get(name).unwrap_or_else(|e| {
            debug!("Failed to read attribute {:?} on {:?}: {}", name, self.path, e);
            None
        })
    }

    pub fn remove(&self, name: &str) -> bool {
        match self.try_remove(name) {
            Ok(()) => true,
            Err(e) => {
                debug!("Failed to remove attribute {:?} on {:?}: {}", name, self.path, e);
                false
            }
        }
    }

    pub fn list(&self) -> Vec<String> {
        self.try_list().unwrap_or_else(|e| {
            debug!("Failed to list attributes on {:?}: {}", self.path, e);
            Vec::new()
        })
    }
}

#[cfg(target_os = "linux")]
fn has_known_namespace(name: &str) -> bool {
    KNOWN_NAMESPACES.iter().any(|ns| name.starts_with(ns))
}

#[cfg(not(target_os = "linux"))]
fn has_known_namespace(_name: &str) -> bool {
    false
}

// ============================================================================
// Free functions
// ============================================================================

/// Store `value` under `name` on `path`, returning whether it succeeded
pub fn set(path: impl AsRef<Path>, name: &str, value: &str) -> bool {
    FileAttributes::new(path.as_ref()).set(name, value)
}

/// Read the value stored under `name` on `path`
pub fn get(path: impl AsRef<Path>, name: &str) -> Option<String> {
    FileAttributes::new(path.as_ref()).get(name)
}

pub fn remove(path: impl AsRef<Path>, name: &str) -> bool {
    FileAttributes::new(path.as_ref()).remove(name)
}

pub fn list(path: impl AsRef<Path>) -> Vec<String> {
    FileAttributes::new(path.as_ref()).list()
}

pub fn try_set(path: impl AsRef<Path>, name: &str, value: &str) -> Result<(), AttrError> {
    FileAttributes::new(path.as_ref()).try_set(name, value)
}

pub fn try_get(path: impl AsRef<Path>, name: &str) -> Result<Option<String>, AttrError> {
    FileAttributes::new(path.as_ref()).try_get(name)
}

pub fn try_remove(path: impl AsRef<Path>, name: &str) -> Result<(), AttrError> {
    FileAttributes::new(path.as_ref()).try_remove(name)
}

pub fn try_list(path: impl AsRef<Path>) -> Result<Vec<String>, AttrError> {
    FileAttributes::new(path.as_ref()).try_list()
}

// ============================================================================
// Tests
// ============================================================================
