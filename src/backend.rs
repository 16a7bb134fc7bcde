//! Cross-platform extended attribute store
//!
//! Byte-level access to the host facility: `xattr` on Unix, alternate data
//! streams on Windows. Names arrive here already validated and qualified.

use crate::error::AttrError;
use std::ffi::OsString;
use std::fs;
use std::path::Path;

/// Whether `err` is the errno the host returns for a missing attribute
#[cfg(any(target_os = "linux", target_os = "android"))]
fn is_missing_attribute(err: &std::io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENODATA)
}

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd", target_os = "netbsd"))]
fn is_missing_attribute(err: &std::io::Error) -> bool {
    err.raw_os_error() == Some(libc::ENOATTR)
}

#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "netbsd"
    ))
))]
fn is_missing_attribute(_err: &std::io::Error) -> bool {
    false
}

/// Fail with `FileNotFound` before touching the attribute store
fn ensure_exists(path: &Path, follow_symlinks: bool) -> Result<(), AttrError> {
    let metadata = if follow_symlinks {
        fs::metadata(path)
    } else {
        fs::symlink_metadata(path)
    };
    metadata.map(|_| ()).map_err(|e| AttrError::from_io(path, e))
}

/// Write raw bytes under `name`, replacing any previous value
pub(crate) fn write(
    path: &Path,
    name: &str,
    value: &[u8],
    follow_symlinks: bool,
) -> Result<(), AttrError> {
    ensure_exists(path, follow_symlinks)?;
    #[cfg(unix)]
    {
        let result = if follow_symlinks {
            xattr::set_deref(path, name, value)
        } else {
            xattr::set(path, name, value)
        };
        result.map_err(|e| AttrError::from_io(path, e))
    }
    #[cfg(windows)]
    {
        fs::write(stream_path(path, name), value).map_err(|e| AttrError::from_io(path, e))
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = (name, value);
        Err(AttrError::Unsupported)
    }
}

/// Read raw bytes stored under `name`; `None` if the attribute is absent
pub(crate) fn read(
    path: &Path,
    name: &str,
    follow_symlinks: bool,
) -> Result<Option<Vec<u8>>, AttrError> {
    ensure_exists(path, follow_symlinks)?;
    #[cfg(unix)]
    {
        let result = if follow_symlinks {
            xattr::get_deref(path, name)
        } else {
            xattr::get(path, name)
        };
        result.map_err(|e| AttrError::from_io(path, e))
    }
    #[cfg(windows)]
    {
        use std::io::ErrorKind;
        match fs::read(stream_path(path, name)) {
            Ok(bytes) => Ok(Some(bytes)),
            // The file itself exists, so a missing stream is a missing attribute
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AttrError::from_io(path, e)),
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = name;
        Err(AttrError::Unsupported)
    }
}

/// Delete the attribute stored under `name`; `NotFound` if it is absent
pub(crate) fn delete(path: &Path, name: &str, follow_symlinks: bool) -> Result<(), AttrError> {
    ensure_exists(path, follow_symlinks)?;
    #[cfg(unix)]
    {
        let result = if follow_symlinks {
            xattr::remove_deref(path, name)
        } else {
            xattr::remove(path, name)
        };
        result.map_err(|e| {
            if is_missing_attribute(&e) {
                AttrError::NotFound(name.to_string())
            } else {
                AttrError::from_io(path, e)
            }
        })
    }
    #[cfg(windows)]
    {
        use std::io::ErrorKind;
        match fs::remove_file(stream_path(path, name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(AttrError::NotFound(name.to_string())),
            Err(e) => Err(AttrError::from_io(path, e)),
        }
    }
    #[cfg(not(any(unix, windows)))]
    {
        let _ = name;
        Err(AttrError::Unsupported)
    }
}

/// Enumerate the raw attribute names present on `path`
pub(crate) fn names(path: &Path, follow_symlinks: bool) -> Result<Vec<OsString>, AttrError> {
    ensure_exists(path, follow_symlinks)?;
    #[cfg(unix)]
    {
        let result = if follow_symlinks {
            xattr::list_deref(path)
        } else {
            xattr::list(path)
        };
        result
            .map(|attrs| attrs.collect())
            .map_err(|e| AttrError::from_io(path, e))
    }
    #[cfg(not(unix))]
    {
        // Enumerating alternate data streams needs FindFirstStreamW
        Err(AttrError::Unsupported)
    }
}

/// Windows ADS: "filename:streamname"
#[cfg(windows)]
fn stream_path(path: &Path, name: &str) -> String {
    format!("{}:{}", path.to_string_lossy(), name)
}
