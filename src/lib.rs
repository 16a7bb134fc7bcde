//! String-valued extended file attributes
//!
//! Attach text metadata to a file through the OS extended attribute store
//! (`xattr` on Unix, alternate data streams on Windows) and read it back.

pub mod attribute;
mod backend;
pub mod config;
pub mod constant;
pub mod error;

pub use attribute::{
    FileAttributes, get, list, remove, set, try_get, try_list, try_remove, try_set,
};
pub use config::{Config, Settings};
pub use error::AttrError;
