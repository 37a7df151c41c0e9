//! Utility modules for Chain Logo Fetch
//!
//! This module contains various utility functions organized by functionality:
//! - `files`: File operations and directory management
//! - `logos`: Sequential logo downloading
//! - `http`: HTTP client utilities

pub mod files;
pub mod http;
pub mod logos;
