//! The address book itself.
//!
//! This module provides the name-keyed directory of contact records and the
//! page iterator used to walk it in fixed-size chunks.

pub mod contact_directory;
pub mod pages;

pub use contact_directory::Directory;
pub use pages::Pages;
