//! Path utilities.
//!
//! - [`fs`]: Filesystem path normalization (`normalize_path`, `file_name_lossy`)

pub mod fs;

pub use fs::{file_name_lossy, normalize_path};
