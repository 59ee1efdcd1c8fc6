pub mod fs;
pub mod paths;

pub use fs::{FileSystem, OsFileSystem};
