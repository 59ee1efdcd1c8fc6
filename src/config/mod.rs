pub mod error;
pub mod locator;
pub mod names;
pub mod options;

pub use error::ConfigurationError;
pub use locator::ConfigurationFileLocator;
pub use names::{is_conventional_name, CONVENTIONAL_FILE_NAMES};
pub use options::LocatorOptions;
