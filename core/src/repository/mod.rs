pub mod file;
pub mod traits;

// Re-export
pub use file::JsonSeedFile;
pub use traits::{EmptySource, TaskSource};
