pub mod parsed_path;

// Re-export commonly used types
pub use parsed_path::ParsedPath;
