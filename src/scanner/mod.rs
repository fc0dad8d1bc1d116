mod entry;
mod lister;
mod size;

pub use entry::{sort_by_size, total_size, DirectoryEntry};
pub use lister::{is_dot_name, list_directory, list_directory_with};
pub use size::{apparent_size, compute_size, format_size, ItemSize};
