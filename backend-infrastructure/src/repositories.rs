pub mod document_files;
pub mod memory;

pub use document_files::*;
pub use memory::*;
