//! Post store implementations - JSON file and in-memory.

mod json_file;
mod memory;

pub use json_file::JsonFilePostStore;
pub use memory::InMemoryPostStore;
