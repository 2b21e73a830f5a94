mod create_entry;
mod entry_dto;
mod get_entry;
mod update_entry;

pub use create_entry::*;
pub use entry_dto::EntryResponse;
pub use get_entry::*;
pub use update_entry::*;
