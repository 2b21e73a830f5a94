mod entry_query;
mod entry_repository;

pub use entry_query::{EntryQuery, EntryQueryError};
pub use entry_repository::{CreateEntryData, EntryRepository, EntryRepositoryError};
