mod create_entry_use_case;
mod entry_text;
mod get_entry_use_case;
mod update_entry_use_case;

pub use create_entry_use_case::{CreateEntryCommand, CreateEntryError, CreateEntryUseCase};
pub use entry_text::EntryTextError;
pub use get_entry_use_case::{GetEntryError, GetEntryUseCase};
pub use update_entry_use_case::{UpdateEntryCommand, UpdateEntryError, UpdateEntryUseCase};
