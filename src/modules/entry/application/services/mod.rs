mod create_entry_service;
mod get_entry_service;
mod update_entry_service;

pub use create_entry_service::CreateEntryService;
pub use get_entry_service::GetEntryService;
pub use update_entry_service::UpdateEntryService;
