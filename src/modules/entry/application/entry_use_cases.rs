use std::sync::Arc;

use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, GetEntryUseCase, UpdateEntryUseCase,
};

#[derive(Clone)]
pub struct EntryUseCases {
    pub create: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetEntryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEntryUseCase + Send + Sync>,
}
