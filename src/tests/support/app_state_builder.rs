use crate::auth::application::orchestrator::user_registration::UserRegistrationOrchestrator;
use crate::auth::application::use_cases::{
    login_user::ILoginUserUseCase, logout_user::ILogoutUseCase,
    refresh_token::IRefreshTokenUseCase,
};
use crate::entry::application::entry_use_cases::EntryUseCases;
use crate::entry::application::ports::incoming::use_cases::{
    CreateEntryUseCase, GetEntryUseCase, UpdateEntryUseCase,
};
use crate::tests::support::auth_helper::test_token_provider;
use crate::tests::support::stubs::*;
use crate::topic::application::ports::incoming::use_cases::{
    CreateTopicUseCase, GetTopicUseCase, GetTopicsUseCase,
};
use crate::topic::application::topic_use_cases::TopicUseCases;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

/// Builds an `AppState` where every slot is a stub unless overridden.
pub struct TestAppStateBuilder {
    register_user: Arc<UserRegistrationOrchestrator>,
    login_user: Arc<dyn ILoginUserUseCase + Send + Sync>,
    refresh_token: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    logout_user: Arc<dyn ILogoutUseCase + Send + Sync>,
    topic: TopicUseCases,
    entry: EntryUseCases,
}

pub fn default_test_user_registration_orchestrator() -> Arc<UserRegistrationOrchestrator> {
    Arc::new(UserRegistrationOrchestrator::new(
        Arc::new(StubCreateUserUseCase),
        test_token_provider(),
    ))
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            register_user: default_test_user_registration_orchestrator(),
            login_user: Arc::new(StubLoginUserUseCase),
            refresh_token: Arc::new(StubRefreshTokenUseCase),
            logout_user: Arc::new(StubLogoutUserUseCase),
            topic: TopicUseCases {
                create: Arc::new(StubCreateTopicUseCase),
                get_list: Arc::new(StubGetTopicsUseCase),
                get_single: Arc::new(StubGetTopicUseCase),
            },
            entry: EntryUseCases {
                create: Arc::new(StubCreateEntryUseCase),
                get_single: Arc::new(StubGetEntryUseCase),
                update: Arc::new(StubUpdateEntryUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // ---------------- Auth ----------------

    pub fn with_register_user_orchestrator(
        mut self,
        orchestrator: Arc<UserRegistrationOrchestrator>,
    ) -> Self {
        self.register_user = orchestrator;
        self
    }

    pub fn with_login_user(mut self, uc: impl ILoginUserUseCase + Send + Sync + 'static) -> Self {
        self.login_user = Arc::new(uc);
        self
    }

    pub fn with_refresh_token(
        mut self,
        uc: impl IRefreshTokenUseCase + Send + Sync + 'static,
    ) -> Self {
        self.refresh_token = Arc::new(uc);
        self
    }

    pub fn with_logout_user(mut self, uc: impl ILogoutUseCase + Send + Sync + 'static) -> Self {
        self.logout_user = Arc::new(uc);
        self
    }

    // ---------------- Topics ----------------

    pub fn with_topic_use_cases(mut self, topic: TopicUseCases) -> Self {
        self.topic = topic;
        self
    }

    pub fn with_create_topic(
        mut self,
        uc: impl CreateTopicUseCase + Send + Sync + 'static,
    ) -> Self {
        self.topic.create = Arc::new(uc);
        self
    }

    pub fn with_get_topics(mut self, uc: impl GetTopicsUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_topic(mut self, uc: impl GetTopicUseCase + Send + Sync + 'static) -> Self {
        self.topic.get_single = Arc::new(uc);
        self
    }

    // ---------------- Entries ----------------

    pub fn with_entry_use_cases(mut self, entry: EntryUseCases) -> Self {
        self.entry = entry;
        self
    }

    pub fn with_create_entry(
        mut self,
        uc: impl CreateEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.entry.create = Arc::new(uc);
        self
    }

    pub fn with_get_entry(mut self, uc: impl GetEntryUseCase + Send + Sync + 'static) -> Self {
        self.entry.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_entry(
        mut self,
        uc: impl UpdateEntryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.entry.update = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            register_user_orchestrator: self.register_user,
            login_user_use_case: self.login_user,
            refresh_token_use_case: self.refresh_token,
            logout_user_use_case: self.logout_user,
            topic: self.topic,
            entry: self.entry,
        })
    }
}
