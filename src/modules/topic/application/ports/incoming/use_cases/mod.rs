mod create_topic_use_case;
mod get_topic_use_case;
mod get_topics_use_case;

pub use create_topic_use_case::{
    CreateTopicCommand, CreateTopicCommandError, CreateTopicError, CreateTopicUseCase,
};
pub use get_topic_use_case::{GetTopicError, GetTopicUseCase};
pub use get_topics_use_case::{GetTopicsError, GetTopicsUseCase};
