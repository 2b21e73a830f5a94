mod create_topic;
mod get_topic;
mod get_topics;
mod topic_dto;

pub use create_topic::*;
pub use get_topic::*;
pub use get_topics::*;
pub use topic_dto::{TopicDetailResponse, TopicResponse};
