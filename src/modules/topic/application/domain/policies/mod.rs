mod topic_access;

pub use topic_access::{AccessDenied, TopicAccess};
