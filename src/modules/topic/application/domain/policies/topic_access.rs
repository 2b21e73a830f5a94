use crate::auth::application::domain::entities::UserId;
use crate::topic::application::domain::entities::Topic;

/// Returned when a viewer may not see or change a topic. Callers report it
/// exactly like a missing topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Access to topic denied")]
pub struct AccessDenied;

/// Who may read and who may write a topic (and everything under it).
///
/// Reading: anyone when the topic is public, otherwise only its owner.
/// Writing: only the owner, public or not.
pub struct TopicAccess;

impl TopicAccess {
    pub fn can_view(topic: &Topic, viewer: Option<UserId>) -> bool {
        topic.is_public || viewer.is_some_and(|v| topic.is_owned_by(v))
    }

    pub fn can_modify(topic: &Topic, viewer: UserId) -> bool {
        topic.is_owned_by(viewer)
    }

    pub fn ensure_viewable(topic: &Topic, viewer: Option<UserId>) -> Result<(), AccessDenied> {
        if Self::can_view(topic, viewer) {
            Ok(())
        } else {
            Err(AccessDenied)
        }
    }

    pub fn ensure_modifiable(topic: &Topic, viewer: UserId) -> Result<(), AccessDenied> {
        if Self::can_modify(topic, viewer) {
            Ok(())
        } else {
            Err(AccessDenied)
        }
    }
}
