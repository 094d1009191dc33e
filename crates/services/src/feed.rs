use chrono::{DateTime, SecondsFormat, Utc};
use kanvas_db::models::{ActivityItem, ActivityType, FileAttachment, ProjectStatus};

use crate::ids::{ACTIVITY_PREFIX, generate_id};
use crate::session::SessionUser;

/// A feed entry written by `author` at `now`.
pub fn authored_item(
    author: &SessionUser,
    activity_type: ActivityType,
    content: String,
    file: Option<FileAttachment>,
    now: DateTime<Utc>,
) -> ActivityItem {
    ActivityItem {
        id: generate_id(ACTIVITY_PREFIX),
        activity_type,
        user_id: author.id.clone(),
        user_name: author.name.clone(),
        user_avatar: author.image.clone(),
        timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        content,
        file,
    }
}

/// "changed status to In Review" and friends.
pub fn status_change_item(
    author: &SessionUser,
    status: ProjectStatus,
    now: DateTime<Utc>,
) -> ActivityItem {
    authored_item(
        author,
        ActivityType::Status,
        format!("changed status to {}", status.label()),
        None,
        now,
    )
}
