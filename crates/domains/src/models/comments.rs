//! Comment entities, including the soft-delete content mask.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::{format_timestamp, Payload};
use crate::errors::{DomainError, EntityKind, Result};

/// Shown in place of the content of a soft-deleted comment.
pub const DELETED_COMMENT_PLACEHOLDER: &str = "**komentar telah dihapus**";

/// A comment submission, validated from the client payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    content: String,
    thread_id: Option<String>,
    owner: Option<String>,
}

impl NewComment {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let payload = Payload::new(payload, EntityKind::NewComment);
        payload.require(&["content"])?;

        Ok(Self {
            content: payload.string("content")?.to_owned(),
            thread_id: None,
            owner: None,
        })
    }

    /// Binds the comment to its (already verified) thread and its author.
    pub fn attach(mut self, thread_id: impl Into<String>, owner: impl Into<String>) -> Self {
        self.thread_id = Some(thread_id.into());
        self.owner = Some(owner.into());
        self
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn thread_id(&self) -> Result<&str> {
        Self::attached(self.thread_id.as_deref())
    }

    pub fn owner(&self) -> Result<&str> {
        Self::attached(self.owner.as_deref())
    }

    fn attached(value: Option<&str>) -> Result<&str> {
        value
            .filter(|value| !value.is_empty())
            .ok_or(DomainError::missing(EntityKind::NewComment))
    }
}

/// The storage result of a comment insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedComment {
    id: String,
    content: String,
    owner: String,
}

impl AddedComment {
    pub fn new(
        id: impl Into<String>,
        content: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self> {
        let (id, content, owner) = (id.into(), content.into(), owner.into());
        if id.is_empty() || content.is_empty() || owner.is_empty() {
            return Err(DomainError::missing(EntityKind::AddedComment));
        }
        Ok(Self { id, content, owner })
    }

    pub fn from_payload(payload: &Value) -> Result<Self> {
        let payload = Payload::new(payload, EntityKind::AddedComment);
        payload.require(&["id", "content", "owner"])?;
        Self::new(
            payload.string("id")?,
            payload.string("content")?,
            payload.string("owner")?,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Comment row joined with its author's username, ordered by creation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentRecord {
    pub id: String,
    /// `None` when the author has no matching user row.
    pub username: Option<String>,
    pub date: DateTime<Utc>,
    pub content: String,
    pub is_delete: bool,
}

/// A comment as read back for display.
///
/// The mask is applied once at construction: a deleted comment never exposes
/// its original content through this value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentDetail {
    id: String,
    username: String,
    date: String,
    content: String,
    is_delete: bool,
}

impl CommentDetail {
    fn masked(
        id: String,
        username: String,
        date: String,
        content: String,
        is_delete: bool,
    ) -> Self {
        let content = if is_delete {
            DELETED_COMMENT_PLACEHOLDER.to_owned()
        } else {
            content
        };
        Self {
            id,
            username,
            date,
            content,
            is_delete,
        }
    }

    /// `content` may be empty; `is_delete` must be present and boolean.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let payload = Payload::new(payload, EntityKind::CommentDetail);
        payload.require(&["id", "username", "date"])?;
        payload.require_present(&["content", "is_delete"])?;

        let id = payload.string("id")?.to_owned();
        let username = payload.string("username")?.to_owned();
        let content = payload.string("content")?.to_owned();
        let is_delete = payload.boolean("is_delete")?;
        let date = payload.timestamp("date")?;

        Ok(Self::masked(id, username, date, content, is_delete))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_deleted(&self) -> bool {
        self.is_delete
    }

    /// Drops the deletion flag, keeping only the publicly visible fields.
    pub fn into_view(self) -> CommentView {
        CommentView {
            id: self.id,
            username: self.username,
            date: self.date,
            content: self.content,
        }
    }
}

impl TryFrom<CommentRecord> for CommentDetail {
    type Error = DomainError;

    fn try_from(record: CommentRecord) -> Result<Self> {
        let username = record.username.unwrap_or_default();
        if record.id.is_empty() || username.is_empty() {
            return Err(DomainError::missing(EntityKind::CommentDetail));
        }
        Ok(Self::masked(
            record.id,
            username,
            format_timestamp(record.date),
            record.content,
            record.is_delete,
        ))
    }
}

/// Public projection of a comment embedded in a thread detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub username: String,
    pub date: String,
    pub content: String,
}
