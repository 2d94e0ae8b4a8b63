//! Thread entities.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::comments::CommentView;
use super::payload::{format_timestamp, Payload};
use crate::errors::{DomainError, EntityKind, Result};

/// A thread submission, validated from the client payload.
///
/// The owner is attached by the use case once the payload is known to be
/// well-formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    title: String,
    body: String,
    owner: Option<String>,
}

impl NewThread {
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let payload = Payload::new(payload, EntityKind::NewThread);
        payload.require(&["title", "body"])?;

        Ok(Self {
            title: payload.string("title")?.to_owned(),
            body: payload.string("body")?.to_owned(),
            owner: None,
        })
    }

    pub fn attach_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Fails with `MissingProperty` if no owner was attached.
    pub fn owner(&self) -> Result<&str> {
        self.owner
            .as_deref()
            .filter(|owner| !owner.is_empty())
            .ok_or(DomainError::missing(EntityKind::NewThread))
    }
}

/// The storage result of a thread insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedThread {
    id: String,
    title: String,
    owner: String,
}

impl AddedThread {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        owner: impl Into<String>,
    ) -> Result<Self> {
        let (id, title, owner) = (id.into(), title.into(), owner.into());
        if id.is_empty() || title.is_empty() || owner.is_empty() {
            return Err(DomainError::missing(EntityKind::AddedThread));
        }
        Ok(Self { id, title, owner })
    }

    pub fn from_payload(payload: &Value) -> Result<Self> {
        let payload = Payload::new(payload, EntityKind::AddedThread);
        payload.require(&["id", "title", "owner"])?;
        Self::new(
            payload.string("id")?,
            payload.string("title")?,
            payload.string("owner")?,
        )
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

/// Thread row joined with its owner's username, as read from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadRecord {
    pub id: String,
    pub title: String,
    pub body: String,
    pub date: DateTime<Utc>,
    /// `None` when the owner has no matching user row.
    pub username: Option<String>,
}

/// The public read view of a thread and its comments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    id: String,
    title: String,
    body: String,
    date: String,
    username: String,
    comments: Vec<CommentView>,
}

impl ThreadDetail {
    pub fn new(record: ThreadRecord, comments: Vec<CommentView>) -> Result<Self> {
        let ThreadRecord {
            id,
            title,
            body,
            date,
            username,
        } = record;
        let username = username.unwrap_or_default();
        if [&id, &title, &body, &username].iter().any(|s| s.is_empty()) {
            return Err(DomainError::missing(EntityKind::ThreadDetail));
        }

        Ok(Self {
            id,
            title,
            body,
            date: format_timestamp(date),
            username,
            comments,
        })
    }

    /// An empty `comments` array is valid; a missing one is not.
    pub fn from_payload(payload: &Value) -> Result<Self> {
        let payload = Payload::new(payload, EntityKind::ThreadDetail);
        payload.require(&["id", "title", "body", "date", "username"])?;
        payload.require_present(&["comments"])?;

        let id = payload.string("id")?.to_owned();
        let title = payload.string("title")?.to_owned();
        let body = payload.string("body")?.to_owned();
        let username = payload.string("username")?.to_owned();
        let comments = payload
            .array("comments")?
            .iter()
            .map(|comment| {
                serde_json::from_value::<CommentView>(comment.clone())
                    .map_err(|_| payload.wrong_type())
            })
            .collect::<Result<Vec<_>>>()?;
        let date = payload.timestamp("date")?;

        Ok(Self {
            id,
            title,
            body,
            date,
            username,
            comments,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn comments(&self) -> &[CommentView] {
        &self.comments
    }
}
