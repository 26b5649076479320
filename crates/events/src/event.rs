//! The webhook event value type.
//!
//! An [`Event`] is one push or pull-request notification. The pull-request base
//! fields live inside [`EventKind::PullRequest`], so a push event cannot carry
//! them and a pull-request event cannot lack them.

use serde::Serialize;

use crate::{BranchName, CommitSha, FormatError, Owner, RepoName};

// ---------------------------------------------------------------------------
// Event kind
// ---------------------------------------------------------------------------

/// Wire name of a push event.
pub const PUSH: &str = "push";

/// Wire name of a pull-request event.
pub const PULL_REQUEST: &str = "pull_request";

/// The target side of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PullRequestBase {
    /// Owner of the repository the pull request targets.
    pub owner: Owner,
    /// Repository the pull request targets.
    pub repo: RepoName,
    /// Branch the pull request targets.
    pub branch: BranchName,
}

/// Which kind of notification an [`Event`] represents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Commits were pushed to a branch.
    Push,
    /// A pull request was opened or updated against `base`.
    PullRequest(PullRequestBase),
}

impl EventKind {
    /// Returns the wire name (`"push"` or `"pull_request"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Push => PUSH,
            EventKind::PullRequest(_) => PULL_REQUEST,
        }
    }
}

// ---------------------------------------------------------------------------
// Event
// ---------------------------------------------------------------------------

/// A decoded webhook notification.
///
/// Immutable once built. Obtained from [`crate::decode`] for inbound payloads,
/// or from [`Event::push`] / [`Event::pull_request`] for locally produced ones.
/// Both paths only admit values that survive an encode/decode round trip.
///
/// Serialize-only: every `Event` comes from `decode` or a checked constructor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Event {
    kind: EventKind,
    owner: Owner,
    repo: RepoName,
    branch: BranchName,
    commit: CommitSha,
}

impl Event {
    /// Creates a push event.
    ///
    /// Fails with [`FormatError`] if a field could not survive the wire
    /// encoding: any value containing `'\n'`, or a `commit` ending in a
    /// newline, tab or space (the decoder trims those off the payload).
    pub fn push(
        owner: Owner,
        repo: RepoName,
        branch: BranchName,
        commit: CommitSha,
    ) -> Result<Self, FormatError> {
        Self::checked(EventKind::Push, owner, repo, branch, commit)
    }

    /// Creates a pull-request event whose head is `owner/repo@branch` and whose
    /// target is `base`.
    ///
    /// Same restrictions as [`Event::push`], except that the trailing-whitespace
    /// rule applies to `base.branch`, the last encoded field.
    pub fn pull_request(
        owner: Owner,
        repo: RepoName,
        branch: BranchName,
        commit: CommitSha,
        base: PullRequestBase,
    ) -> Result<Self, FormatError> {
        Self::checked(EventKind::PullRequest(base), owner, repo, branch, commit)
    }

    fn checked(
        kind: EventKind,
        owner: Owner,
        repo: RepoName,
        branch: BranchName,
        commit: CommitSha,
    ) -> Result<Self, FormatError> {
        let event = Self::from_decoded(kind, owner, repo, branch, commit);
        if crate::codec::is_encodable(&event) {
            Ok(event)
        } else {
            Err(FormatError)
        }
    }

    /// Assembles an event from values the decoder already proved encodable.
    pub(crate) fn from_decoded(
        kind: EventKind,
        owner: Owner,
        repo: RepoName,
        branch: BranchName,
        commit: CommitSha,
    ) -> Self {
        Self {
            kind,
            owner,
            repo,
            branch,
            commit,
        }
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// Returns the wire name of the event type.
    pub fn event_type(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    pub fn repo(&self) -> &RepoName {
        &self.repo
    }

    pub fn branch(&self) -> &BranchName {
        &self.branch
    }

    pub fn commit(&self) -> &CommitSha {
        &self.commit
    }

    /// Returns the pull-request target, or `None` for a push.
    pub fn base(&self) -> Option<&PullRequestBase> {
        match &self.kind {
            EventKind::Push => None,
            EventKind::PullRequest(base) => Some(base),
        }
    }

    /// One-line `owner repo branch commit` rendering used by consumers that
    /// print what they receive.
    pub fn summary(&self) -> String {
        format!("{} {} {} {}", self.owner, self.repo, self.branch, self.commit)
    }
}

/// Renders the wire encoding; see [`crate::encode`].
impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::encode(self))
    }
}

impl std::str::FromStr for Event {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::decode(s)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
