//! Line-based wire codec for [`Event`].
//!
//! ## Format
//!
//! One field per `\n`-terminated line. Every line starts with an 8-byte label
//! and the value begins at byte offset 8:
//!
//! ```text
//! type:   push
//! owner:  alice
//! repo:   widget
//! branch: main
//! commit: abc123
//! ```
//!
//! A `pull_request` event appends three more lines (`bowner: `, `brepo:  `,
//! `bbranch:`) for the target repository, giving 8 lines in total.
//!
//! Labels are never read back: the decoder trusts line position alone and
//! only checks that each line is long enough to hold a label. There is no
//! escaping, so a field value containing a newline cannot be represented.

use crate::{BranchName, CommitSha, Event, EventKind, FormatError, Owner, PullRequestBase, RepoName};

/// Width of the label prefix on every line.
pub const LABEL_WIDTH: usize = 8;

/// Line count of an encoded push event.
pub const PUSH_LINES: usize = 5;

/// Line count of an encoded pull-request event.
pub const PULL_REQUEST_LINES: usize = 8;

const TYPE_LABEL: &str = "type:   ";
const OWNER_LABEL: &str = "owner:  ";
const REPO_LABEL: &str = "repo:   ";
const BRANCH_LABEL: &str = "branch: ";
const COMMIT_LABEL: &str = "commit: ";
const BASE_OWNER_LABEL: &str = "bowner: ";
const BASE_REPO_LABEL: &str = "brepo:  ";
const BASE_BRANCH_LABEL: &str = "bbranch:";

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

/// Decodes a raw webhook body.
///
/// Bodies that are not valid UTF-8 are rejected with [`FormatError`].
pub fn decode_bytes(payload: &[u8]) -> Result<Event, FormatError> {
    let text = std::str::from_utf8(payload).map_err(|_| FormatError)?;
    decode(text)
}

/// Decodes the text encoding produced by [`encode`].
///
/// Leading and trailing newlines, tabs and spaces around the whole payload are
/// ignored. Every structural violation yields the same [`FormatError`]; no
/// partially populated event is ever returned.
pub fn decode(payload: &str) -> Result<Event, FormatError> {
    let trimmed = payload.trim_matches(is_trimmed);
    let lines: Vec<&str> = trimmed.split('\n').collect();

    if lines.len() != PUSH_LINES && lines.len() != PULL_REQUEST_LINES {
        return Err(FormatError);
    }

    let values = lines
        .iter()
        .map(|line| field_value(line))
        .collect::<Result<Vec<&str>, FormatError>>()?;

    let owner = Owner::new(values[1]).ok_or(FormatError)?;
    let repo = RepoName::new(values[2]).ok_or(FormatError)?;
    let branch = BranchName::new(values[3]).ok_or(FormatError)?;
    let commit = CommitSha::new(values[4]).ok_or(FormatError)?;

    match (values[0], values.len()) {
        (crate::event::PUSH, PUSH_LINES) => Ok(Event::from_decoded(
            EventKind::Push,
            owner,
            repo,
            branch,
            commit,
        )),
        (crate::event::PULL_REQUEST, PULL_REQUEST_LINES) => {
            let base = PullRequestBase {
                owner: Owner::new(values[5]).ok_or(FormatError)?,
                repo: RepoName::new(values[6]).ok_or(FormatError)?,
                branch: BranchName::new(values[7]).ok_or(FormatError)?,
            };
            Ok(Event::from_decoded(
                EventKind::PullRequest(base),
                owner,
                repo,
                branch,
                commit,
            ))
        }
        _ => Err(FormatError),
    }
}

/// Returns the part of `line` after the label.
fn field_value(line: &str) -> Result<&str, FormatError> {
    if line.len() < LABEL_WIDTH {
        return Err(FormatError);
    }
    // `get` rather than indexing: a multi-byte character straddling the label
    // boundary must be a format error, not a panic.
    line.get(LABEL_WIDTH..).ok_or(FormatError)
}

// ---------------------------------------------------------------------------
// Encoding
// ---------------------------------------------------------------------------

/// Renders `event` in the wire format accepted by [`decode`].
///
/// Total: every [`Event`] can be encoded. Because events are only built by
/// [`decode`] or the checked constructors, `decode(&encode(e)) == Ok(e)`.
pub fn encode(event: &Event) -> String {
    let mut out = String::new();
    push_line(&mut out, TYPE_LABEL, event.event_type());
    push_line(&mut out, OWNER_LABEL, event.owner().as_str());
    push_line(&mut out, REPO_LABEL, event.repo().as_str());
    push_line(&mut out, BRANCH_LABEL, event.branch().as_str());
    push_line(&mut out, COMMIT_LABEL, event.commit().as_str());

    if let EventKind::PullRequest(base) = event.kind() {
        push_line(&mut out, BASE_OWNER_LABEL, base.owner.as_str());
        push_line(&mut out, BASE_REPO_LABEL, base.repo.as_str());
        push_line(&mut out, BASE_BRANCH_LABEL, base.branch.as_str());
    }

    out
}

/// Whether `event` survives an encode/decode round trip unchanged.
///
/// No value may contain `'\n'`, and the last encoded value may not end in a
/// character the payload-level trim removes.
pub(crate) fn is_encodable(event: &Event) -> bool {
    let mut values = vec![
        event.owner().as_str(),
        event.repo().as_str(),
        event.branch().as_str(),
        event.commit().as_str(),
    ];
    if let EventKind::PullRequest(base) = event.kind() {
        values.extend([base.owner.as_str(), base.repo.as_str(), base.branch.as_str()]);
    }

    let no_newlines = values.iter().all(|value| !value.contains('\n'));
    let last_untrimmed = values
        .last()
        .is_some_and(|last| !last.ends_with(is_trimmed));
    no_newlines && last_untrimmed
}

fn is_trimmed(c: char) -> bool {
    matches!(c, '\n' | '\t' | ' ')
}

fn push_line(out: &mut String, label: &str, value: &str) {
    debug_assert_eq!(label.len(), LABEL_WIDTH);
    out.push_str(label);
    out.push_str(value);
    out.push('\n');
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
