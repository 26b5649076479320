use super::*;

fn base() -> PullRequestBase {
    PullRequestBase {
        owner: Owner::new("upstream").unwrap(),
        repo: RepoName::new("widget").unwrap(),
        branch: BranchName::new("main").unwrap(),
    }
}

fn push_event() -> Event {
    Event::push(
        Owner::new("alice").unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("main").unwrap(),
        CommitSha::new("abc123").unwrap(),
    )
    .unwrap()
}

#[test]
fn push_has_no_base() {
    let event = push_event();
    assert_eq!(event.event_type(), "push");
    assert_eq!(event.kind(), &EventKind::Push);
    assert!(event.base().is_none());
}

#[test]
fn pull_request_exposes_base() {
    let event = Event::pull_request(
        Owner::new("alice").unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("fix-login").unwrap(),
        CommitSha::new("def456").unwrap(),
        base(),
    )
    .unwrap();
    assert_eq!(event.event_type(), "pull_request");
    assert_eq!(event.base(), Some(&base()));
}

#[test]
fn summary_is_space_joined_head_fields() {
    assert_eq!(push_event().summary(), "alice widget main abc123");
}

#[test]
fn display_and_from_str_use_wire_format() {
    let event = push_event();
    let text = event.to_string();
    assert!(text.starts_with("type:   push\n"));
    assert_eq!(text.parse::<Event>().unwrap(), event);
}

#[test]
fn serializes_with_type_tag() {
    let event = Event::pull_request(
        Owner::new("alice").unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("fix-login").unwrap(),
        CommitSha::new("def456").unwrap(),
        base(),
    )
    .unwrap();
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["kind"]["type"], "pull_request");
    assert_eq!(value["kind"]["owner"], "upstream");
    assert_eq!(value["owner"], "alice");
}

// ---------------------------------------------------------------------------
// Construction only admits values that survive the wire format
// ---------------------------------------------------------------------------

fn push_with(owner: &str, commit: &str) -> Result<Event, FormatError> {
    Event::push(
        Owner::new(owner).unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("main").unwrap(),
        CommitSha::new(commit).unwrap(),
    )
}

fn pull_request_with_base_branch(branch: &str) -> Result<Event, FormatError> {
    Event::pull_request(
        Owner::new("alice").unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("fix-login").unwrap(),
        CommitSha::new("def456 ").unwrap(),
        PullRequestBase {
            owner: Owner::new("upstream").unwrap(),
            repo: RepoName::new("widget").unwrap(),
            branch: BranchName::new(branch).unwrap(),
        },
    )
}

#[test]
fn push_rejects_trailing_trim_characters_in_commit() {
    for commit in ["abc123 ", "abc123\t", "abc123\n", "\t"] {
        assert_eq!(push_with("alice", commit), Err(FormatError), "{commit:?}");
    }
}

#[test]
fn rejects_embedded_newline_in_any_field() {
    assert_eq!(push_with("ali\nce", "abc123"), Err(FormatError));
    assert_eq!(pull_request_with_base_branch("ma\nin"), Err(FormatError));
}

#[test]
fn pull_request_checks_trailing_whitespace_on_base_branch_only() {
    assert_eq!(pull_request_with_base_branch("main "), Err(FormatError));

    // The head commit is not the last line of a pull-request payload, so a
    // trailing space there survives.
    let event = pull_request_with_base_branch("main").unwrap();
    assert_eq!(event.commit().as_str(), "def456 ");
    assert_eq!(crate::decode(&crate::encode(&event)).unwrap(), event);
}

#[test]
fn inner_fields_keep_surrounding_whitespace_through_round_trip() {
    let event = push_with(" alice\t", "abc123").unwrap();
    assert_eq!(crate::decode(&crate::encode(&event)).unwrap(), event);
}
