use super::*;

const ALICE_PUSH: &str = "type:   push\n\
owner:  alice\n\
repo:   widget\n\
branch: main\n\
commit: abc123\n";

const ALICE_PULL_REQUEST: &str = "type:   pull_request\n\
owner:  alice\n\
repo:   widget\n\
branch: fix-login\n\
commit: def456\n\
bowner: upstream\n\
brepo:  widget-core\n\
bbranch:main\n";

fn push_event() -> Event {
    Event::push(
        Owner::new("alice").unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("main").unwrap(),
        CommitSha::new("abc123").unwrap(),
    )
    .unwrap()
}

fn pull_request_event() -> Event {
    Event::pull_request(
        Owner::new("alice").unwrap(),
        RepoName::new("widget").unwrap(),
        BranchName::new("fix-login").unwrap(),
        CommitSha::new("def456").unwrap(),
        PullRequestBase {
            owner: Owner::new("upstream").unwrap(),
            repo: RepoName::new("widget-core").unwrap(),
            branch: BranchName::new("main").unwrap(),
        },
    )
    .unwrap()
}

/// Builds a payload of `count` well-formed lines, the first being `type_line`.
fn payload_with_lines(type_line: &str, count: usize) -> String {
    let mut lines = vec![type_line.to_string()];
    lines.extend((1..count).map(|i| format!("field{i}: value{i}")));
    lines.join("\n")
}

// ---------------------------------------------------------------------------
// decode
// ---------------------------------------------------------------------------

#[test]
fn decodes_push_payload() {
    let event = decode(ALICE_PUSH).unwrap();
    assert_eq!(event, push_event());
    assert_eq!(event.owner().as_str(), "alice");
    assert_eq!(event.repo().as_str(), "widget");
    assert_eq!(event.branch().as_str(), "main");
    assert_eq!(event.commit().as_str(), "abc123");
    assert!(event.base().is_none());
}

#[test]
fn decodes_pull_request_payload() {
    let event = decode(ALICE_PULL_REQUEST).unwrap();
    assert_eq!(event, pull_request_event());
    let base = event.base().unwrap();
    assert_eq!(base.owner.as_str(), "upstream");
    assert_eq!(base.repo.as_str(), "widget-core");
    assert_eq!(base.branch.as_str(), "main");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    let padded = format!("\n\t  {ALICE_PUSH}\n\n \t");
    assert_eq!(decode(&padded).unwrap(), push_event());
}

#[test]
fn labels_are_not_inspected() {
    let payload = "XXXXXXXXpush\nXXXXXXXXalice\nXXXXXXXXwidget\nXXXXXXXXmain\nXXXXXXXXabc123";
    assert_eq!(decode(payload).unwrap(), push_event());
}

#[test]
fn values_are_not_trimmed_per_line() {
    let payload = "type:   push\nowner:   alice\nrepo:   widget\nbranch: main\ncommit: abc123";
    let event = decode(payload).unwrap();
    assert_eq!(event.owner().as_str(), " alice");
}

#[test]
fn rejects_line_counts_other_than_five_or_eight() {
    for count in [1, 2, 4, 6, 7, 9, 12] {
        let payload = payload_with_lines("type:   push", count);
        assert_eq!(decode(&payload), Err(FormatError), "{count} lines");
        let payload = payload_with_lines("type:   pull_request", count);
        assert_eq!(decode(&payload), Err(FormatError), "{count} lines");
    }
}

#[test]
fn rejects_empty_and_blank_payloads() {
    assert_eq!(decode(""), Err(FormatError));
    assert_eq!(decode(" \n\t\n "), Err(FormatError));
}

#[test]
fn rejects_line_shorter_than_label() {
    let payload = "type:   push\nowner:  alice\nrepo:\nbranch: main\ncommit: abc123";
    assert_eq!(decode(payload), Err(FormatError));
}

#[test]
fn rejects_empty_field_value() {
    let payload = "type:   push\nowner:  \nrepo:   widget\nbranch: main\ncommit: abc123";
    assert_eq!(decode(payload), Err(FormatError));
}

#[test]
fn rejects_unknown_event_type() {
    let payload = ALICE_PUSH.replace("push", "tag");
    assert_eq!(decode(&payload), Err(FormatError));
    let payload = ALICE_PUSH.replace("push", "Push");
    assert_eq!(decode(&payload), Err(FormatError));
}

#[test]
fn rejects_push_with_eight_lines() {
    let payload = ALICE_PULL_REQUEST.replace("pull_request", "push");
    assert_eq!(decode(&payload), Err(FormatError));
}

#[test]
fn rejects_pull_request_with_five_lines() {
    let payload = ALICE_PUSH.replace("push", "pull_request");
    assert_eq!(decode(&payload), Err(FormatError));
}

#[test]
fn rejects_multibyte_character_across_label_boundary() {
    // 'é' occupies bytes 7..9 of the repo line, so offset 8 splits it.
    let payload = "type:   push\nowner:  alice\nrepo:  éwidget\nbranch: main\ncommit: abc123";
    assert_eq!(decode(payload), Err(FormatError));
}

#[test]
fn decode_bytes_rejects_invalid_utf8() {
    let mut body = ALICE_PUSH.as_bytes().to_vec();
    body[20] = 0xff;
    assert_eq!(decode_bytes(&body), Err(FormatError));
    assert_eq!(decode_bytes(ALICE_PUSH.as_bytes()).unwrap(), push_event());
}

// ---------------------------------------------------------------------------
// encode
// ---------------------------------------------------------------------------

#[test]
fn encodes_push_byte_for_byte() {
    assert_eq!(encode(&push_event()), ALICE_PUSH);
}

#[test]
fn encodes_pull_request_byte_for_byte() {
    assert_eq!(encode(&pull_request_event()), ALICE_PULL_REQUEST);
}

#[test]
fn every_encoded_line_has_label_width_prefix() {
    for line in encode(&pull_request_event()).lines() {
        assert!(line.len() > LABEL_WIDTH, "{line:?}");
        assert!(line.is_char_boundary(LABEL_WIDTH));
    }
}

#[test]
fn round_trips_both_kinds() {
    for event in [push_event(), pull_request_event()] {
        assert_eq!(decode(&encode(&event)).unwrap(), event);
    }
}

#[test]
fn round_trips_values_with_spaces_and_unicode() {
    let event = Event::push(
        Owner::new(" spaced owner").unwrap(),
        RepoName::new("wïdget").unwrap(),
        BranchName::new("feature/ünïcode").unwrap(),
        CommitSha::new("0123456789abcdef").unwrap(),
    )
    .unwrap();
    assert_eq!(decode(&encode(&event)).unwrap(), event);
}
