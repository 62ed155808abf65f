//! CSV export tests.

use exchange_core::assignment::AssignmentDetail;
use exchange_core::export::render_csv;

fn detail(
    santa: &str,
    receiver: &str,
    number: u32,
    wish: &str,
    wish_link: Option<&str>,
) -> AssignmentDetail {
    let santa_lower = santa.to_lowercase();
    let receiver_lower = receiver.to_lowercase();
    AssignmentDetail {
        santa_id: format!("p-{santa_lower}"),
        santa_name: santa.to_string(),
        santa_email: format!("{santa_lower}@example.com"),
        receiver_id: format!("p-{receiver_lower}"),
        receiver_name: receiver.to_string(),
        receiver_email: format!("{receiver_lower}@example.com"),
        receiver_number: number,
        wish: wish.to_string(),
        wish_link: wish_link.map(|l| l.to_string()),
    }
}

#[test]
fn header_then_one_line_per_pairing() {
    let details = vec![
        detail("Alice", "Bob", 1, "wool socks", None),
        detail("Bob", "Alice", 2, "a teapot", None),
    ];
    let csv = render_csv(&details);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "santaName,santaEmail,receiverNumber,receiverName,receiverEmail,wishlist"
    );
    assert_eq!(
        lines[1],
        "Alice,alice@example.com,1,Bob,bob@example.com,\"wool socks\""
    );
    assert_eq!(
        lines[2],
        "Bob,bob@example.com,2,Alice,alice@example.com,\"a teapot\""
    );
}

#[test]
fn commas_in_free_text_become_spaces() {
    let details = vec![detail("Alice", "Bob", 1, "red, wool, socks", None)];
    let csv = render_csv(&details);
    let line = csv.lines().nth(1).unwrap();

    assert_eq!(
        line,
        "Alice,alice@example.com,1,Bob,bob@example.com,\"red  wool  socks\""
    );
    assert_eq!(
        line.matches(',').count(),
        5,
        "only the five field separators may remain"
    );
}

#[test]
fn internal_quotes_are_not_escaped() {
    let details = vec![detail("Alice", "Bob", 1, "the \"good\" chocolate", None)];
    let csv = render_csv(&details);
    assert!(
        csv.contains("\"the \"good\" chocolate\""),
        "format does no quote escaping: {csv}"
    );
}

#[test]
fn wish_link_is_appended_to_the_wishlist_field() {
    let details = vec![detail(
        "Alice",
        "Bob",
        1,
        "wool socks",
        Some("https://example.com/socks"),
    )];
    let csv = render_csv(&details);
    assert!(
        csv.contains("\"wool socks (https://example.com/socks)\""),
        "link should ride along in the wishlist field: {csv}"
    );
}
