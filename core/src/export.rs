//! CSV rendering of the full assignment mapping.
//!
//! Format, one line per pairing in receiver-number order:
//!   santaName,santaEmail,receiverNumber,receiverName,receiverEmail,"wish"
//! Embedded commas in free-text fields are replaced with spaces to keep
//! the format trivial to split; internal quotes are left as-is.

use crate::assignment::AssignmentDetail;

const HEADER: &str = "santaName,santaEmail,receiverNumber,receiverName,receiverEmail,wishlist";

pub fn render_csv(details: &[AssignmentDetail]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for detail in details {
        out.push_str(&format!(
            "{},{},{},{},{},\"{}\"\n",
            strip_commas(&detail.santa_name),
            strip_commas(&detail.santa_email),
            detail.receiver_number,
            strip_commas(&detail.receiver_name),
            strip_commas(&detail.receiver_email),
            strip_commas(&wishlist_text(detail)),
        ));
    }
    out
}

fn wishlist_text(detail: &AssignmentDetail) -> String {
    match &detail.wish_link {
        Some(link) => format!("{} ({})", detail.wish, link),
        None => detail.wish.clone(),
    }
}

fn strip_commas(text: &str) -> String {
    text.replace(',', " ")
}
