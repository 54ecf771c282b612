//! Patch applier - deterministic application of one edit to a document.
//!
//! Section location is deliberately substring-based and case-insensitive
//! rather than a structural markdown parse: documents are short, human-curated
//! markdown, and the matching contract (including the possibility of a heading
//! text matching inside prose) is part of the protocol. Heading and anchor
//! text comes from the model, so it is regex-escaped before being used in a
//! pattern.
//!
//! The applier is total: every edit yields a valid new document string. A
//! missing anchor or target section falls back to an end-of-document append,
//! never an error.

use regex::{Regex, RegexBuilder};

use super::edit::DocumentEdit;

/// Applies a validated edit to a document, producing a new document string.
///
/// The input document is never mutated in place, preserving the caller's
/// ability to diff old against new.
pub fn apply(document: &str, edit: &DocumentEdit) -> String {
    match edit {
        DocumentEdit::Add {
            section,
            content,
            insert_after,
        } => apply_add(document, section, content, insert_after.as_deref()),
        DocumentEdit::Modify {
            target_section,
            new_content,
        } => apply_modify(document, target_section, new_content),
    }
}

/// Inserts a new section after the anchor, or at the end of the document.
fn apply_add(document: &str, section: &str, content: &str, insert_after: Option<&str>) -> String {
    let full_content = format!("{}\n{}", section, content);

    let anchor = match insert_after {
        None | Some("end") => return append_to_end(document, &full_content),
        Some(anchor) => anchor,
    };

    // Anchor plus everything up to (not including) the next level-2 heading.
    // Unlike Modify spans, a level-1 heading does not end an Add span.
    let Some(span_end) = find_section_span(document, anchor, &add_boundary()) else {
        return append_to_end(document, &full_content);
    };

    format!(
        "{}\n\n{}\n{}",
        document[..span_end].trim_end(),
        full_content,
        &document[span_end..]
    )
}

/// Replaces the target section's heading line and body, or appends it as a
/// new section when it does not occur in the document.
fn apply_modify(document: &str, target_section: &str, new_content: &str) -> String {
    let level = heading_level(target_section);
    let boundary = level_boundary(level);

    let Some((span_start, span_end)) = find_section_range(document, target_section, &boundary)
    else {
        return append_to_end(document, &format!("{}\n{}", target_section, new_content));
    };

    let mut result = String::with_capacity(document.len() + new_content.len());
    result.push_str(&document[..span_start]);
    result.push_str(target_section);
    result.push('\n');
    result.push_str(new_content);

    if span_end == document.len() {
        // Replaced section ran to the end of the document; keep a single
        // trailing newline.
        if !result.ends_with('\n') {
            result.push('\n');
        }
    } else {
        result.push_str(&document[span_end..]);
    }

    result
}

/// Appends a section to the document with normalized whitespace: one blank
/// line of separation and a single trailing newline.
fn append_to_end(document: &str, full_content: &str) -> String {
    format!("{}\n\n{}\n", document.trim_end(), full_content)
}

/// Counts leading `#` characters to determine heading level.
///
/// Free text without a leading `#` defaults to level 2.
fn heading_level(heading: &str) -> usize {
    let count = heading.chars().take_while(|c| *c == '#').count();
    if count == 0 {
        2
    } else {
        count
    }
}

/// Boundary pattern ending an Add anchor span: exactly a level-2 heading.
fn add_boundary() -> Regex {
    Regex::new(r"\n##\s").expect("boundary pattern is valid")
}

/// Boundary pattern for the next heading of level <= `level`.
fn level_boundary(level: usize) -> Regex {
    // A newline followed by 1..=level hashes and a whitespace character.
    // `\n## x` matches for level 2; `\n### x` does not.
    let pattern = format!(r"\n#{{1,{}}}\s", level);
    Regex::new(&pattern).expect("boundary pattern is valid")
}

/// Finds the end offset of the section starting at the first case-insensitive
/// occurrence of `heading`, extending to the boundary or end of document.
fn find_section_span(document: &str, heading: &str, boundary: &Regex) -> Option<usize> {
    find_section_range(document, heading, boundary).map(|(_, end)| end)
}

/// Finds the byte range of the section: heading occurrence through the
/// boundary (exclusive) or end of document.
fn find_section_range(document: &str, heading: &str, boundary: &Regex) -> Option<(usize, usize)> {
    let heading_re = RegexBuilder::new(&regex::escape(heading))
        .case_insensitive(true)
        .build()
        .ok()?;

    let matched = heading_re.find(document)?;
    let start = matched.start();

    let end = boundary
        .find(&document[matched.end()..])
        .map(|b| matched.end() + b.start())
        .unwrap_or(document.len());

    Some((start, end))
}
