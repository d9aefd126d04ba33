//! Marker-delimited docblock insertion and removal.
//!
//! The transform treats the file as flat text plus two literal marker lines.
//! It never raises: "nothing to do" is signalled solely by returning content
//! identical to the input, and the caller decides whether to write.

use regex::Regex;
use std::sync::OnceLock;

/// Opening marker line content. Part of the on-disk file contract; other
/// tooling must not corrupt the pair.
pub const START_TAG: &str = "StartGeneratedWithOrmdoc";

/// Closing marker line content.
pub const END_TAG: &str = "EndGeneratedWithOrmdoc";

///
/// MarkerState
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MarkerState {
    /// No marker appears anywhere in the content.
    Absent,
    /// Markers appear as one or more well-formed start/end pairs.
    Present,
    /// Unbalanced, nested, or out-of-order markers. The content is never
    /// modified in this state.
    Malformed,
}

/// Classify the marker arrangement in `content`.
///
/// Well-formed means the start and end tags strictly alternate, starting with
/// a start tag and ending with an end tag.
#[must_use]
pub fn marker_state(content: &str) -> MarkerState {
    let mut occurrences: Vec<(usize, bool)> = content
        .match_indices(START_TAG)
        .map(|(idx, _)| (idx, true))
        .chain(content.match_indices(END_TAG).map(|(idx, _)| (idx, false)))
        .collect();
    occurrences.sort_unstable_by_key(|&(idx, _)| idx);

    if occurrences.is_empty() {
        return MarkerState::Absent;
    }
    if occurrences.len() % 2 != 0 {
        return MarkerState::Malformed;
    }

    for (i, &(_, is_start)) in occurrences.iter().enumerate() {
        let expect_start = i % 2 == 0;
        if is_start != expect_start {
            return MarkerState::Malformed;
        }
    }

    MarkerState::Present
}

///
/// DocBlock
/// The insert/replace/strip transform for one target class. Carrying the
/// class name lets the span scan anchor to the block nearest that class's
/// declaration, so multi-class files stay safe.
///

pub struct DocBlock<'a> {
    class_name: &'a str,
}

impl<'a> DocBlock<'a> {
    #[must_use]
    pub const fn new(class_name: &'a str) -> Self {
        Self { class_name }
    }

    /// Insert a fresh block before the class declaration, or replace the
    /// existing adjacent block wholesale.
    ///
    /// No-op cases, all returning the input unchanged: empty payload, no
    /// matching declaration line, malformed markers.
    #[must_use]
    pub fn apply(&self, content: &str, payload: &[String]) -> String {
        if payload.is_empty() || marker_state(content) == MarkerState::Malformed {
            return content.to_string();
        }

        let Some(decl_start) = self.declaration_start(content) else {
            return content.to_string();
        };

        let block = build_block(payload);
        match adjacent_block_span(content, decl_start) {
            // ANNOTATED: replace the whole existing span.
            Some((span_start, span_end)) => {
                let mut next = String::with_capacity(content.len() + block.len());
                next.push_str(&content[..span_start]);
                next.push_str(&block);
                next.push_str(&content[span_end..]);
                next
            }
            // UNANNOTATED: insert directly before the declaration line.
            None => {
                let mut next = String::with_capacity(content.len() + block.len());
                next.push_str(&content[..decl_start]);
                next.push_str(&block);
                next.push_str(&content[decl_start..]);
                next
            }
        }
    }

    /// Remove the generated block, restoring the pre-insertion content.
    /// No-op when no well-formed block exists for this class.
    #[must_use]
    pub fn strip(&self, content: &str) -> String {
        match marker_state(content) {
            MarkerState::Absent | MarkerState::Malformed => return content.to_string(),
            MarkerState::Present => {}
        }

        let span = match self.declaration_start(content) {
            Some(decl_start) => adjacent_block_span(content, decl_start),
            // Declaration pattern gone (file edited since annotation): still
            // honour undo, but only when the file holds a single block — with
            // several blocks there is no way to tell which one is ours.
            None => sole_block_span(content),
        };

        match span {
            Some((span_start, span_end)) => {
                let mut next =
                    String::with_capacity(content.len() - (span_end - span_start));
                next.push_str(&content[..span_start]);
                next.push_str(&content[span_end..]);
                next
            }
            None => content.to_string(),
        }
    }

    // Byte offset of the line that defines the class: the `class` keyword plus
    // the inheritance keyword, anchored to line start so a mention of the name
    // elsewhere never matches.
    fn declaration_start(&self, content: &str) -> Option<usize> {
        let pattern = format!(
            r"(?m)^[ \t]*(?:abstract\s+|final\s+)?class\s+{}\s+extends\s+[A-Za-z_][A-Za-z0-9_\\]*",
            regex::escape(self.class_name)
        );
        let re = Regex::new(&pattern).expect("escaped declaration pattern is valid");

        re.find(content).map(|m| m.start())
    }
}

// The well-formed marker block span nearest the declaration: its end must be
// separated from the declaration line by whitespace only.
fn adjacent_block_span(content: &str, decl_start: usize) -> Option<(usize, usize)> {
    block_regex()
        .find_iter(content)
        .map(|m| (m.start(), m.end()))
        .filter(|&(_, end)| {
            end <= decl_start && content[end..decl_start].chars().all(char::is_whitespace)
        })
        .last()
}

// The only well-formed block span in the file, or None when there are zero
// or several.
fn sole_block_span(content: &str) -> Option<(usize, usize)> {
    let mut matches = block_regex().find_iter(content);
    let first = matches.next()?;
    if matches.next().is_some() {
        return None;
    }

    Some((first.start(), first.end()))
}

// Non-greedy span from the comment opener nearest the start tag to the
// closer nearest the end tag, plus the trailing newline. The `[^*]|\*[^/]`
// guards keep the span from swallowing an unrelated closed comment.
fn block_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();

    RE.get_or_init(|| {
        let pattern = format!(
            r"(?s)/\*\*(?:[^*]|\*[^/])*?{START_TAG}.*?{END_TAG}(?:[^*]|\*[^/])*?\*/[ \t]*\n?"
        );

        Regex::new(&pattern).expect("marker block pattern is valid")
    })
}

fn build_block(payload: &[String]) -> String {
    let mut block = String::new();
    block.push_str("/**\n");
    block.push_str(" * ");
    block.push_str(START_TAG);
    block.push('\n');
    for line in payload {
        block.push_str(line);
        block.push('\n');
    }
    block.push_str(" * ");
    block.push_str(END_TAG);
    block.push('\n');
    block.push_str(" */\n");

    block
}

#[cfg(test)]
mod tests;
