//! Line segmentation shared by the card renderers.
//!
//! Advice markdown carries two block shapes:
//! - header-delimited blocks (numbered roles, learning months, certification lists),
//!   where a header line opens a block that runs until the next header;
//! - fenced blocks (` ```skill-meter `, ` ```project-card `) that open on a marker
//!   line and close on the next line containing a bare fence.

/// Closing marker for fenced micro-formats.
pub const FENCE: &str = "```";

/// A header line plus the member lines collected under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    pub header: &'a str,
    pub body: Vec<&'a str>,
}

/// Splits `text` into header-delimited blocks.
///
/// A line accepted by `is_header` flushes the open block and starts a new one.
/// Any other line joins the open block if `keep` accepts it. Lines before the
/// first header belong to no block and are dropped.
pub fn blocks<'a, H, K>(text: &'a str, is_header: H, keep: K) -> Vec<Block<'a>>
where
    H: Fn(&str) -> bool,
    K: Fn(&str) -> bool,
{
    let mut out = Vec::new();
    let mut current: Option<Block<'a>> = None;

    for line in text.lines() {
        if is_header(line) {
            out.extend(current.take());
            current = Some(Block {
                header: line,
                body: Vec::new(),
            });
        } else if let Some(block) = current.as_mut() {
            if keep(line) {
                block.body.push(line);
            }
        }
    }

    out.extend(current);
    out
}

/// Segments `text` with [`blocks`] and parses every block into a record.
pub fn parse_blocks<'a, T, H, K, P>(text: &'a str, is_header: H, keep: K, parse: P) -> Vec<T>
where
    H: Fn(&str) -> bool,
    K: Fn(&str) -> bool,
    P: Fn(&Block<'a>) -> T,
{
    blocks(text, is_header, keep).iter().map(parse).collect()
}

/// Numbered entries used by roles and the learning path: `1.`, `2.`, `3.`.
pub fn is_numbered_entry(line: &str) -> bool {
    let line = line.trim();
    ["1.", "2.", "3."].iter().any(|n| line.starts_with(n))
}

pub fn is_non_blank(line: &str) -> bool {
    !line.trim().is_empty()
}

/// One piece of a fenced scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// A line outside any fence; renderers pass it through.
    Line(&'a str),
    /// The lines between an opening marker and its fence. `closed` is false
    /// when the input ended before the fence closed.
    Fence { lines: Vec<&'a str>, closed: bool },
}

/// What a second opening marker does to a fence that is still open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reopen {
    /// Drop the partial fence and start over (project cards).
    Discard,
    /// Emit the partial fence as unclosed, then open a new one (skill meters).
    Flush,
}

/// Splits `text` into pass-through lines and fenced regions opened by `open_marker`.
///
/// The marker lines themselves are consumed.
pub fn fenced<'a>(text: &'a str, open_marker: &str, reopen: Reopen) -> Vec<Segment<'a>> {
    let mut out = Vec::new();
    let mut open: Option<Vec<&'a str>> = None;

    for line in text.lines() {
        if line.contains(open_marker) {
            if let (Some(lines), Reopen::Flush) = (open.take(), reopen) {
                out.push(Segment::Fence {
                    lines,
                    closed: false,
                });
            }
            open = Some(Vec::new());
            continue;
        }

        match open {
            None => out.push(Segment::Line(line)),
            Some(_) if line.contains(FENCE) => {
                if let Some(lines) = open.take() {
                    out.push(Segment::Fence {
                        lines,
                        closed: true,
                    });
                }
            }
            Some(ref mut lines) => lines.push(line),
        }
    }

    if let Some(lines) = open {
        out.push(Segment::Fence {
            lines,
            closed: false,
        });
    }
    out
}
