//! Indentation normalization for text pulled out of documentation XML.
//!
//!     Compilers copy doc comments into the XML file with every line prefixed by the
//!     indentation of the surrounding XML, so a two line summary arrives as:
//!
//!         "\n            First line\n            second line.\n        "
//!
//!     The basis is the leading whitespace of the first non-blank line. It is computed
//!     once per parent element (from its first text child) and reused for every text
//!     child of that parent, so prose that is interrupted by inline elements reflows the
//!     same way on both sides of the element.
//!
//!     Prose is reflowed onto a single line. Code keeps its line structure.

/// Small indents are taken as authored spacing rather than compiler indentation.
const MIN_COMPILER_INDENT: usize = 4;

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Removes the first `indent` characters when they are all whitespace.
fn strip_indent(line: &str, indent: usize) -> &str {
    let mut chars = line.char_indices();
    for _ in 0..indent {
        match chars.next() {
            Some((_, c)) if c.is_whitespace() => {}
            Some(_) => return line,
            None => return "",
        }
    }
    match chars.next() {
        Some((start, _)) => &line[start..],
        None => "",
    }
}

/// Returns the indentation basis of `text`: the leading whitespace width of its
/// first line, ignoring a blank first and a blank last line.
pub fn get_indentation(text: &str) -> usize {
    let mut lines = split_lines(text);
    if lines.first().is_some_and(|line| is_blank(line)) {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| is_blank(line)) {
        lines.pop();
    }
    lines.first().map_or(0, |line| leading_whitespace(line))
}

/// Strips `indent` from every line, drops blank lines and joins the rest with
/// single spaces.
pub fn trim_prose(text: &str, indent: usize) -> String {
    let lines: Vec<&str> = split_lines(text)
        .into_iter()
        .filter(|line| !is_blank(line))
        .collect();

    let indent = match lines.first() {
        Some(first) if indent <= MIN_COMPILER_INDENT && !first.starts_with('\t') => 0,
        _ => indent,
    };

    lines
        .iter()
        .map(|line| strip_indent(line, indent))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strips `indent` from every line and keeps the line structure. Leading and
/// trailing blank lines are dropped, interior ones are preserved.
pub fn trim_code(text: &str, indent: usize) -> String {
    let lines = split_lines(text);
    let start = lines.iter().position(|line| !is_blank(line));
    let end = lines.iter().rposition(|line| !is_blank(line));

    match (start, end) {
        (Some(start), Some(end)) => lines[start..=end]
            .iter()
            .map(|line| strip_indent(line, indent))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => String::new(),
    }
}
