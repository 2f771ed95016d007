//! Reading and writing the brace-delimited text form.
//!
//! - `key = value` stores a value; everything after the first `=` up to the
//!   end of the line is the value, trimmed.
//! - A bare word followed by `{` opens a child node; `}` closes it.
//! - `//` starts a comment that runs to the end of the line.
//!
//! Because of the last two rules a value can never contain `=` as its key
//! separator or `//`; callers that store binary data substitute those
//! characters before writing.

use crate::error::DocumentError;
use crate::node::ConfigNode;

impl ConfigNode {
    /// Parses a document. The returned root node is unnamed.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentError`] on unbalanced braces, a node header not
    /// followed by `{`, or input ending inside a node.
    pub fn parse(text: &str) -> Result<ConfigNode, DocumentError> {
        let mut stack = vec![ConfigNode::default()];
        // Node name waiting for its opening brace, with the line it appeared on.
        let mut pending: Option<(String, usize)> = None;

        for (line_idx, raw_line) in text.lines().enumerate() {
            let line_no = line_idx + 1;
            let line = match raw_line.find("//") {
                Some(pos) => &raw_line[..pos],
                None => raw_line,
            };

            for segment in split_braces(line) {
                match segment {
                    Segment::Open => {
                        let name = pending.take().map(|(name, _)| name).unwrap_or_default();
                        stack.push(ConfigNode::new(name));
                    }
                    Segment::Close => {
                        if let Some((token, line)) = pending.take() {
                            return Err(DocumentError::UnexpectedToken { line, token });
                        }
                        let done = match stack.pop() {
                            Some(done) if !stack.is_empty() => done,
                            _ => return Err(DocumentError::UnbalancedBrace { line: line_no }),
                        };
                        if let Some(parent) = stack.last_mut() {
                            parent.add_node(done);
                        }
                    }
                    Segment::Text(text) => {
                        if let Some((token, line)) = pending.take() {
                            return Err(DocumentError::UnexpectedToken { line, token });
                        }
                        match text.split_once('=') {
                            Some((key, value)) => {
                                if let Some(current) = stack.last_mut() {
                                    current.add_value(key.trim(), value.trim());
                                }
                            }
                            None => pending = Some((text.to_string(), line_no)),
                        }
                    }
                }
            }
        }

        if let Some((token, line)) = pending {
            return Err(DocumentError::UnexpectedToken { line, token });
        }
        if stack.len() > 1 {
            let name = stack
                .last()
                .map(|n| n.name().to_string())
                .unwrap_or_default();
            return Err(DocumentError::UnclosedNode { name });
        }
        Ok(stack.pop().unwrap_or_default())
    }

    /// Writes the node's contents (not its own header) as text.
    ///
    /// This is the inverse of [`parse`](Self::parse) for documents whose
    /// values contain neither `//` nor line breaks.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        write_contents(self, 0, &mut out);
        out
    }
}

enum Segment<'a> {
    Open,
    Close,
    Text(&'a str),
}

fn split_braces(line: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (idx, ch) in line.char_indices() {
        if ch == '{' || ch == '}' {
            push_text(&line[start..idx], &mut segments);
            segments.push(if ch == '{' {
                Segment::Open
            } else {
                Segment::Close
            });
            start = idx + 1;
        }
    }
    push_text(&line[start..], &mut segments);
    segments
}

fn push_text<'a>(text: &'a str, segments: &mut Vec<Segment<'a>>) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        segments.push(Segment::Text(trimmed));
    }
}

fn write_contents(node: &ConfigNode, depth: usize, out: &mut String) {
    let indent = "\t".repeat(depth);
    for value in node.iter_values() {
        out.push_str(&format!("{indent}{} = {}\n", value.name, value.value));
    }
    for child in node.iter_nodes() {
        out.push_str(&format!("{indent}{}\n{indent}{{\n", child.name()));
        write_contents(child, depth + 1, out);
        out.push_str(&format!("{indent}}}\n"));
    }
}
