use std::io::BufRead;

use log::warn;

use crate::{Error, Weight};

/// One non-blank line of the input: `VERTEX (WEIGHT DESTINATION)*`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphLine {
    /// 1-based line number in the source
    pub line_no: usize,
    pub vertex: String,
    pub edges: Vec<(Weight, String)>,
}

/// Reads every non-blank line of `reader`.
///
/// # Errors
///
/// Returns an error if reading fails or a weight is not a non-negative integer
pub fn parse_lines<R: BufRead>(reader: R) -> Result<Vec<GraphLine>, Error> {
    let mut lines = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(parsed) = parse_line(idx + 1, &line)? {
            lines.push(parsed);
        }
    }
    Ok(lines)
}

fn parse_line(line_no: usize, line: &str) -> Result<Option<GraphLine>, Error> {
    let mut tokens = line.split_whitespace();
    let Some(vertex) = tokens.next() else {
        return Ok(None);
    };

    let mut edges = Vec::new();
    while let Some(weight) = tokens.next() {
        let Some(destination) = tokens.next() else {
            warn!("line {line_no}: weight `{weight}` has no destination, ignoring it");
            break;
        };
        let weight = weight.parse::<Weight>().map_err(|_| {
            Error::InvalidData(format!(
                "line {line_no}: `{weight}` is not a valid non-negative weight"
            ))
        })?;
        edges.push((weight, destination.to_string()));
    }

    Ok(Some(GraphLine {
        line_no,
        vertex: vertex.to_string(),
        edges,
    }))
}
