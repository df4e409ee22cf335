//! src/io.rs
//!
//! The textual I/O shell (§1 "out of scope" collaborators, §6 external
//! interfaces): parses the bespoke graph format, maps external vertex
//! names to dense internal indices, and formats the solution back out.
//! None of this lives in the core — `Graph` and `run_search` never see a
//! name or a line of text.

use crate::graph::Graph;
use crate::result::SolveResult;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use thiserror::Error;

/// Failures surfaced while parsing the textual graph specification (§7,
/// `MalformedInput`). The core itself never produces these — it is never
/// entered until parsing has already succeeded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("line {line}: expected an integer, got {token:?}")]
    NotAnInteger { line: usize, token: String },

    #[error("line {line}: expected '<name> <weight>', got {raw:?}")]
    MalformedVertexLine { line: usize, raw: String },

    #[error("line {line}: weight must be positive, got {weight}")]
    NonPositiveWeight { line: usize, weight: i64 },

    #[error("line {line}: expected '<name_u> <name_v>', got {raw:?}")]
    MalformedEdgeLine { line: usize, raw: String },

    #[error("line {line}: unknown vertex name {name:?} in edge line")]
    UnknownVertexName { line: usize, name: String },

    #[error("unexpected end of input while reading {expected}")]
    UnexpectedEof { expected: &'static str },
}

/// A parsed instance: the internal graph plus the external name for each
/// internal index (for printing the solution back out).
pub struct Instance {
    pub graph: Graph,
    pub names: Vec<String>,
}

/// Parses the format described in §6:
///
/// ```text
/// n
/// <name_0> <weight_0>
/// ...
/// <name_{n-1}> <weight_{n-1}>
/// m
/// <name_u> <name_v>   (m lines)
/// ```
pub fn read_instance<R: BufRead>(reader: R) -> Result<Instance, ShellError> {
    let mut lines = reader.lines();
    let mut lineno = 0usize;

    let mut next_line = |expected: &'static str| -> Result<String, ShellError> {
        lineno += 1;
        match lines.next() {
            Some(Ok(l)) => Ok(l),
            Some(Err(_)) | None => Err(ShellError::UnexpectedEof { expected }),
        }
    };

    let n_line = next_line("vertex count")?;
    let n: usize = n_line
        .trim()
        .parse()
        .map_err(|_| ShellError::NotAnInteger { line: lineno, token: n_line.clone() })?;

    let mut names = Vec::with_capacity(n);
    let mut name_to_index = HashMap::with_capacity(n);
    let mut weights = Vec::with_capacity(n);

    for _ in 0..n {
        let raw = next_line("vertex line")?;
        let parts: Vec<&str> = raw.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(ShellError::MalformedVertexLine { line: lineno, raw });
        }
        let name = parts[0].to_string();
        let weight: i64 = parts[1]
            .parse()
            .map_err(|_| ShellError::NotAnInteger { line: lineno, token: parts[1].to_string() })?;
        if weight <= 0 {
            return Err(ShellError::NonPositiveWeight { line: lineno, weight });
        }
        name_to_index.insert(name.clone(), names.len());
        names.push(name);
        weights.push(weight as u64);
    }

    let m_line = next_line("edge count")?;
    let m: usize = m_line
        .trim()
        .parse()
        .map_err(|_| ShellError::NotAnInteger { line: lineno, token: m_line.clone() })?;

    let mut edges = Vec::with_capacity(m);
    for _ in 0..m {
        let raw = next_line("edge line")?;
        let parts: Vec<&str> = raw.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(ShellError::MalformedEdgeLine { line: lineno, raw });
        }
        let u = *name_to_index
            .get(parts[0])
            .ok_or_else(|| ShellError::UnknownVertexName { line: lineno, name: parts[0].to_string() })?;
        let v = *name_to_index
            .get(parts[1])
            .ok_or_else(|| ShellError::UnknownVertexName { line: lineno, name: parts[1].to_string() })?;
        if u != v {
            edges.push((u, v));
        }
    }

    let graph = Graph::build(n, &weights, &edges);
    Ok(Instance { graph, names })
}

/// Writes the three §6 output blocks: `|S_star|`, then each external name
/// (unspecified order), then the total weight.
pub fn write_solution<W: Write>(mut writer: W, names: &[String], result: &SolveResult) -> std::io::Result<()> {
    writeln!(writer, "{}", result.len())?;
    for v in result.vertices() {
        writeln!(writer, "{}", names[v])?;
    }
    writeln!(writer, "{}", result.weight())
}
