//! Reader for the vertices/arcs text format.
//!
//! ```text
//! *vertices 3
//! 1 first
//! 2 "second vertex"
//! 3
//! *arcs
//! 1 2 4.5
//! 2 3
//! ```
//!
//! Blank lines are skipped. A vertex line is an id followed by an optional
//! label (the id itself when missing). `*arcs` lines are directed, `*edges`
//! lines undirected; the third column is the capacity and defaults to 1.
//! Section headers are matched case-insensitively.

use crate::error::GraphError;
use crate::maximum_flow::graph::DirectedGraph;
use crate::maximum_matching::graph::UndirectedGraph;
use log::debug;
use num_traits::NumAssign;
use std::fs;
use std::path::Path;

#[derive(PartialEq, Debug, Clone, Copy)]
enum Section {
    Arcs,
    Edges,
}

struct Link<'a> {
    line: usize,
    section: Section,
    from: usize,
    to: usize,
    weight: Option<&'a str>,
}

#[derive(Default)]
struct Document<'a> {
    vertices: Vec<(usize, usize, Option<String>)>,
    links: Vec<Link<'a>>,
}

fn parse_error(line: usize, message: impl Into<String>) -> GraphError {
    GraphError::Parse { line, message: message.into() }
}

fn at_line(line: usize) -> impl Fn(GraphError) -> GraphError {
    move |e| match e {
        GraphError::Parse { .. } => e,
        e => parse_error(line, e.to_string()),
    }
}

fn parse_id(line: usize, token: Option<&str>) -> Result<usize, GraphError> {
    let token = token.ok_or_else(|| parse_error(line, "missing vertex id"))?;
    token.parse().map_err(|_| parse_error(line, format!("invalid vertex id '{}'", token)))
}

fn parse_label(rest: &str) -> Option<String> {
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    let unquoted = rest.strip_prefix('"').and_then(|r| r.strip_suffix('"')).unwrap_or(rest);
    Some(unquoted.to_string())
}

fn tokenize(text: &str) -> Result<Document<'_>, GraphError> {
    let mut document = Document::default();
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim())).filter(|(_, l)| !l.is_empty());

    let (line, header) = lines.next().ok_or_else(|| parse_error(1, "empty input"))?;
    let mut words = header.split_whitespace();
    if !words.next().is_some_and(|w| w.eq_ignore_ascii_case("*vertices")) {
        return Err(parse_error(line, "expected '*vertices <count>'"));
    }
    let count = parse_id(line, words.next()).map_err(|_| parse_error(line, "invalid vertex count"))?;

    let mut last = line;
    for _ in 0..count {
        let (line, text) = lines.next().ok_or_else(|| parse_error(last, format!("expected {} vertex lines", count)))?;
        last = line;
        if text.starts_with('*') {
            return Err(parse_error(line, format!("expected {} vertex lines", count)));
        }
        let (id, rest) = text.split_once(char::is_whitespace).unwrap_or((text, ""));
        document.vertices.push((line, parse_id(line, Some(id))?, parse_label(rest)));
    }

    let mut section = None;
    for (line, text) in lines {
        if text.starts_with('*') {
            section = match text.to_ascii_lowercase().as_str() {
                "*arcs" => Some(Section::Arcs),
                "*edges" => Some(Section::Edges),
                _ => return Err(parse_error(line, format!("unknown section '{}'", text))),
            };
            continue;
        }

        let section = section.ok_or_else(|| parse_error(line, "expected '*arcs' or '*edges'"))?;
        let mut words = text.split_whitespace();
        let from = parse_id(line, words.next())?;
        let to = parse_id(line, words.next())?;
        document.links.push(Link { line, section, from, to, weight: words.next() });
    }

    Ok(document)
}

/// Parses a directed capacitated graph. `*edges` lines add an arc in each
/// direction.
pub fn parse_directed<Flow>(text: &str) -> Result<DirectedGraph<Flow>, GraphError>
where
    Flow: NumAssign + PartialOrd + Copy,
{
    let document = tokenize(text)?;
    let mut graph = DirectedGraph::default();
    for (line, id, label) in document.vertices {
        graph.add_vertex(id, label).map_err(at_line(line))?;
    }

    for link in document.links.iter() {
        let capacity = match link.weight {
            Some(w) => Flow::from_str_radix(w, 10).map_err(|_| parse_error(link.line, format!("invalid capacity '{}'", w)))?,
            None => Flow::one(),
        };
        graph.add_arc(link.from, link.to, capacity).map_err(at_line(link.line))?;
        if link.section == Section::Edges {
            graph.add_arc(link.to, link.from, capacity).map_err(at_line(link.line))?;
        }
    }

    debug!("parsed directed graph: {} vertices, {} arcs", graph.num_vertices(), graph.num_arcs());
    Ok(graph)
}

/// Parses an undirected graph; weights are ignored and `*arcs` lines are
/// read as plain edges.
pub fn parse_undirected(text: &str) -> Result<UndirectedGraph, GraphError> {
    let document = tokenize(text)?;
    let mut graph = UndirectedGraph::default();
    for (line, id, label) in document.vertices {
        graph.add_vertex(id, label).map_err(at_line(line))?;
    }

    for link in document.links.iter() {
        graph.add_edge(link.from, link.to).map_err(at_line(link.line))?;
    }

    debug!("parsed undirected graph: {} vertices, {} edges", graph.num_vertices(), graph.num_edges());
    Ok(graph)
}

pub fn read_directed<Flow, P>(path: P) -> Result<DirectedGraph<Flow>, GraphError>
where
    Flow: NumAssign + PartialOrd + Copy,
    P: AsRef<Path>,
{
    parse_directed(&fs::read_to_string(path)?)
}

pub fn read_undirected<P: AsRef<Path>>(path: P) -> Result<UndirectedGraph, GraphError> {
    parse_undirected(&fs::read_to_string(path)?)
}
