//! DIMACS edge-list loader, adapted from the teacher's own
//! `dimacs.rs`: same grammar (`c` comment lines, `p edge n m` / `p col
//! n m` header, `e a b` edge lines, 1-indexed vertices), but returning
//! `Result` instead of panicking so a malformed file surfaces as
//! [`Error::InvalidGraph`] rather than aborting the process.

use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{digit1, space1};
use nom::IResult;

use crate::error::Error;
use crate::graph::AdjacencyGraph;

fn integer(s: &str) -> IResult<&str, usize> {
    let (rest, digits) = digit1(s)?;
    Ok((rest, digits.parse().expect("digit1 only matches digits")))
}

fn header(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, _) = alt((tag("p edge"), tag("p col")))(s)?;
    let (s, _) = space1(s)?;
    let (s, n) = integer(s)?;
    let (s, _) = space1(s)?;
    let (s, m) = integer(s)?;
    Ok((s, (n, m)))
}

fn edge(s: &str) -> IResult<&str, (usize, usize)> {
    let (s, _) = tag("e")(s)?;
    let (s, _) = space1(s)?;
    let (s, a) = integer(s)?;
    let (s, _) = space1(s)?;
    let (s, b) = integer(s)?;
    Ok((s, (a, b)))
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('c')
}

/// parses a DIMACS-formatted edge list, returning the graph it
/// describes. lines other than `c`, `p edge`/`p col`, and `e` are
/// rejected rather than silently skipped.
pub fn parse_dimacs(input: &str) -> Result<AdjacencyGraph, Error> {
    let mut n = None;
    let mut declared_m = None;
    let mut edges = Vec::new();

    for raw_line in input.lines() {
        let line = raw_line.trim();
        if line.is_empty() || is_comment_line(line) {
            continue;
        }
        if let Ok((_, (parsed_n, parsed_m))) = header(line) {
            n = Some(parsed_n);
            declared_m = Some(parsed_m);
            continue;
        }
        if let Ok((_, (a, b))) = edge(line) {
            if a == 0 || b == 0 {
                return Err(Error::InvalidGraph(format!(
                    "DIMACS vertices are 1-indexed, found 0 in line {raw_line:?}"
                )));
            }
            edges.push((a - 1, b - 1));
            continue;
        }
        return Err(Error::InvalidGraph(format!(
            "unrecognized DIMACS line: {raw_line:?}"
        )));
    }

    let n = n.ok_or_else(|| Error::InvalidGraph("missing 'p edge'/'p col' header".to_string()))?;
    if let Some(m) = declared_m {
        if m != edges.len() {
            return Err(Error::InvalidGraph(format!(
                "header declares {m} edges, found {}",
                edges.len()
            )));
        }
    }
    AdjacencyGraph::from_edges(n, &edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_grid_like_instance() {
        let text = "c a square\np edge 4 4\ne 1 2\ne 2 3\ne 3 4\ne 4 1\n";
        let g = parse_dimacs(text).unwrap();
        assert_eq!(g.n(), 4);
        assert!(g.adj(0, 1));
        assert!(g.adj(3, 0));
    }

    #[test]
    fn accepts_col_header() {
        let text = "p col 2 1\ne 1 2\n";
        let g = parse_dimacs(text).unwrap();
        assert_eq!(g.n(), 2);
    }

    #[test]
    fn rejects_edge_count_mismatch() {
        let text = "p edge 3 2\ne 1 2\n";
        assert!(parse_dimacs(text).is_err());
    }

    #[test]
    fn rejects_missing_header() {
        let text = "e 1 2\n";
        assert!(parse_dimacs(text).is_err());
    }
}
