//! loader for the matrix-record text format described in the external
//! interfaces section: a sequence of records of `n = <int>`, an
//! optional `d = <density>` line, a `matrix:` marker, then n·n
//! whitespace-separated numeric tokens. `//`-to-end-of-line comments
//! and dash-only separator lines are ignored between and within
//! records.
//!
//! grounded on `original_source/src/MatrixIO.h`'s `loadGraphs`, with
//! its panicking `strip`/`keepOnlyNumberChars` replaced by `Result`
//! propagation and nom's numeric tokenizer, in the spirit of the
//! teacher's `dimacs.rs`.

use nom::character::complete::multispace0;
use nom::number::complete::double;
use nom::sequence::preceded;
use nom::IResult;

use crate::error::Error;
use crate::graph::AdjacencyGraph;

/// one parsed record: its graph plus the density metadata, if the file
/// carried a `d =` line for it.
#[derive(Debug, Clone)]
pub struct MatrixRecord {
    pub graph: AdjacencyGraph,
    pub density: Option<f64>,
}

fn strip_comment(line: &str) -> &str {
    line.find("//").map_or(line, |idx| &line[..idx])
}

fn is_dash_separator(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c == '-')
}

fn number_token(s: &str) -> IResult<&str, f64> {
    preceded(multispace0, double)(s)
}

fn parse_assignment(line: &str, key: char) -> Result<f64, Error> {
    let bad = || Error::InvalidGraph(format!("expected '{key} = <value>', found {line:?}"));
    let (_, rest) = line.split_once(key).ok_or_else(bad)?;
    let rest = rest.trim_start().strip_prefix('=').ok_or_else(bad)?;
    let (_, value) = number_token(rest).map_err(|_| bad())?;
    Ok(value)
}

/// parses every record out of `input`.
pub fn load_matrices(input: &str) -> Result<Vec<MatrixRecord>, Error> {
    let lines: Vec<&str> = input.lines().map(strip_comment).map(str::trim).collect();
    let mut records = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if lines[i].is_empty() || is_dash_separator(lines[i]) {
            i += 1;
            continue;
        }
        if !lines[i].starts_with('n') {
            return Err(Error::InvalidGraph(format!(
                "expected a record starting with 'n =', found {:?}",
                lines[i]
            )));
        }

        let n = parse_assignment(lines[i], 'n')? as usize;
        i += 1;

        let mut density = None;
        loop {
            if i >= lines.len() {
                return Err(Error::InvalidGraph(
                    "unexpected end of file before 'matrix:'".to_string(),
                ));
            }
            let line = lines[i];
            if line.is_empty() {
                i += 1;
                continue;
            }
            if line.starts_with('d') {
                density = Some(parse_assignment(line, 'd')?);
                i += 1;
                continue;
            }
            if line.contains("matrix") {
                i += 1;
                break;
            }
            return Err(Error::InvalidGraph(format!(
                "unexpected line before 'matrix:': {line:?}"
            )));
        }

        let want = n * n;
        let mut tokens = Vec::with_capacity(want);
        while tokens.len() < want {
            if i >= lines.len() {
                return Err(Error::InvalidGraph(format!(
                    "matrix truncated: expected {want} tokens, found {}",
                    tokens.len()
                )));
            }
            let line = lines[i];
            i += 1;
            let mut rest = line;
            while !rest.trim().is_empty() {
                let (next, value) = number_token(rest).map_err(|_| {
                    Error::InvalidGraph(format!("malformed numeric token in {line:?}"))
                })?;
                tokens.push(value);
                rest = next;
                if tokens.len() == want {
                    break;
                }
            }
        }
        if tokens.len() != want {
            return Err(Error::InvalidGraph(format!(
                "matrix has {} tokens, expected {want}",
                tokens.len()
            )));
        }

        let matrix: Vec<Vec<u8>> = tokens
            .chunks(n)
            .map(|row| row.iter().map(|&v| u8::from(v != 0.0)).collect())
            .collect();
        let graph = AdjacencyGraph::build(&matrix)?;
        records.push(MatrixRecord { graph, density });
    }

    Ok(records)
}
