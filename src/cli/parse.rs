//! Value parsers for CLI arguments

use secpath_core::dataset::EdgeSpec;

fn parse_node(p: &str) -> Result<i64, String> {
    let id = p
        .parse::<u64>()
        .map_err(|_| format!("'{}' is not a non-negative node id", p))?;
    i64::try_from(id).map_err(|_| format!("node id {} exceeds {}", id, i64::MAX))
}

fn parse_weight(p: &str) -> Result<i64, String> {
    p.parse::<u32>()
        .map(i64::from)
        .map_err(|_| format!("'{}' is not a weight in 0..={}", p, u32::MAX))
}

/// Parse `u,v` or `u,v,w` into an edge. Negative values are rejected.
pub fn parse_edge(s: &str) -> Result<EdgeSpec, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    match parts.as_slice() {
        [u, v] => Ok(EdgeSpec::Pair([parse_node(u)?, parse_node(v)?])),
        [u, v, w] => Ok(EdgeSpec::Weighted([
            parse_node(u)?,
            parse_node(v)?,
            parse_weight(w)?,
        ])),
        _ => Err(format!("expected u,v or u,v,w, got '{}'", s)),
    }
}
