use crate::extract;
use indexmap::IndexMap;
use serde::Serialize;

/// Failed-login count above which an address is flagged as suspicious.
pub const DEFAULT_THRESHOLD: usize = 10;

/// Reported when no line contained a recognizable request path.
pub const NO_ENDPOINT: &str = "None";

/// Requests attributed to one source address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressCount {
    pub address: String,
    pub requests: usize,
}

/// The single most-accessed endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopEndpoint {
    pub endpoint: String,
    pub hits: usize,
}

/// An address whose failed-login count exceeded the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlaggedAddress {
    pub address: String,
    pub failed_logins: usize,
}

/// The complete analysis output
#[derive(Debug, Serialize)]
pub struct LogSummary {
    pub total_lines: usize,
    pub address_counts: Vec<AddressCount>,
    pub top_endpoint: TopEndpoint,
    pub flagged: Vec<FlaggedAddress>,
    pub threshold: usize,
}

/// Run all three extractors over every line and aggregate the counts.
///
/// A single linear pass; each line may contribute to zero, one, or several
/// aggregates independently. The counting maps preserve first-seen order,
/// which fixes both the ranking tie-break and the flagged-address order.
pub fn analyze(lines: &[String], threshold: usize) -> LogSummary {
    let mut requests: IndexMap<&str, usize> = IndexMap::new();
    let mut endpoints: IndexMap<&str, usize> = IndexMap::new();
    let mut failed_logins: IndexMap<&str, usize> = IndexMap::new();

    for line in lines {
        if let Some(addr) = extract::address(line) {
            *requests.entry(addr).or_insert(0) += 1;
        }
        if let Some(path) = extract::endpoint(line) {
            *endpoints.entry(path).or_insert(0) += 1;
        }
        if let Some(addr) = extract::failed_login(line) {
            *failed_logins.entry(addr).or_insert(0) += 1;
        }
    }

    // ── Ranked addresses ─────────────────────────────────────────────────────
    // Stable sort over insertion order: ties keep first-seen order.
    let mut ranked: Vec<(&str, usize)> = requests.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    let address_counts = ranked
        .into_iter()
        .map(|(address, requests)| AddressCount {
            address: address.to_string(),
            requests,
        })
        .collect();

    // ── Most-accessed endpoint ───────────────────────────────────────────────
    // Strict comparison so the first-seen endpoint wins ties.
    let mut top: Option<(&str, usize)> = None;
    for (&endpoint, &hits) in &endpoints {
        if top.map_or(true, |(_, best)| hits > best) {
            top = Some((endpoint, hits));
        }
    }
    let top_endpoint = match top {
        Some((endpoint, hits)) => TopEndpoint {
            endpoint: endpoint.to_string(),
            hits,
        },
        None => TopEndpoint {
            endpoint: NO_ENDPOINT.to_string(),
            hits: 0,
        },
    };

    // ── Flagged addresses ────────────────────────────────────────────────────
    // Strictly greater than the threshold; first-seen order, not count order.
    let flagged = failed_logins
        .into_iter()
        .filter(|&(_, count)| count > threshold)
        .map(|(address, failed_logins)| FlaggedAddress {
            address: address.to_string(),
            failed_logins,
        })
        .collect();

    LogSummary {
        total_lines: lines.len(),
        address_counts,
        top_endpoint,
        flagged,
        threshold,
    }
}
