//! Unwrapping of transparent query nodes.

use crate::query::query::Query;

/// Strip transparent wrappers from `query`.
///
/// A conjunction or disjunction with exactly one child matches the same
/// documents as that child, and is replaced by it, repeatedly. Every other
/// node is returned unchanged; children of the returned node are not
/// visited, since each equality step normalizes the nodes it compares.
pub fn normalize(query: &Query) -> &Query {
    let mut current = query;
    loop {
        current = match current {
            Query::Conjunction(q) if q.queries().len() == 1 => &q.queries()[0],
            Query::Disjunction(q) if q.queries().len() == 1 => &q.queries()[0],
            _ => return current,
        };
    }
}
