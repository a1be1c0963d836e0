//! Directed edges between model nodes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A directed edge in the model document.
///
/// `from` and `to` are expected to name node ids, but the document is
/// best-effort: dangling references are diagnosed elsewhere, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DvEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Uninterpreted fields attached by the generator, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DvEdge {
    /// Creates a bare edge between two node ids.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        DvEdge {
            from: from.into(),
            to: to.into(),
            extra: Map::new(),
        }
    }

    /// Returns the `(from, to)` pair this edge represents.
    pub fn pair(&self) -> (&str, &str) {
        (&self.from, &self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn edge_roundtrip_preserves_extra() {
        let raw = json!({
            "from": "Hub_Customer",
            "to": "Link_Customer_Order",
            "sourceRelationship": "fk_customer_order"
        });
        let edge: DvEdge = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(edge.pair(), ("Hub_Customer", "Link_Customer_Order"));
        assert_eq!(serde_json::to_value(&edge).unwrap(), raw);
    }

    #[test]
    fn edge_requires_from_and_to() {
        let result: Result<DvEdge, _> = serde_json::from_value(json!({ "from": "Hub_A" }));
        assert!(result.is_err());
    }
}
