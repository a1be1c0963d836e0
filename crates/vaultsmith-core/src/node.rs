//! Typed node kinds for a Data Vault model document.
//!
//! The generator emits nodes as JSON mappings discriminated by a `type` field
//! (`hub` | `link` | `satellite`). [`DvNode`] mirrors that wire shape as a
//! tagged union, because everything downstream (repair, rendering) branches
//! on the kind. Descriptive fields the generator attaches (`businessKey`,
//! `attributes`, `sourceTable`, `reasoning`, ...) are not interpreted -- each
//! variant carries them in a flattened map so a parse/serialize round trip
//! preserves them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node in the model document, discriminated by its `type` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DvNode {
    /// An independent business entity keyed by a natural business key.
    Hub(HubNode),
    /// A many-to-many relationship between two or more hubs.
    Link(LinkNode),
    /// Descriptive attributes owned by exactly one parent hub or link.
    Satellite(SatelliteNode),
}

/// Hub node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HubNode {
    /// Node identifier, conventionally prefixed `Hub_`.
    pub id: String,
    /// Uninterpreted descriptive fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Link node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkNode {
    /// Node identifier, conventionally prefixed `Link_`.
    pub id: String,
    /// Hub ids this link bridges. Two or more are expected but not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connects: Option<Vec<String>>,
    /// Uninterpreted descriptive fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Satellite node payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SatelliteNode {
    /// Node identifier, conventionally prefixed `Sat_`.
    pub id: String,
    /// Id of the owning hub or link.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Uninterpreted descriptive fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DvNode {
    /// Returns the node identifier.
    pub fn id(&self) -> &str {
        match self {
            DvNode::Hub(n) => &n.id,
            DvNode::Link(n) => &n.id,
            DvNode::Satellite(n) => &n.id,
        }
    }

    /// Returns the node kind as it appears in the `type` field.
    pub fn kind(&self) -> &'static str {
        match self {
            DvNode::Hub(_) => "hub",
            DvNode::Link(_) => "link",
            DvNode::Satellite(_) => "satellite",
        }
    }

    /// Returns the id prefix convention for this node kind.
    pub fn expected_prefix(&self) -> &'static str {
        match self {
            DvNode::Hub(_) => "Hub_",
            DvNode::Link(_) => "Link_",
            DvNode::Satellite(_) => "Sat_",
        }
    }

    /// Returns the satellite parent id, when this is a satellite that has one.
    pub fn parent(&self) -> Option<&str> {
        match self {
            DvNode::Satellite(n) => n.parent.as_deref(),
            _ => None,
        }
    }

    /// Returns the link member ids, when this is a link that has them.
    pub fn connects(&self) -> Option<&[String]> {
        match self {
            DvNode::Link(n) => n.connects.as_deref(),
            _ => None,
        }
    }

    /// Returns the uninterpreted descriptive fields.
    pub fn extra(&self) -> &Map<String, Value> {
        match self {
            DvNode::Hub(n) => &n.extra,
            DvNode::Link(n) => &n.extra,
            DvNode::Satellite(n) => &n.extra,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn hub_tag_dispatch() {
        let node: DvNode = serde_json::from_value(json!({
            "id": "Hub_Customer",
            "type": "hub",
            "businessKey": "customer_id"
        }))
        .unwrap();
        assert_eq!(node.kind(), "hub");
        assert_eq!(node.id(), "Hub_Customer");
        assert_eq!(node.extra()["businessKey"], json!("customer_id"));
    }

    #[test]
    fn satellite_parent_is_optional() {
        let node: DvNode = serde_json::from_value(json!({
            "id": "Sat_Customer_Details",
            "type": "satellite"
        }))
        .unwrap();
        assert_eq!(node.parent(), None);

        let node: DvNode = serde_json::from_value(json!({
            "id": "Sat_Customer_Details",
            "type": "satellite",
            "parent": "Hub_Customer"
        }))
        .unwrap();
        assert_eq!(node.parent(), Some("Hub_Customer"));
    }

    #[test]
    fn link_connects_absent_vs_empty() {
        let absent: DvNode =
            serde_json::from_value(json!({ "id": "Link_A_B", "type": "link" })).unwrap();
        assert_eq!(absent.connects(), None);

        let empty: DvNode =
            serde_json::from_value(json!({ "id": "Link_A_B", "type": "link", "connects": [] }))
                .unwrap();
        assert_eq!(empty.connects(), Some(&[][..]));
    }

    #[test]
    fn unknown_type_is_rejected() {
        let result: Result<DvNode, _> =
            serde_json::from_value(json!({ "id": "Ref_X", "type": "reference" }));
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_extra_fields() {
        let raw = json!({
            "id": "Sat_Order_Status",
            "type": "satellite",
            "parent": "Hub_Order",
            "attributes": ["status", "updated_at"],
            "sourceTable": "orders",
            "reasoning": "descriptive attributes of an order"
        });
        let node: DvNode = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back, raw);
    }
}
