//! The model validate-and-repair pass.
//!
//! Provides [`validate_and_repair`]: given a decoded JSON value of unknown
//! shape (the LLM's response after code fences are stripped), either reject
//! it as [`MalformedModel`] or return a [`RepairedModel`] whose document
//! satisfies the edge invariants:
//!
//! - every satellite with a `parent` has a `(parent -> satellite)` edge, and
//! - every link has a `(hub -> link)` edge for each entry of `connects`.
//!
//! Existing edges are never removed, reordered, or duplicated; repaired
//! edges are appended after the originals in node order.

use std::collections::HashSet;

use serde_json::Value;

use vaultsmith_core::{DvEdge, DvModel, DvNode};

use crate::diagnostics::RepairWarning;
use crate::error::MalformedModel;

/// How strictly the shape checks treat naming conventions.
///
/// Dangling references are warnings under both policies; strictness only
/// affects the up-front shape checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Require `id` and a known `type` per node, nothing more.
    #[default]
    Lenient,
    /// Additionally require the `Hub_`/`Link_`/`Sat_` id prefix matching
    /// each node's type, and a `reasoning` field on every node.
    Strict,
}

/// A successfully repaired model document.
#[derive(Debug, Clone)]
pub struct RepairedModel {
    /// The document, with any missing implied edges appended.
    pub model: DvModel,
    /// How many edges the repair pass inserted.
    pub added_edges: usize,
    /// Non-fatal issues found along the way.
    pub warnings: Vec<RepairWarning>,
}

/// Validates a decoded JSON value as a model document and repairs it.
///
/// Fails with [`MalformedModel`] only when the document is structurally
/// unusable; structurally plausible but incomplete documents are always
/// repaired, with issues reported via [`RepairWarning`]s.
///
/// Single pass over nodes and edges; pure function of its input.
pub fn validate_and_repair(
    doc: Value,
    policy: ValidationPolicy,
) -> Result<RepairedModel, MalformedModel> {
    check_shape(&doc, policy)?;

    let mut model: DvModel = serde_json::from_value(doc)?;
    let mut warnings = Vec::new();

    // Known node ids, diagnosing duplicates as we go.
    let mut ids: HashSet<&str> = HashSet::with_capacity(model.nodes.len());
    for node in &model.nodes {
        if !ids.insert(node.id()) {
            warnings.push(RepairWarning::DuplicateNodeId {
                id: node.id().to_string(),
            });
        }
    }

    // Dangling references warn but never abort, and never block repair:
    // a satellite pointing at a missing parent still gets its edge.
    for edge in &model.edges {
        for endpoint in [edge.from.as_str(), edge.to.as_str()] {
            if !ids.contains(endpoint) {
                warnings.push(RepairWarning::DanglingEdge {
                    from: edge.from.clone(),
                    to: edge.to.clone(),
                    missing: endpoint.to_string(),
                });
            }
        }
    }
    for node in &model.nodes {
        if let Some(parent) = node.parent() {
            if !ids.contains(parent) {
                warnings.push(RepairWarning::DanglingParent {
                    satellite: node.id().to_string(),
                    parent: parent.to_string(),
                });
            }
        }
        if let Some(connects) = node.connects() {
            for member in connects {
                if !ids.contains(member.as_str()) {
                    warnings.push(RepairWarning::DanglingLinkMember {
                        link: node.id().to_string(),
                        member: member.clone(),
                    });
                }
            }
        }
    }

    // Insert the edges the generator should have produced. The pair set is
    // kept up to date with insertions so repair never duplicates its own
    // output (a link listing the same hub twice adds one edge).
    let mut pairs: HashSet<(String, String)> = model
        .edges
        .iter()
        .map(|e| (e.from.clone(), e.to.clone()))
        .collect();
    let mut appended = Vec::new();

    for node in &model.nodes {
        match node {
            DvNode::Satellite(sat) => {
                if let Some(parent) = &sat.parent {
                    if pairs.insert((parent.clone(), sat.id.clone())) {
                        appended.push(DvEdge::new(parent, &sat.id));
                    }
                }
            }
            DvNode::Link(link) => {
                if let Some(connects) = &link.connects {
                    for hub in connects {
                        if pairs.insert((hub.clone(), link.id.clone())) {
                            appended.push(DvEdge::new(hub, &link.id));
                        }
                    }
                }
            }
            DvNode::Hub(_) => {}
        }
    }

    let added_edges = appended.len();
    model.edges.extend(appended);

    Ok(RepairedModel {
        model,
        added_edges,
        warnings,
    })
}

/// Up-front shape checks on the raw JSON value.
///
/// These are the only fatal checks; they run before the typed decode so the
/// error names the actual structural problem rather than a serde message.
fn check_shape(doc: &Value, policy: ValidationPolicy) -> Result<(), MalformedModel> {
    let Some(obj) = doc.as_object() else {
        return Err(MalformedModel::NotAnObject);
    };
    let Some(nodes_value) = obj.get("nodes") else {
        return Err(MalformedModel::MissingNodes);
    };
    let Some(nodes) = nodes_value.as_array() else {
        return Err(MalformedModel::NodesNotAnArray);
    };
    if nodes.is_empty() {
        return Err(MalformedModel::EmptyNodes);
    }

    for (index, raw) in nodes.iter().enumerate() {
        let Some(node) = raw.as_object() else {
            return Err(MalformedModel::NodeNotAnObject { index });
        };
        let id = node.get("id").and_then(Value::as_str).unwrap_or("");
        if id.is_empty() {
            return Err(MalformedModel::MissingId { index });
        }
        let Some(kind_value) = node.get("type") else {
            return Err(MalformedModel::MissingType { id: id.to_string() });
        };
        let kind = kind_value.as_str().unwrap_or("");
        let expected_prefix = match kind {
            "hub" => "Hub_",
            "link" => "Link_",
            "satellite" => "Sat_",
            _ => {
                let kind = if kind.is_empty() {
                    kind_value.to_string()
                } else {
                    kind.to_string()
                };
                return Err(MalformedModel::UnknownType {
                    id: id.to_string(),
                    kind,
                });
            }
        };

        if policy == ValidationPolicy::Strict {
            if !id.starts_with(expected_prefix) {
                return Err(MalformedModel::PrefixMismatch {
                    id: id.to_string(),
                    kind: kind.to_string(),
                    expected: expected_prefix,
                });
            }
            if !node.contains_key("reasoning") {
                return Err(MalformedModel::MissingReasoning { id: id.to_string() });
            }
        }
    }

    Ok(())
}
