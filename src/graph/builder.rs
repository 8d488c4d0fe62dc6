//! Graph construction: nodes per document, weighted edges from shared tags
//! and mutual references.
//!
//! Edge construction compares every unordered document pair, which is O(n²)
//! in corpus size. Fine for a personal knowledge base (hundreds of
//! documents); revisit with an inverted tag index before tens of thousands.

use super::{GraphEdge, GraphNode, KnowledgeGraph};
use crate::text::{extract_references, extract_tags, strip_markdown};
use crate::types::Document;
use ahash::AHashSet;

/// Weight contributed per shared tag.
const TAG_WEIGHT_STEP: u32 = 2;

/// Cap on the tag-based contribution alone.
const TAG_WEIGHT_CAP: u32 = 5;

/// Weight of a detected reference between two documents.
const REFERENCE_WEIGHT: u32 = 3;

/// Cap on a merged tag + reference edge. A reference-only edge stays at
/// exactly `REFERENCE_WEIGHT`; only the merge path is capped here.
const MAX_EDGE_WEIGHT: u32 = 8;

/// Fallback color for unmapped or missing statuses.
const DEFAULT_COLOR: &str = "#9ca3af";

/// Fixed status → render color table. New statuses degrade to the neutral
/// default instead of undefined behavior.
const STATUS_COLORS: &[(&str, &str)] = &[
    // Field note statuses
    ("success", "#4ade80"),
    ("failure", "#f87171"),
    ("warning", "#facc15"),
    ("info", "#60a5fa"),
    // Trail statuses
    ("active", "#38bdf8"),
    ("archived", "#94a3b8"),
    ("mastered", "#c084fc"),
];

/// Look up the render color for a status tag (case-insensitive).
fn status_color(status: Option<&str>) -> &'static str {
    let Some(status) = status else {
        return DEFAULT_COLOR;
    };
    STATUS_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(status))
        .map_or(DEFAULT_COLOR, |(_, color)| color)
}

/// Per-document linking signals, extracted once before the pairwise pass.
struct LinkProfile {
    /// Inline tags, lower-cased so comparison is uniform.
    tags: AHashSet<String>,
    /// Candidate slugs this document mentions.
    refs: AHashSet<String>,
}

/// Build the knowledge graph for the current document set.
///
/// Nodes are order-independent; consumers should not rely on edge order
/// either. An empty corpus yields an empty, valid graph.
pub fn build_graph(documents: &[Document]) -> KnowledgeGraph {
    let start = std::time::Instant::now();

    let mut nodes = Vec::with_capacity(documents.len());
    let mut profiles = Vec::with_capacity(documents.len());

    for doc in documents {
        // Tags and references come from the title plus the description (or
        // the normalized body when a trail has none).
        let content = match &doc.description {
            Some(description) if !description.trim().is_empty() => {
                format!("{} {}", doc.title, description)
            }
            _ => format!("{} {}", doc.title, strip_markdown(&doc.body)),
        };

        profiles.push(LinkProfile {
            tags: extract_tags(&content)
                .into_iter()
                .map(|tag| tag.to_lowercase())
                .collect(),
            refs: extract_references(&content).into_iter().collect(),
        });

        nodes.push(GraphNode {
            id: format!("{}-{}", doc.kind.prefix(), doc.slug),
            name: doc.title.clone(),
            kind: doc.kind,
            status: doc.status.clone(),
            url: doc.kind.url(&doc.slug),
            group: doc.kind.group(),
            color: status_color(doc.status.as_deref()),
        });
    }

    let mut edges = Vec::new();
    for i in 0..documents.len() {
        for j in (i + 1)..documents.len() {
            // Tag contribution first, then the reference contribution
            // strengthens it; both for the same pair merge into one edge.
            let shared = profiles[i].tags.intersection(&profiles[j].tags).count() as u32;
            let mut weight = if shared > 0 {
                Some((shared * TAG_WEIGHT_STEP).min(TAG_WEIGHT_CAP))
            } else {
                None
            };

            let mutual_reference = profiles[i].refs.contains(&documents[j].slug)
                || profiles[j].refs.contains(&documents[i].slug);
            if mutual_reference {
                weight = Some(match weight {
                    Some(w) => (w + REFERENCE_WEIGHT).min(MAX_EDGE_WEIGHT),
                    None => REFERENCE_WEIGHT,
                });
            }

            if let Some(weight) = weight {
                edges.push(GraphEdge {
                    source: nodes[i].id.clone(),
                    target: nodes[j].id.clone(),
                    weight,
                });
            }
        }
    }

    tracing::debug!(
        "Built knowledge graph: {} nodes, {} edges in {:?}",
        nodes.len(),
        edges.len(),
        start.elapsed()
    );

    KnowledgeGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DocumentKind;
    use assert2::check;
    use rstest::rstest;

    fn note(slug: &str, body: &str) -> Document {
        Document {
            body: body.to_string(),
            ..Document::new(slug, slug, DocumentKind::Note)
        }
    }

    fn edge_between<'a>(
        graph: &'a KnowledgeGraph,
        a: &str,
        b: &str,
    ) -> Option<&'a GraphEdge> {
        graph.edges.iter().find(|e| {
            (e.source.ends_with(a) && e.target.ends_with(b))
                || (e.source.ends_with(b) && e.target.ends_with(a))
        })
    }

    #[test]
    fn empty_corpus_yields_empty_graph() {
        let graph = build_graph(&[]);
        check!(graph.nodes.is_empty());
        check!(graph.edges.is_empty());
    }

    #[test]
    fn one_shared_tag_weighs_two() {
        let docs = vec![
            note("auth-fix", "work on #security and #auth"),
            note("auth-fix2", "more #auth and #deploy"),
        ];
        let graph = build_graph(&docs);
        check!(graph.edges.len() == 1);
        check!(graph.edges[0].weight == 2);
    }

    #[rstest]
    #[case(1, 2)]
    #[case(2, 4)]
    #[case(3, 5)] // capped
    #[case(4, 5)] // capped
    fn tag_weight_scales_and_caps(#[case] shared: usize, #[case] expected: u32) {
        let tags: String = (0..shared).map(|i| format!("#tag-{i} ")).collect();
        let docs = vec![note("left-doc", &tags), note("right-doc", &tags)];
        let graph = build_graph(&docs);
        check!(graph.edges[0].weight == expected);
    }

    #[test]
    fn reference_only_edge_weighs_exactly_three() {
        let docs = vec![
            note("auth-fix", "follow-up to auth-fix2 incident"),
            note("auth-fix2", "nothing in common"),
        ];
        let graph = build_graph(&docs);
        let edge = edge_between(&graph, "auth-fix", "auth-fix2").unwrap();
        check!(edge.weight == 3);
    }

    #[test]
    fn reference_strengthens_tag_edge_as_one_merged_edge() {
        let docs = vec![
            note("auth-fix", "shares #auth and mentions auth-fix2"),
            note("auth-fix2", "also #auth"),
        ];
        let graph = build_graph(&docs);
        check!(graph.edges.len() == 1);
        // min(min(1*2, 5) + 3, 8)
        check!(graph.edges[0].weight == 5);
    }

    #[test]
    fn merged_edge_caps_at_eight() {
        let docs = vec![
            note("left-doc", "#a #b #c #d and a note about right-doc"),
            note("right-doc", "#a #b #c #d"),
        ];
        let graph = build_graph(&docs);
        check!(graph.edges.len() == 1);
        check!(graph.edges[0].weight == 8);
    }

    #[test]
    fn no_self_loops_or_duplicate_pairs() {
        let docs = vec![
            note("alpha-note", "#shared mentions beta-note"),
            note("beta-note", "#shared mentions alpha-note"),
            note("gamma-note", "#shared"),
        ];
        let graph = build_graph(&docs);
        for edge in &graph.edges {
            check!(edge.source != edge.target);
        }
        let mut pairs: Vec<(String, String)> = graph
            .edges
            .iter()
            .map(|e| {
                let mut pair = [e.source.clone(), e.target.clone()];
                pair.sort();
                (pair[0].clone(), pair[1].clone())
            })
            .collect();
        pairs.sort();
        let before = pairs.len();
        pairs.dedup();
        check!(pairs.len() == before);
    }

    #[test]
    fn isolated_nodes_are_valid() {
        let docs = vec![note("lonely-doc", "no tags, short text")];
        let graph = build_graph(&docs);
        check!(graph.nodes.len() == 1);
        check!(graph.edges.is_empty());
    }

    #[test]
    fn node_ids_are_unique_across_kinds() {
        let mut trail = Document::new("same-slug", "Trail", DocumentKind::Trail);
        trail.status = Some("active".to_string());
        let note = Document::new("same-slug", "Note", DocumentKind::Note);
        let graph = build_graph(&[trail, note]);
        check!(graph.nodes[0].id == "trail-same-slug");
        check!(graph.nodes[1].id == "note-same-slug");
        check!(graph.nodes[0].group == 1);
        check!(graph.nodes[1].group == 2);
        check!(graph.nodes[0].url == "/trails/same-slug");
        check!(graph.nodes[1].url == "/field-notes/same-slug");
    }

    #[rstest]
    #[case(Some("success"), "#4ade80")]
    #[case(Some("FAILURE"), "#f87171")]
    #[case(Some("made-up-status"), "#9ca3af")]
    #[case(None, "#9ca3af")]
    fn status_maps_to_color(#[case] status: Option<&str>, #[case] expected: &str) {
        check!(status_color(status) == expected);
    }

    #[test]
    fn tag_comparison_is_case_insensitive() {
        let docs = vec![
            note("left-doc", "work on #Security"),
            note("right-doc", "more #security"),
        ];
        let graph = build_graph(&docs);
        check!(graph.edges.len() == 1);
        check!(graph.edges[0].weight == 2);
    }
}
