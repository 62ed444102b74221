//! End-to-end tests for graph derivation, ego networks and selection
//!
//! Covers:
//! - Edge existence, uniqueness and content
//! - Ego-network inclusion rules
//! - Search, node click and edge click transitions

use hcp_network::*;

fn profile(id: &str, pubs: &[&str]) -> Profile {
    Profile::new(id, id, pubs.iter().map(|p| p.to_string()).collect())
}

fn three_profiles() -> Vec<Profile> {
    vec![
        profile("P1", &["X", "Y"]),
        profile("P2", &["Y", "Z"]),
        profile("P3", &["W"]),
    ]
}

fn controller(profiles: Vec<Profile>) -> SelectionController {
    SelectionController::from_store(ProfileStore::from_profiles(profiles).unwrap())
}

/// A deterministic pseudo-random dataset: profile i authors publications
/// drawn from a small pool so that overlaps are common but not universal.
fn generated_profiles(count: usize) -> Vec<Profile> {
    (0..count)
        .map(|i| {
            let pubs: Vec<String> = (0..3)
                .map(|k| format!("pub-{}", (i * 7 + k * 13 + i * k) % 17))
                .collect();
            Profile::new(format!("id-{:02}", (i * 11) % count), format!("Doctor {}", i), pubs)
        })
        .collect()
}

#[test]
fn test_scenario_search_partial_name() {
    let mut c = controller(three_profiles());

    let graph = c.graph();
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.edges.iter().all(|e| !e.touches(&"P3".into())));

    let outcome = c.on_search("p1");
    assert_eq!(outcome, SearchOutcome::Focused("P1".into()));

    let view = c.visible_subgraph();
    let ids: Vec<&str> = view.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["P1", "P2"]);
    assert_eq!(
        view.edges,
        vec![Edge::new(&"P1".into(), &"P2".into(), vec!["Y".to_string()])]
    );
    assert_eq!(c.current_selection().as_profile().map(|p| p.id.as_str()), Some("P1"));
}

#[test]
fn test_scenario_no_match_clears() {
    let mut c = controller(three_profiles());
    c.on_search("p1");

    assert_eq!(c.on_search("zzz"), SearchOutcome::Cleared);
    assert!(c.visible_subgraph().nodes.is_empty());
    assert!(c.visible_subgraph().edges.is_empty());
    assert_eq!(c.current_selection(), &Selection::Empty);
}

#[test]
fn test_scenario_edge_click_keeps_view() {
    let mut c = controller(three_profiles());
    c.on_search("p1");
    let before = c.visible_subgraph().clone();

    let clicked: Edge = serde_json::from_str(
        r#"{"source": "P1", "target": "P2", "sharedPublications": ["Y"]}"#,
    )
    .unwrap();
    c.on_edge_clicked(clicked.clone());

    assert_eq!(c.current_selection(), &Selection::EdgeSelected(clicked));
    assert_eq!(c.visible_subgraph(), &before);
}

#[test]
fn test_empty_and_whitespace_searches_clear() {
    for term in ["", "   ", "\t\n", "nobody at all"] {
        let mut c = controller(three_profiles());
        c.on_search("p2");
        assert_eq!(c.on_search(term), SearchOutcome::Cleared, "term {:?}", term);
        assert_eq!(c.visible_subgraph(), &VisibleSubgraph::empty());
        assert!(c.current_selection().is_empty());
    }
}

#[test]
fn test_node_click_keeps_view() {
    let mut c = controller(three_profiles());
    c.on_search("p2");
    let before = c.visible_subgraph().clone();

    // Renderers may click any node object they hold, including P3 from an older view
    c.on_node_clicked(profile("P3", &["W"]));

    assert_eq!(c.visible_subgraph(), &before);
    assert_eq!(c.current_selection().as_profile().map(|p| p.id.as_str()), Some("P3"));
}

#[test]
fn test_edges_iff_shared_publications() {
    let profiles = generated_profiles(24);
    let store = ProfileStore::from_profiles(profiles.clone()).unwrap();
    let graph = CoauthorGraph::build(store.profiles());

    for (i, a) in profiles.iter().enumerate() {
        for b in &profiles[i + 1..] {
            let expected: std::collections::HashSet<&String> = a
                .publications
                .iter()
                .filter(|p| b.publications.contains(p))
                .collect();
            let matching: Vec<&Edge> = graph.edges.iter().filter(|e| e.connects(&a.id, &b.id)).collect();

            if expected.is_empty() {
                assert!(matching.is_empty(), "unexpected edge {}-{}", a.id, b.id);
            } else {
                assert_eq!(matching.len(), 1, "pair {}-{}", a.id, b.id);
                let actual: std::collections::HashSet<&String> =
                    matching[0].shared_publications.iter().collect();
                assert_eq!(actual, expected);
            }
        }
    }

    for edge in &graph.edges {
        assert_ne!(edge.source, edge.target);
        assert!(store.contains(&edge.source) && store.contains(&edge.target));
    }
}

#[test]
fn test_edge_set_independent_of_input_order() {
    let mut profiles = generated_profiles(16);
    let forward = CoauthorGraph::build(&profiles);
    profiles.reverse();
    let backward = CoauthorGraph::build(&profiles);

    let mut f: Vec<PairKey> = forward.edges.iter().map(Edge::pair_key).collect();
    let mut b: Vec<PairKey> = backward.edges.iter().map(Edge::pair_key).collect();
    f.sort();
    b.sort();
    assert_eq!(f, b);

    for edge in &forward.edges {
        let twin = backward.edge_between(&edge.source, &edge.target).unwrap();
        assert_eq!(twin, edge);
    }
}

#[test]
fn test_ego_network_inclusion_for_every_center() {
    let profiles = generated_profiles(20);
    let graph = CoauthorGraph::build(&profiles);

    for center in &profiles {
        let view = resolve(Some(center), &graph);

        let mut expected: Vec<&ProfileId> = graph.neighbors(&center.id);
        expected.push(&center.id);
        expected.sort();
        expected.dedup();

        let mut actual: Vec<&ProfileId> = view.nodes.iter().map(|n| &n.id).collect();
        actual.sort();
        assert_eq!(actual, expected, "center {}", center.id);

        let expected_edges: Vec<&Edge> = graph
            .edges
            .iter()
            .filter(|e| view.contains(&e.source) && view.contains(&e.target))
            .collect();
        assert_eq!(view.edges.iter().collect::<Vec<_>>(), expected_edges);
    }
}

#[test]
fn test_sample_dataset_walkthrough() {
    let mut c = SelectionController::from_store(ProfileStore::sample());

    c.on_search("CARTER");
    let view = c.visible_subgraph();
    assert_eq!(view.nodes.len(), 4);
    assert_eq!(view.edges.len(), 4);
    assert!(!view.contains(&"hcp-5".into()));

    c.on_search("garcia");
    let view = c.visible_subgraph();
    assert_eq!(view.nodes.len(), 1);
    assert!(view.edges.is_empty());
    assert_eq!(
        c.current_selection().as_profile().map(|p| p.name.as_str()),
        Some("Dr. Maria Garcia")
    );
}
