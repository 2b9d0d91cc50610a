use wayfarer_graph::{Graph, find_all_paths, path_weight, select_extremes};

fn graph_of(names: &[&str], edges: &[(&str, &str, f64)]) -> Graph {
    let mut g = Graph::new();
    for name in names {
        g.add_vertex(*name, 0.0, 0.0).unwrap();
    }
    for (a, b, w) in edges {
        assert!(g.set_edge(a, b, *w));
    }
    g
}

#[test]
fn chain_yields_a_single_path_with_summed_weight() {
    let g = graph_of(&["A", "B", "C"], &[("A", "B", 4.0), ("B", "C", 6.0)]);

    let paths = find_all_paths(&g, "A", "C");
    assert_eq!(paths, vec![vec!["A", "B", "C"]]);
    assert_eq!(path_weight(&g, &paths[0]), Some(10.0));
}

#[test]
fn triangle_yields_detour_then_direct_path() {
    let g = graph_of(
        &["A", "B", "C"],
        &[("A", "B", 1.0), ("B", "C", 1.0), ("A", "C", 1.0)],
    );

    let paths = find_all_paths(&g, "A", "C");
    // Neighbor expansion follows vertex insertion order, so the detour
    // through B is discovered before the direct edge.
    assert_eq!(paths, vec![vec!["A", "B", "C"], vec!["A", "C"]]);

    let weights: Vec<f64> = paths
        .iter()
        .map(|p| path_weight(&g, p).unwrap())
        .collect();
    assert_eq!(weights, vec![2.0, 1.0]);

    let extremes = select_extremes(&weights).unwrap();
    assert_eq!(paths[extremes.cheapest], vec!["A", "C"]);
    assert_eq!(paths[extremes.costliest], vec!["A", "B", "C"]);
}

#[test]
fn origin_equal_to_destination_yields_the_trivial_path() {
    let g = graph_of(&["A", "B"], &[("A", "B", 5.0)]);

    let paths = find_all_paths(&g, "A", "A");
    assert_eq!(paths, vec![vec!["A"]]);
    assert_eq!(path_weight(&g, &paths[0]), Some(0.0));
}

#[test]
fn every_path_is_simple_and_follows_edges() {
    // Complete graph on four vertices: the densest case at this size.
    let names = ["A", "B", "C", "D"];
    let mut edges = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            edges.push((names[i], names[j], 1.0));
        }
    }
    let g = graph_of(&names, &edges);

    let paths = find_all_paths(&g, "A", "D");
    for path in &paths {
        let mut seen = path.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), path.len(), "repeated vertex in {path:?}");
        for pair in path.windows(2) {
            assert!(
                g.weight(&pair[0], &pair[1]).is_some(),
                "unconnected pair in {path:?}"
            );
        }
    }
}

#[test]
fn enumeration_is_complete_on_a_small_graph() {
    // K4 has exactly five simple paths between any two vertices: the direct
    // edge, two one-stop detours, and two two-stop detours.
    let names = ["A", "B", "C", "D"];
    let mut edges = Vec::new();
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            edges.push((names[i], names[j], 1.0));
        }
    }
    let g = graph_of(&names, &edges);

    let paths = find_all_paths(&g, "A", "D");
    assert_eq!(paths.len(), 5);

    let expected: Vec<Vec<&str>> = vec![
        vec!["A", "B", "C", "D"],
        vec!["A", "B", "D"],
        vec!["A", "C", "B", "D"],
        vec!["A", "C", "D"],
        vec!["A", "D"],
    ];
    assert_eq!(paths, expected);
}

#[test]
fn paths_never_continue_past_the_destination() {
    // C is connected onward to D, but no returned path runs through C.
    let g = graph_of(
        &["A", "B", "C", "D"],
        &[("A", "B", 1.0), ("B", "C", 1.0), ("C", "D", 1.0), ("A", "D", 1.0)],
    );

    let paths = find_all_paths(&g, "A", "C");
    for path in &paths {
        assert_eq!(path.last().map(String::as_str), Some("C"));
        assert_eq!(path.iter().filter(|v| *v == "C").count(), 1);
    }
}

#[test]
fn disconnected_vertices_yield_no_paths() {
    let g = graph_of(&["A", "B", "C"], &[("A", "B", 1.0)]);
    assert!(find_all_paths(&g, "A", "C").is_empty());
}

#[test]
fn unknown_names_yield_no_paths() {
    let g = graph_of(&["A"], &[]);
    assert!(find_all_paths(&g, "A", "Z").is_empty());
    assert!(find_all_paths(&g, "Z", "A").is_empty());
}

#[test]
fn path_weight_is_none_for_an_unconnected_pair() {
    let g = graph_of(&["A", "B", "C"], &[("A", "B", 1.0)]);
    let fake = ["A".to_string(), "C".to_string()];
    assert_eq!(path_weight(&g, &fake), None);
}

#[test]
fn extreme_selection_breaks_ties_on_first_occurrence() {
    let extremes = select_extremes(&[3.0, 1.0, 1.0, 3.0]).unwrap();
    assert_eq!(extremes.cheapest, 1);
    assert_eq!(extremes.costliest, 0);

    assert!(select_extremes(&[]).is_none());

    let single = select_extremes(&[2.0]).unwrap();
    assert_eq!((single.cheapest, single.costliest), (0, 0));
}
