//! Exhaustive enumeration of simple paths between two vertices, with weight
//! aggregation and cheapest/costliest selection.

use crate::graph::Graph;

/// Indices (into the enumerated path list) of the paths with minimum and
/// maximum total weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathExtremes {
    pub cheapest: usize,
    pub costliest: usize,
}

/// Enumerates every simple path from `origin` to `destination` by exhaustive
/// depth-first search.
///
/// The visited set is scoped to the active branch: a vertex is unmarked on
/// backtrack and may be revisited via a different branch. Branch points
/// expand neighbors in vertex insertion order, so the result order is
/// deterministic for a fixed graph. When `origin == destination` the single
/// trivial one-vertex path is returned.
///
/// Callers are expected to validate both names first; unknown names yield an
/// empty result.
pub fn find_all_paths(graph: &Graph, origin: &str, destination: &str) -> Vec<Vec<String>> {
    let (Some(start), Some(goal)) = (graph.index_of(origin), graph.index_of(destination)) else {
        return Vec::new();
    };

    fn dfs(
        graph: &Graph,
        names: &[&str],
        current: usize,
        goal: usize,
        visited: &mut [bool],
        trail: &mut Vec<usize>,
        found: &mut Vec<Vec<String>>,
    ) {
        visited[current] = true;
        trail.push(current);
        if current == goal {
            // A path ends the moment it reaches the goal; it never continues
            // through it, even when the goal has further edges.
            found.push(trail.iter().map(|&i| names[i].to_string()).collect());
        } else {
            for next in graph.neighbors(current) {
                if !visited[next] {
                    dfs(graph, names, next, goal, visited, trail, found);
                }
            }
        }
        trail.pop();
        visited[current] = false;
    }

    let names: Vec<&str> = graph.vertex_names().collect();
    let mut visited = vec![false; graph.vertex_count()];
    let mut trail: Vec<usize> = Vec::new();
    let mut found: Vec<Vec<String>> = Vec::new();
    dfs(graph, &names, start, goal, &mut visited, &mut trail, &mut found);
    found
}

/// Total weight of a path: the sum over consecutive pairs.
///
/// `None` if any consecutive pair is unconnected. Paths produced by
/// [`find_all_paths`] always follow edges, so they never hit that case; a
/// one-vertex path weighs zero.
pub fn path_weight<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Option<f64> {
    let mut total = 0.0;
    for pair in path.windows(2) {
        total += graph.weight(pair[0].as_ref(), pair[1].as_ref())?;
    }
    Some(total)
}

/// Picks the cheapest and costliest entries of a weight list.
///
/// Ties go to the first occurrence in enumeration order; `None` on empty
/// input.
pub fn select_extremes(weights: &[f64]) -> Option<PathExtremes> {
    let first = *weights.first()?;
    let mut extremes = PathExtremes {
        cheapest: 0,
        costliest: 0,
    };
    let (mut min, mut max) = (first, first);
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w < min {
            min = w;
            extremes.cheapest = i;
        }
        if w > max {
            max = w;
            extremes.costliest = i;
        }
    }
    Some(extremes)
}
