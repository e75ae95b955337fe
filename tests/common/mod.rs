use dense_sssp::graph::Graph;

/// Bellman-Ford distances over the same edges the engine sees, used as an
/// independent answer for non-negative graphs.
pub fn bellman_ford<G: Graph<f64>>(graph: &G, source: usize) -> Vec<f64> {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];
    if n == 0 {
        return dist;
    }
    dist[source] = 0.0;

    let edges: Vec<(usize, usize, f64)> = (0..n)
        .flat_map(|u| graph.outgoing_edges(u).map(move |(v, w)| (u, v, w)))
        .collect();

    for _ in 0..n - 1 {
        let mut updated = false;
        for &(u, v, w) in &edges {
            if dist[u].is_finite() && dist[u] + w < dist[v] {
                dist[v] = dist[u] + w;
                updated = true;
            }
        }
        if !updated {
            break;
        }
    }

    dist
}
