//! Shortest path utilities over weighted graphs: single source (Dijkstra) on an adjacency list
//! and all pairs (Floyd-Warshall) on a weight matrix. They share nothing with the trees in this
//! crate.
//!
//! Weights are unsigned so every edge is non-negative. An unreachable vertex, or a missing entry
//! in a weight matrix, is `None`.
//!
//! # Examples
//!
//! ```
//! use fringe::paths::{shortest_paths_from, Graph};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 4)?;
//! graph.add_edge(1, 2, 1)?;
//!
//! let paths = shortest_paths_from(&graph, 0)?;
//! assert_eq!(paths.distances(), [Some(0), Some(4), Some(5)]);
//! assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
//! # Ok::<(), fringe::PathError>(())
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::debug;

use crate::error::PathError;

/// A weighted arc to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// The vertex this arc leads to.
    pub to: usize,
    /// The cost of following this arc.
    pub weight: u64,
}

/// A graph on the vertices `0..vertex_count` stored as adjacency lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Generates a graph with `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertices],
        }
    }

    /// The number of vertices in the graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// The arcs leaving `vertex`.
    ///
    /// # Panics
    ///
    /// Panics if `vertex` is not in the graph.
    pub fn edges(&self, vertex: usize) -> &[Edge] {
        &self.adjacency[vertex]
    }

    /// Adds a one-way arc from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EdgeOutOfRange`] if either end is not in the graph.
    pub fn add_arc(&mut self, from: usize, to: usize, weight: u64) -> Result<(), PathError> {
        self.check_edge(from, to)?;
        self.adjacency[from].push(Edge { to, weight });
        Ok(())
    }

    /// Adds an edge that can be followed both ways.
    ///
    /// # Errors
    ///
    /// Returns [`PathError::EdgeOutOfRange`] if either end is not in the graph.
    pub fn add_edge(&mut self, a: usize, b: usize, weight: u64) -> Result<(), PathError> {
        self.check_edge(a, b)?;
        self.adjacency[a].push(Edge { to: b, weight });
        self.adjacency[b].push(Edge { to: a, weight });
        Ok(())
    }

    fn check_edge(&self, from: usize, to: usize) -> Result<(), PathError> {
        let vertices = self.vertex_count();
        if from < vertices && to < vertices {
            Ok(())
        } else {
            Err(PathError::EdgeOutOfRange { from, to, vertices })
        }
    }
}

/// The result of a single source search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<Option<u64>>,
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The vertex the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The shortest distance from the source to each vertex, indexed by vertex.
    pub fn distances(&self) -> &[Option<u64>] {
        &self.distances
    }

    /// The shortest distance from the source to `vertex`. `None` if it can't be reached or isn't
    /// in the graph.
    pub fn distance(&self, vertex: usize) -> Option<u64> {
        self.distances.get(vertex).copied().flatten()
    }

    /// The vertices on a shortest path from the source to `vertex`, both ends included. `None`
    /// if `vertex` can't be reached.
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        self.distance(vertex)?;

        let mut path = vec![vertex];
        let mut current = vertex;
        while let Some(previous) = self.predecessors[current] {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Finds the shortest distance from `source` to every vertex of `graph` with Dijkstra's
/// algorithm.
///
/// # Errors
///
/// Returns [`PathError::SourceOutOfRange`] if `source` is not in the graph.
pub fn shortest_paths_from(graph: &Graph, source: usize) -> Result<ShortestPaths, PathError> {
    let vertices = graph.vertex_count();
    if source >= vertices {
        return Err(PathError::SourceOutOfRange {
            vertex: source,
            vertices,
        });
    }
    debug!(vertices, source, "searching single source shortest paths");

    let mut distances: Vec<Option<u64>> = vec![None; vertices];
    let mut predecessors: Vec<Option<usize>> = vec![None; vertices];
    let mut heap: BinaryHeap<Reverse<(u64, usize)>> = BinaryHeap::new();

    distances[source] = Some(0);
    heap.push(Reverse((0, source)));

    while let Some(Reverse((distance, u))) = heap.pop() {
        // A shorter route to `u` was found after this entry was pushed.
        if distances[u].is_some_and(|best| distance > best) {
            continue;
        }

        for edge in graph.edges(u) {
            let Some(candidate) = distance.checked_add(edge.weight) else {
                continue;
            };
            match distances[edge.to] {
                Some(best) if best <= candidate => {}
                _ => {
                    distances[edge.to] = Some(candidate);
                    predecessors[edge.to] = Some(u);
                    heap.push(Reverse((candidate, edge.to)));
                }
            }
        }
    }

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}

/// Finds the shortest distance between every pair of vertices with the Floyd-Warshall
/// algorithm. `weights[i][j]` is the weight of the arc from `i` to `j`, `None` when there is no
/// arc. The diagonal is taken as given.
///
/// # Errors
///
/// Returns [`PathError::NotSquare`] if some row doesn't have one entry per row of the matrix.
///
/// # Examples
///
/// ```
/// use fringe::paths::all_pairs_shortest_paths;
///
/// let weights = vec![
///     vec![Some(0), Some(1), None],
///     vec![None, Some(0), Some(2)],
///     vec![None, None, Some(0)],
/// ];
/// let distances = all_pairs_shortest_paths(&weights)?;
///
/// assert_eq!(distances[0][2], Some(3));
/// assert_eq!(distances[2][0], None);
/// # Ok::<(), fringe::PathError>(())
/// ```
pub fn all_pairs_shortest_paths(
    weights: &[Vec<Option<u64>>],
) -> Result<Vec<Vec<Option<u64>>>, PathError> {
    let n = weights.len();
    if let Some((row, len)) = weights
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != n)
    {
        return Err(PathError::NotSquare {
            row,
            len,
            expected: n,
        });
    }
    debug!(vertices = n, "searching all pairs shortest paths");

    let mut distances = weights.to_vec();
    for k in 0..n {
        for i in 0..n {
            let Some(to_k) = distances[i][k] else {
                continue;
            };
            for j in 0..n {
                let Some(via_k) = distances[k][j].and_then(|from_k| to_k.checked_add(from_k))
                else {
                    continue;
                };
                match distances[i][j] {
                    Some(direct) if direct <= via_k => {}
                    _ => distances[i][j] = Some(via_k),
                }
            }
        }
    }

    Ok(distances)
}
