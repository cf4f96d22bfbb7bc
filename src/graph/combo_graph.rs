//! Undirected card co-occurrence graph.
//!
//! One node per distinct card name, one edge per pair of cards that
//! share at least one combo. Edge multiplicity is not tracked. Nodes are
//! numbered in first-insertion order, and every output that lists nodes
//! uses that order.

use rustc_hash::{FxHashMap, FxHashSet};

/// Adjacency-list graph over card names.
///
/// ## Example
///
/// ```
/// use deck_synergy::graph::ComboGraph;
///
/// let mut graph = ComboGraph::new();
/// graph.add_edge("A", "B");
/// graph.add_edge("B", "C");
/// graph.add_edge("C", "A");
/// graph.add_edge("C", "D");
///
/// assert_eq!(graph.k_core(2), vec!["A", "B", "C"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ComboGraph {
    nodes: Vec<String>,
    ids: FxHashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    edges: FxHashSet<(usize, usize)>,
}

impl ComboGraph {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn node(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected edge. Returns `false` for self-loops and edges
    /// that already exist.
    pub fn add_edge(&mut self, a: &str, b: &str) -> bool {
        if a == b {
            return false;
        }
        let (u, v) = (self.node(a), self.node(b));
        let key = (u.min(v), u.max(v));
        if !self.edges.insert(key) {
            return false;
        }
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        true
    }

    /// Add an edge between every pair of the given cards.
    pub fn add_clique<S: AsRef<str>>(&mut self, cards: &[S]) {
        for (i, a) in cards.iter().enumerate() {
            for b in &cards[i + 1..] {
                self.add_edge(a.as_ref(), b.as_ref());
            }
        }
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    #[must_use]
    pub fn degree(&self, name: &str) -> usize {
        self.ids.get(name).map_or(0, |&id| self.adjacency[id].len())
    }

    /// Node names in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.nodes.iter().map(String::as_str)
    }

    #[must_use]
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.ids.get(a), self.ids.get(b)) {
            (Some(&u), Some(&v)) => self.edges.contains(&(u.min(v), u.max(v))),
            _ => false,
        }
    }

    /// Nodes of the k-core: repeatedly remove nodes of degree below `k`
    /// until none remain. Returned in insertion order.
    #[must_use]
    pub fn k_core(&self, k: usize) -> Vec<String> {
        let mut degree: Vec<usize> = self.adjacency.iter().map(Vec::len).collect();
        let mut removed = vec![false; self.nodes.len()];

        let mut pending: Vec<usize> = (0..self.nodes.len()).filter(|&v| degree[v] < k).collect();
        for &v in &pending {
            removed[v] = true;
        }

        while let Some(v) = pending.pop() {
            for &u in &self.adjacency[v] {
                if removed[u] {
                    continue;
                }
                degree[u] -= 1;
                if degree[u] < k {
                    removed[u] = true;
                    pending.push(u);
                }
            }
        }

        self.nodes
            .iter()
            .zip(&removed)
            .filter(|(_, &gone)| !gone)
            .map(|(name, _)| name.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_tail() -> ComboGraph {
        let mut graph = ComboGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");
        graph.add_edge("C", "D");
        graph
    }

    #[test]
    fn test_edges_deduplicated() {
        let mut graph = triangle_with_tail();
        assert!(!graph.add_edge("B", "A"));
        assert!(!graph.add_edge("A", "A"));
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.degree("C"), 3);
        assert!(graph.has_edge("D", "C"));
        assert!(!graph.has_edge("A", "D"));
    }

    #[test]
    fn test_k_core_levels() {
        let graph = triangle_with_tail();
        assert_eq!(graph.k_core(0).len(), 4);
        assert_eq!(graph.k_core(1), vec!["A", "B", "C", "D"]);
        assert_eq!(graph.k_core(2), vec!["A", "B", "C"]);
        assert!(graph.k_core(3).is_empty());
    }

    #[test]
    fn test_k_core_cascading_removal() {
        // A path collapses entirely at k = 2.
        let mut graph = ComboGraph::new();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "D");
        assert!(graph.k_core(2).is_empty());
    }

    #[test]
    fn test_add_clique() {
        let mut graph = ComboGraph::new();
        graph.add_clique(&["A", "B", "C", "D"]);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(graph.k_core(3).len(), 4);
    }
}
