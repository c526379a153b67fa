//! Reference dependency graph
//!
//! An asset must be fingerprinted after every asset it references, because
//! rewriting those references changes its bytes. This module orders assets
//! accordingly and reports cycles, which no order can satisfy.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::domain::value_objects::AssetPath;

/// Assets referencing each other in a loop.
///
/// `cycle` lists each member once, in reference order; the last member
/// references the first.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("reference cycle between assets: {}", CycleDisplay(.cycle))]
pub struct CycleError {
    cycle: Vec<AssetPath>,
}

impl CycleError {
    pub fn new(cycle: Vec<AssetPath>) -> Self {
        Self { cycle }
    }

    /// Members of the cycle
    pub fn cycle(&self) -> &[AssetPath] {
        &self.cycle
    }
}

struct CycleDisplay<'a>(&'a [AssetPath]);

impl fmt::Display for CycleDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in self.0 {
            write!(f, "{} -> ", path)?;
        }
        match self.0.first() {
            Some(first) => write!(f, "{}", first),
            None => Ok(()),
        }
    }
}

/// Directed graph: `from → to` when `from` references `to`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<AssetPath, BTreeSet<AssetPath>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an asset with no references (no-op if present)
    pub fn add_node(&mut self, path: AssetPath) {
        self.edges.entry(path).or_default();
    }

    /// Record that `from` references `to`
    pub fn add_edge(&mut self, from: AssetPath, to: AssetPath) {
        self.add_node(to.clone());
        self.edges.entry(from).or_default().insert(to);
    }

    /// Assets referenced by `path`
    pub fn dependencies_of(&self, path: &AssetPath) -> impl Iterator<Item = &AssetPath> {
        self.edges.get(path).into_iter().flatten()
    }

    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    /// Order assets so that every asset comes after everything it references.
    ///
    /// Among assets that are ready at the same time, lexical order decides,
    /// so the result is deterministic.
    pub fn topological_order(&self) -> Result<Vec<AssetPath>, CycleError> {
        let mut pending: BTreeMap<&AssetPath, usize> = BTreeMap::new();
        let mut dependents: BTreeMap<&AssetPath, Vec<&AssetPath>> = BTreeMap::new();

        for (from, deps) in &self.edges {
            pending.insert(from, deps.len());
            for to in deps {
                dependents.entry(to).or_default().push(from);
            }
        }

        let mut ready: BTreeSet<&AssetPath> = pending
            .iter()
            .filter(|(_, count)| **count == 0)
            .map(|(path, _)| *path)
            .collect();
        let mut order = Vec::with_capacity(self.edges.len());

        while let Some(next) = ready.pop_first() {
            order.push(next.clone());
            for &dependent in dependents.get(next).into_iter().flatten() {
                if let Some(count) = pending.get_mut(dependent) {
                    *count -= 1;
                    if *count == 0 {
                        ready.insert(dependent);
                    }
                }
            }
        }

        if order.len() == self.edges.len() {
            return Ok(order);
        }

        let blocked: BTreeSet<&AssetPath> = pending
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .map(|(path, _)| path)
            .collect();
        Err(CycleError::new(self.find_cycle(&blocked)))
    }

    /// Walk from the smallest blocked asset until a node repeats.
    ///
    /// Every blocked asset references at least one other blocked asset, so
    /// the walk always closes a loop.
    fn find_cycle(&self, blocked: &BTreeSet<&AssetPath>) -> Vec<AssetPath> {
        let mut path: Vec<&AssetPath> = Vec::new();
        let mut position: BTreeMap<&AssetPath, usize> = BTreeMap::new();
        let mut current = blocked.first().copied();

        while let Some(node) = current {
            if let Some(&start) = position.get(node) {
                return path[start..].iter().map(|&p| p.clone()).collect();
            }
            position.insert(node, path.len());
            path.push(node);
            current = self
                .dependencies_of(node)
                .find(|dep| blocked.contains(dep));
        }

        path.into_iter().cloned().collect()
    }
}
