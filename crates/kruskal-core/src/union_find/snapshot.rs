//! Copia congelada del union-find guardada en cada `Step`.
//!
//! Los renderers re-derivan componentes sobre la copia con un `find` de sólo
//! lectura; nunca tocan la estructura viva.
use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::climb;
use crate::errors::KruskalError;
use crate::graph::Node;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnionFindSnapshot {
    parent: BTreeMap<Node, Node>,
    rank: BTreeMap<Node, u32>,
}

/// Componente conexo visto desde un snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub root: Node,
    pub rank: u32,
    pub members: Vec<Node>, // ordenados
}

impl UnionFindSnapshot {
    pub(crate) fn new(parent: BTreeMap<Node, Node>, rank: BTreeMap<Node, u32>) -> Self {
        Self { parent, rank }
    }

    pub fn parent(&self) -> &BTreeMap<Node, Node> {
        &self.parent
    }

    pub fn rank(&self) -> &BTreeMap<Node, u32> {
        &self.rank
    }

    pub fn rank_of(&self, node: &Node) -> Option<u32> {
        self.rank.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Raíz de `node` en este snapshot, sin compresión.
    pub fn find(&self, node: &Node) -> Result<&Node, KruskalError> {
        climb(&self.parent, node)
    }

    pub fn connected(&self, u: &Node, v: &Node) -> Result<bool, KruskalError> {
        Ok(self.find(u)? == self.find(v)?)
    }

    /// Agrupa todos los nodos por raíz. Los componentes quedan ordenados por
    /// su menor miembro.
    pub fn components(&self) -> Result<Vec<Component>, KruskalError> {
        let mut groups: IndexMap<&Node, Vec<Node>> = IndexMap::new();
        for node in self.parent.keys() {
            let root = self.find(node)?;
            groups.entry(root).or_default().push(node.clone());
        }
        groups.into_iter()
              .map(|(root, members)| {
                  self.rank_of(root)
                      .map(|rank| Component { root: root.clone(),
                                              rank,
                                              members })
                      .ok_or_else(|| KruskalError::UnregisteredNode(root.clone()))
              })
              .collect()
    }

    pub fn component_count(&self) -> usize {
        self.parent.iter().filter(|(n, p)| n == p).count()
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Node;
    use crate::union_find::UnionFind;

    #[test]
    fn snapshot_is_detached_from_live_structure() {
        let ns: Vec<Node> = ["A", "B", "C"].into_iter().map(Node::from).collect();
        let mut uf = UnionFind::new(&ns);
        let before = uf.snapshot();
        uf.union(&ns[0], &ns[1]).unwrap();

        assert_eq!(before.component_count(), 3);
        assert!(!before.connected(&ns[0], &ns[1]).unwrap());
        assert!(uf.snapshot().connected(&ns[0], &ns[1]).unwrap());
    }

    #[test]
    fn components_group_by_root() {
        let ns: Vec<Node> = ["D", "C", "B", "A"].into_iter().map(Node::from).collect();
        let mut uf = UnionFind::new(&ns);
        uf.union(&ns[1], &ns[3]).unwrap(); // C absorbe a A
        let comps = uf.snapshot().components().unwrap();

        assert_eq!(comps.len(), 3);
        assert_eq!(comps[0].root, Node::from("C"));
        assert_eq!(comps[0].members, vec![Node::from("A"), Node::from("C")]);
        assert_eq!(comps[0].rank, 1);
        assert_eq!(comps[1].members, vec![Node::from("B")]);
        assert_eq!(comps[2].members, vec![Node::from("D")]);
    }

    #[test]
    fn find_on_snapshot_does_not_mutate() {
        let ns: Vec<Node> = ["A", "B", "C"].into_iter().map(Node::from).collect();
        let mut uf = UnionFind::new(&ns);
        uf.union(&ns[0], &ns[1]).unwrap();
        uf.union(&ns[2], &ns[0]).unwrap();
        let snap = uf.snapshot();
        let copy = snap.clone();
        assert_eq!(snap.find(&ns[2]).unwrap(), &ns[0]);
        assert_eq!(snap, copy);
        assert!(snap.find(&Node::from("Q")).is_err());
    }

    #[test]
    fn components_fail_on_root_without_rank() {
        use std::collections::BTreeMap;

        use super::UnionFindSnapshot;
        use crate::errors::KruskalError;

        let a = Node::from("A");
        let parent = BTreeMap::from([(a.clone(), a.clone())]);
        let snap = UnionFindSnapshot::new(parent, BTreeMap::new());
        assert_eq!(snap.components().unwrap_err(), KruskalError::UnregisteredNode(a));
    }
}
