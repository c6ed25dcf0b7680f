//! Estructura union-find (conjuntos disjuntos) sobre identificadores de nodo.
//!
//! Combina compresión de caminos con unión por rango, lo que da tiempo
//! amortizado casi constante por operación. El estado vivo sólo existe dentro
//! de una ejecución del motor; lo que sale hacia afuera son
//! [`UnionFindSnapshot`]s, copias por valor.

mod snapshot;

pub use snapshot::{Component, UnionFindSnapshot};

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::errors::KruskalError;
use crate::graph::Node;

#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: BTreeMap<Node, Node>,
    rank: BTreeMap<Node, u32>,
}

impl UnionFind {
    /// Cada nodo es su propia raíz con rango 0.
    pub fn new<'a, I>(nodes: I) -> Self
        where I: IntoIterator<Item = &'a Node>
    {
        let mut parent = BTreeMap::new();
        let mut rank = BTreeMap::new();
        for n in nodes {
            parent.insert(n.clone(), n.clone());
            rank.insert(n.clone(), 0);
        }
        Self { parent, rank }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.parent.contains_key(node)
    }

    /// Representante del componente de `node`.
    ///
    /// Sube hasta la raíz y luego re-apunta cada nodo visitado directamente a
    /// ella. Iterativo: cadenas largas no crecen la pila.
    pub fn find(&mut self, node: &Node) -> Result<Node, KruskalError> {
        let root = climb(&self.parent, node)?.clone();
        let mut current = node.clone();
        while current != root {
            let slot = self.parent
                           .get_mut(&current)
                           .ok_or_else(|| KruskalError::UnregisteredNode(current.clone()))?;
            current = std::mem::replace(slot, root.clone());
        }
        Ok(root)
    }

    /// Une los componentes de `u` y `v` por rango.
    ///
    /// El motor pasa raíces ya resueltas; resolverlas de nuevo aquí no cambia
    /// nada para una raíz. Devuelve `false` (sin tocar el estado) si ya
    /// estaban unidos. En empate de rango la raíz de `u` queda como padre y
    /// su rango sube en uno.
    pub fn union(&mut self, u: &Node, v: &Node) -> Result<bool, KruskalError> {
        let root_u = self.find(u)?;
        let root_v = self.find(v)?;
        if root_u == root_v {
            return Ok(false);
        }

        let rank_u = self.rank_of(&root_u)?;
        let rank_v = self.rank_of(&root_v)?;
        match rank_u.cmp(&rank_v) {
            Ordering::Less => {
                self.parent.insert(root_u, root_v);
            }
            Ordering::Greater => {
                self.parent.insert(root_v, root_u);
            }
            Ordering::Equal => {
                self.parent.insert(root_v, root_u.clone());
                self.rank.insert(root_u, rank_u + 1);
            }
        }
        Ok(true)
    }

    pub fn connected(&mut self, u: &Node, v: &Node) -> Result<bool, KruskalError> {
        Ok(self.find(u)? == self.find(v)?)
    }

    pub fn rank_of(&self, node: &Node) -> Result<u32, KruskalError> {
        self.rank
            .get(node)
            .copied()
            .ok_or_else(|| KruskalError::UnregisteredNode(node.clone()))
    }

    /// Copia por valor del estado actual.
    pub fn snapshot(&self) -> UnionFindSnapshot {
        UnionFindSnapshot::new(self.parent.clone(), self.rank.clone())
    }
}

/// Sube por los enlaces `parent` sin modificarlos.
pub(crate) fn climb<'a>(parent: &'a BTreeMap<Node, Node>, node: &Node) -> Result<&'a Node, KruskalError> {
    let (mut current, mut next) = parent.get_key_value(node)
                                        .ok_or_else(|| KruskalError::UnregisteredNode(node.clone()))?;
    while current != next {
        current = next;
        next = parent.get(current)
                     .ok_or_else(|| KruskalError::UnregisteredNode(current.clone()))?;
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[&str]) -> Vec<Node> {
        ids.iter().map(|s| Node::from(*s)).collect()
    }

    #[test]
    fn starts_as_singletons() {
        let ns = nodes(&["A", "B", "C"]);
        let mut uf = UnionFind::new(&ns);
        for n in &ns {
            assert_eq!(uf.find(n).unwrap(), *n);
            assert_eq!(uf.rank_of(n).unwrap(), 0);
        }
        assert!(!uf.connected(&ns[0], &ns[1]).unwrap());
    }

    #[test]
    fn tie_makes_first_root_parent_and_bumps_rank() {
        let ns = nodes(&["A", "B"]);
        let mut uf = UnionFind::new(&ns);
        assert!(uf.union(&ns[0], &ns[1]).unwrap());
        let snap = uf.snapshot();
        assert_eq!(snap.parent()[&ns[1]], ns[0]);
        assert_eq!(snap.rank()[&ns[0]], 1);
        assert_eq!(snap.rank()[&ns[1]], 0);
    }

    #[test]
    fn lower_rank_root_goes_under_higher() {
        let ns = nodes(&["A", "B", "C"]);
        let mut uf = UnionFind::new(&ns);
        uf.union(&ns[0], &ns[1]).unwrap(); // A rango 1
        uf.union(&ns[2], &ns[0]).unwrap(); // C (0) bajo A (1)
        let snap = uf.snapshot();
        assert_eq!(snap.parent()[&ns[2]], ns[0]);
        assert_eq!(snap.rank()[&ns[0]], 1);
    }

    #[test]
    fn union_of_joined_pair_is_noop() {
        let ns = nodes(&["A", "B"]);
        let mut uf = UnionFind::new(&ns);
        uf.union(&ns[0], &ns[1]).unwrap();
        let before = uf.snapshot();
        assert!(!uf.union(&ns[1], &ns[0]).unwrap());
        assert_eq!(uf.snapshot(), before);
    }

    #[test]
    fn find_compresses_every_visited_node() {
        // Cadena D -> C -> B -> A construida a mano.
        let ns = nodes(&["A", "B", "C", "D"]);
        let mut uf = UnionFind::new(&ns);
        uf.parent.insert(ns[1].clone(), ns[0].clone());
        uf.parent.insert(ns[2].clone(), ns[1].clone());
        uf.parent.insert(ns[3].clone(), ns[2].clone());

        assert_eq!(uf.find(&ns[3]).unwrap(), ns[0]);
        for n in &ns[1..] {
            assert_eq!(uf.parent[n], ns[0], "{n} should point at the root");
        }
    }

    #[test]
    fn unknown_node_fails_without_creating_entry() {
        let ns = nodes(&["A"]);
        let mut uf = UnionFind::new(&ns);
        let ghost = Node::from("Z");
        assert_eq!(uf.find(&ghost), Err(KruskalError::UnregisteredNode(ghost.clone())));
        assert_eq!(uf.union(&ns[0], &ghost), Err(KruskalError::UnregisteredNode(ghost.clone())));
        assert!(!uf.contains(&ghost));
        assert_eq!(uf.len(), 1);
    }

    #[test]
    fn find_is_idempotent() {
        let ns = nodes(&["A", "B", "C", "D", "E"]);
        let mut uf = UnionFind::new(&ns);
        uf.union(&ns[0], &ns[1]).unwrap();
        uf.union(&ns[2], &ns[3]).unwrap();
        uf.union(&ns[3], &ns[1]).unwrap();
        for n in &ns {
            let first = uf.find(n).unwrap();
            assert_eq!(uf.find(n).unwrap(), first);
            assert_eq!(uf.find(n).unwrap(), first);
        }
    }

    #[test]
    fn connected_is_an_equivalence() {
        let ns = nodes(&["A", "B", "C", "D", "E", "F"]);
        let mut uf = UnionFind::new(&ns);
        uf.union(&ns[0], &ns[2]).unwrap();
        uf.union(&ns[2], &ns[4]).unwrap();
        uf.union(&ns[1], &ns[3]).unwrap();

        for a in &ns {
            assert!(uf.connected(a, a).unwrap());
            for b in &ns {
                let ab = uf.connected(a, b).unwrap();
                assert_eq!(ab, uf.connected(b, a).unwrap());
                for c in &ns {
                    if ab && uf.connected(b, c).unwrap() {
                        assert!(uf.connected(a, c).unwrap());
                    }
                }
            }
        }
        assert!(uf.connected(&ns[0], &ns[4]).unwrap());
        assert!(!uf.connected(&ns[0], &ns[1]).unwrap());
        assert!(!uf.connected(&ns[5], &ns[3]).unwrap());
    }
}
