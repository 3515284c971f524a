// src/models/node.rs
//
// The node chain: a fixed array of animated slots linked by index.

use tracing::trace;

use crate::animation::AnimationState;
use crate::config::NODES;

#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    pub state: AnimationState,
    pub next: Option<usize>,
    pub prev: Option<usize>,
}

impl Node {
    fn new(index: usize, len: usize) -> Self {
        Self {
            index,
            state: AnimationState::new(),
            next: (index + 1 < len).then_some(index + 1),
            prev: index.checked_sub(1),
        }
    }

    pub fn update<F: FnOnce(f32)>(&mut self, on_complete: F) {
        self.state.update(on_complete);
        trace!(node = self.index, scale = self.state.scale(), "tick");
    }

    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) {
        self.state.start_updating(on_start);
    }

    /// Neighbour in direction `dir` (-1 is backwards, anything else forwards).
    /// At either end of the chain `on_boundary` fires and the node's own
    /// index comes back.
    pub fn get_next<F: FnOnce()>(&self, dir: i32, on_boundary: F) -> usize {
        let neighbour = if dir == -1 { self.prev } else { self.next };
        match neighbour {
            Some(index) => index,
            None => {
                on_boundary();
                self.index
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct NodeChain {
    nodes: Vec<Node>,
}

impl Default for NodeChain {
    fn default() -> Self {
        Self::new(NODES)
    }
}

impl NodeChain {
    pub fn new(len: usize) -> Self {
        Self {
            nodes: (0..len).map(|i| Node::new(i, len)).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Node> {
        self.nodes.get_mut(index)
    }

    /// Walks the chain from the root along `next` links.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            chain: self,
            cursor: (!self.nodes.is_empty()).then_some(0),
        }
    }
}

pub struct ChainIter<'a> {
    chain: &'a NodeChain,
    cursor: Option<usize>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.chain.get(self.cursor?)?;
        self.cursor = node.next;
        Some(node)
    }
}
