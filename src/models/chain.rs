// src/models/chain.rs
//
// Cursor over the node chain. Only the node under the cursor ever animates;
// when it completes the cursor steps along, bouncing off either end.

use tracing::debug;

use crate::models::node::{Node, NodeChain};

#[derive(Debug, Clone)]
pub struct ChainCursor {
    chain: NodeChain,
    current: usize,
    dir: i32,
}

impl Default for ChainCursor {
    fn default() -> Self {
        Self::new(NodeChain::default())
    }
}

impl ChainCursor {
    pub fn new(chain: NodeChain) -> Self {
        Self {
            chain,
            current: 0,
            dir: 1,
        }
    }

    /// Ticks the current node. On completion the cursor moves on and the
    /// committed scale is handed to `on_complete`.
    pub fn update<F: FnOnce(f32)>(&mut self, on_complete: F) {
        let mut completed = None;
        if let Some(node) = self.chain.get_mut(self.current) {
            node.update(|scale| completed = Some(scale));
        }

        if let Some(scale) = completed {
            self.advance();
            on_complete(scale);
        }
    }

    pub fn start_updating<F: FnOnce()>(&mut self, on_start: F) {
        if let Some(node) = self.chain.get_mut(self.current) {
            node.start_updating(on_start);
        }
    }

    fn advance(&mut self) {
        let Some(node) = self.chain.get(self.current) else {
            return;
        };
        let mut flip = false;
        let next = node.get_next(self.dir, || flip = true);
        if flip {
            self.dir = -self.dir;
            debug!(node = self.current, dir = self.dir, "chain end reached, reversing");
        }
        debug!(from = self.current, to = next, "cursor advanced");
        self.current = next;
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Node> {
        self.chain.get(self.current)
    }

    pub fn direction(&self) -> i32 {
        self.dir
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_idle(&self) -> bool {
        self.chain.iter().all(|node| node.state.is_idle())
    }
}
