pub mod chain;
pub mod node;

pub use chain::ChainCursor;
pub use node::{ChainIter, Node, NodeChain};
