mod arena;
mod handle;
mod node;
mod raw_binary_tree;
mod raw_chain_table;

pub(crate) use node::Side;
pub(crate) use raw_binary_tree::{InOrder, RawBinaryTree};
pub(crate) use raw_chain_table::{Chains, RawChainTable};
