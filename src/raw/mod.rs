mod arena;
mod handle;
mod node;
mod raw_bst_set;

pub(crate) use handle::Handle;
pub(crate) use raw_bst_set::{RawBstSet, STACK_DEPTH};
