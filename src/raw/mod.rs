mod node;
mod raw_bst;
mod structural;

pub(crate) use node::Node;
pub(crate) use raw_bst::RawBst;
