//! Binary search tree over caller-supplied keys where each node also maintains the heap invariant
//! over caller-supplied priorities.

mod map;
mod node;
mod tree;

pub use self::map::{Nodes, Treap};
pub use self::node::Node;
use std::error;
use std::fmt;
use std::result;

/// Convenience `Result` type for treap operations.
pub type Result<T> = result::Result<T, Error>;

/// An enum representing the errors a treap operation can report.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key does not exist in the treap.
    KeyNotFound,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::KeyNotFound => write!(f, "key not found in treap"),
        }
    }
}
