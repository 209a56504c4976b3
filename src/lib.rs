//! A treap (Cartesian tree) whose every operation is built from `split` and `merge`.
//!
//! Keys and priorities are chosen by the caller. The treap keeps the binary search tree property
//! over keys and the max-heap property over priorities, so uniformly random priorities give an
//! expected height logarithmic in the number of keys.

pub mod treap;
