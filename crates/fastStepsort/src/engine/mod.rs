//! Layer: Engine
//!
//! This layer provides the parallel drivers that replace the sequential
//! kernels when the pass hook is installed. Each driver reuses its kernel's
//! semantics and observation windows; parallelism comes from fork-join
//! descent and data-parallel stages over index-disjoint sub-slices.

// Pass dispatch injected into the core executor
pub mod executor;

// Fork-join merge sort
pub mod merge;

// Fork-join quick sort with parallel partition count
pub mod quick;

// Bitonic network with data-parallel stages
pub mod bitonic;

// Heap sort strategies: subtree heapify and chunked k-way merge
pub mod heap;

// Exchange sorts: parallel-minimum selection and odd-even transposition
pub mod exchange;
