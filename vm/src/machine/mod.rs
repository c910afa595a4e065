//! Machine module - engine facade over the GC heap
//!
//! The engine is segmented into focused submodules: the root stack
//! discipline, the collector driver, and the VM struct with its allocation
//! entry points.

mod gc;
mod stack;
mod vm;

// Public API
pub use gc::GarbageCollector;
pub use stack::RootOps;
pub use vm::{VM, STACK_MAX};
