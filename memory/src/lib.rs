pub mod object;
pub mod heap;

#[cfg(test)]
mod object_tests;

pub use object::{HeapObject, ObjRef, ObjectKind};
pub use heap::{Heap, INITIAL_GC_THRESHOLD};
