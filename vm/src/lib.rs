pub mod error;
pub mod machine;

pub use error::RuntimeError;
pub use machine::{GarbageCollector, RootOps, VM, STACK_MAX};
