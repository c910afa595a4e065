use crate::error::RuntimeError;
use memory::{Heap, ObjRef, ObjectKind};

use super::gc::GarbageCollector;
use super::stack::RootOps;

/// Root stack capacity. Overflow is a hard error, never a resize.
pub const STACK_MAX: usize = 256;

/// The execution engine: a bounded root stack over a GC'd object heap.
///
/// Single-threaded and synchronous; a collection is a stop-the-world pause
/// relative to the one mutator driving this struct.
pub struct VM {
    pub heap: Heap,
    /// The root stack. Bounded by [`STACK_MAX`]; every slot is a GC root.
    pub stack: Vec<ObjRef>,
}

impl Default for VM {
    fn default() -> Self {
        Self::new()
    }
}

impl VM {
    /// Create a new engine with an empty heap and root stack.
    pub fn new() -> Self {
        Self {
            heap: Heap::new(),
            stack: Vec::with_capacity(STACK_MAX),
        }
    }

    /// Allocation entry point shared by `push_int` and `make_pair`.
    ///
    /// The threshold check runs before the node is created, so a triggered
    /// collection can never reclaim the allocation it is making room for.
    fn alloc(&mut self, kind: ObjectKind) -> Result<ObjRef, RuntimeError> {
        if self.heap.should_collect() {
            log::debug!("auto gc at {} live objects", self.heap.live_objects());
            self.collect_garbage();
        }
        self.heap.alloc(kind).ok_or(RuntimeError::AllocationFailure)
    }

    /// Allocate an integer object and root it.
    pub fn push_int(&mut self, value: i64) -> Result<(), RuntimeError> {
        let obj = self.alloc(ObjectKind::Int(value))?;
        self.push(obj)
    }

    /// Pop two roots (tail on top, head below), allocate a pair holding
    /// them, and root the pair in their place.
    ///
    /// The operands are read before the allocation but popped after it, so
    /// they stay rooted across any collection the allocation triggers; once
    /// popped they remain reachable only through the new pair.
    pub fn make_pair(&mut self) -> Result<ObjRef, RuntimeError> {
        let len = self.stack.len();
        if len < 2 {
            return Err(RuntimeError::StackUnderflow);
        }
        let tail = self.stack[len - 1];
        let head = self.stack[len - 2];

        let pair = self.alloc(ObjectKind::Pair { head, tail })?;
        self.pop()?;
        self.pop()?;
        self.push(pair)?;
        Ok(pair)
    }

    /// Remove and return the top root.
    pub fn pop(&mut self) -> Result<ObjRef, RuntimeError> {
        RootOps::pop(self)
    }

    /// Manual collection trigger, independent of the threshold.
    pub fn collect(&mut self) {
        self.collect_garbage();
    }

    /// Teardown: drop every root without inspecting it, then collect.
    ///
    /// With no roots left the sweep reclaims everything, cross-references
    /// and cycles included; afterwards the heap is empty.
    pub fn release_all(&mut self) {
        self.stack.clear();
        self.collect_garbage();
    }

    /// Objects currently in the store.
    pub fn live_object_count(&self) -> usize {
        self.heap.live_objects()
    }

    /// Current root stack depth.
    pub fn root_stack_size(&self) -> usize {
        self.stack.len()
    }
}
