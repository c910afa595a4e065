use crate::error::RuntimeError;
use memory::ObjRef;

use super::vm::STACK_MAX;

/// Trait for root stack operations.
///
/// Push and pop are the only two mutations; there is no random access and no
/// remove-by-value. The LIFO discipline is load-bearing: the stack models an
/// expression evaluation stack where only the top elements are in hand, and
/// every slot is a GC root.
pub trait RootOps {
    fn push(&mut self, obj: ObjRef) -> Result<(), RuntimeError>;
    fn pop(&mut self) -> Result<ObjRef, RuntimeError>;
}

impl RootOps for super::vm::VM {
    fn push(&mut self, obj: ObjRef) -> Result<(), RuntimeError> {
        if self.stack.len() == STACK_MAX {
            return Err(RuntimeError::StackOverflow);
        }
        self.stack.push(obj);
        Ok(())
    }

    fn pop(&mut self) -> Result<ObjRef, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow)
    }
}
