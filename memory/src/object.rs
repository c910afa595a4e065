use std::fmt;

/// Handle to an object slot in the [`Heap`](crate::Heap) arena.
///
/// The arena owns all object storage; references between objects are plain
/// indices, so a `Pair` may point at itself or at an ancestor without any
/// ownership cycle existing at the Rust level.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct ObjRef(pub u32);

impl ObjRef {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ObjRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Obj({})", self.0)
    }
}

/// The two runtime value kinds. The tag is fixed at allocation; a pair's
/// children are updated only through the heap's targeted setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectKind {
    Int(i64),
    Pair { head: ObjRef, tail: ObjRef },
}

impl ObjectKind {
    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, ObjectKind::Int(_))
    }

    #[inline]
    pub fn is_pair(&self) -> bool {
        matches!(self, ObjectKind::Pair { .. })
    }
}

/// One heap node.
///
/// `marked` is meaningful only while a collection is running: it is false on
/// every live object immediately before and immediately after a full cycle.
/// `next` is the intrusive store-enumeration link (insertion order, newest
/// first); it is independent of the `head`/`tail` object graph, so the chain
/// stays acyclic even when the graph cycles.
#[derive(Debug)]
pub struct HeapObject {
    pub kind: ObjectKind,
    pub marked: bool,
    pub next: Option<ObjRef>,
}

impl HeapObject {
    pub fn new(kind: ObjectKind, next: Option<ObjRef>) -> Self {
        Self {
            kind,
            marked: false,
            next,
        }
    }
}
