use crate::object::{HeapObject, ObjRef, ObjectKind};

/// Live-object count at which the first automatic collection fires.
pub const INITIAL_GC_THRESHOLD: usize = 8;

/// The object store plus the collector's mark and sweep phases.
///
/// Storage is an index arena: slots are reused through a free list, and a
/// handle is only ever handed out for an occupied slot. Every live object is
/// additionally threaded onto one intrusive chain (newest allocation at the
/// head) so sweep can enumerate the whole store without consulting the
/// object graph.
pub struct Heap {
    slots: Vec<Option<HeapObject>>,
    free_indices: Vec<u32>,

    /// Head of the intrusive allocation chain (newest first).
    head: Option<ObjRef>,

    live_objects: usize,

    /// Live-object count at which the next allocation should collect first.
    /// Recomputed by the engine after every collection.
    pub gc_threshold: usize,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

impl Heap {
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_indices: Vec::new(),
            head: None,
            live_objects: 0,
            gc_threshold: INITIAL_GC_THRESHOLD,
        }
    }

    /// Allocate a new object and link it at the head of the chain.
    ///
    /// Returns `None` only when the u32 handle space is exhausted; the
    /// caller treats that as fatal. Exhaustion of the underlying allocator
    /// aborts the process and is out of scope for recovery.
    pub fn alloc(&mut self, kind: ObjectKind) -> Option<ObjRef> {
        let object = HeapObject::new(kind, self.head);
        let index = match self.free_indices.pop() {
            Some(index) => {
                self.slots[index as usize] = Some(object);
                index
            }
            None => {
                if self.slots.len() > u32::MAX as usize {
                    return None;
                }
                let index = self.slots.len() as u32;
                self.slots.push(Some(object));
                index
            }
        };

        let obj = ObjRef(index);
        self.head = Some(obj);
        self.live_objects += 1;
        Some(obj)
    }

    /// Mark phase: flag everything reachable from `roots`.
    ///
    /// Runs over an explicit worklist rather than call recursion, so depth
    /// is bounded by heap size, not by the native stack. The marked check is
    /// the single source of termination: a node already flagged is skipped,
    /// which is what makes cycles and shared substructure safe.
    pub fn trace(&mut self, roots: &[ObjRef]) {
        let mut worklist: Vec<ObjRef> = roots.to_vec();

        while let Some(obj) = worklist.pop() {
            let Some(node) = self.slots.get_mut(obj.index()).and_then(Option::as_mut) else {
                continue;
            };
            if node.marked {
                continue;
            }
            node.marked = true;
            log::trace!("marked {:?}", obj);

            if let ObjectKind::Pair { head, tail } = node.kind {
                // Tail pushed first so head is visited first.
                worklist.push(tail);
                worklist.push(head);
            }
        }
    }

    /// Sweep phase: one pass over the intrusive chain.
    ///
    /// Unmarked nodes are unlinked and their slot released to the free list;
    /// marked nodes have the flag cleared for the next cycle. Afterwards the
    /// chain holds exactly the survivors and `live_objects` equals its
    /// length.
    pub fn sweep(&mut self) {
        let mut freed = 0usize;
        let mut prev: Option<ObjRef> = None;
        let mut cursor = self.head;

        while let Some(obj) = cursor {
            let Some(node) = self.slots[obj.index()].as_mut() else {
                // Chain entries always point at occupied slots.
                break;
            };
            let next = node.next;

            if node.marked {
                node.marked = false;
                prev = Some(obj);
            } else {
                match prev {
                    Some(p) => {
                        if let Some(prev_node) = self.slots[p.index()].as_mut() {
                            prev_node.next = next;
                        }
                    }
                    None => self.head = next,
                }
                self.slots[obj.index()] = None;
                self.free_indices.push(obj.0);
                self.live_objects -= 1;
                freed += 1;
            }

            cursor = next;
        }

        log::trace!("sweep freed {} objects, {} live", freed, self.live_objects);
    }

    /// Strict equality, not `>=`: preserves the original trigger behavior,
    /// including the degenerate zero-threshold case after an empty sweep.
    #[inline]
    pub fn should_collect(&self) -> bool {
        self.live_objects == self.gc_threshold
    }

    #[inline]
    pub fn live_objects(&self) -> usize {
        self.live_objects
    }

    /// Total slots ever created, occupied or free.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, obj: ObjRef) -> Option<&HeapObject> {
        self.slots.get(obj.index()).and_then(Option::as_ref)
    }

    pub fn get_int(&self, obj: ObjRef) -> Option<i64> {
        match self.get(obj)?.kind {
            ObjectKind::Int(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_pair(&self, obj: ObjRef) -> Option<(ObjRef, ObjRef)> {
        match self.get(obj)?.kind {
            ObjectKind::Pair { head, tail } => Some((head, tail)),
            _ => None,
        }
    }

    /// Redirect a pair's `head` field. No-op on ints and vacant slots; the
    /// kind tag itself never changes after allocation.
    pub fn set_pair_head(&mut self, pair: ObjRef, value: ObjRef) {
        if let Some(HeapObject {
            kind: ObjectKind::Pair { head, .. },
            ..
        }) = self.slots.get_mut(pair.index()).and_then(Option::as_mut)
        {
            *head = value;
        }
    }

    /// Redirect a pair's `tail` field. No-op on ints and vacant slots.
    pub fn set_pair_tail(&mut self, pair: ObjRef, value: ObjRef) {
        if let Some(HeapObject {
            kind: ObjectKind::Pair { tail, .. },
            ..
        }) = self.slots.get_mut(pair.index()).and_then(Option::as_mut)
        {
            *tail = value;
        }
    }

    pub fn is_marked(&self, obj: ObjRef) -> bool {
        self.get(obj).map(|node| node.marked).unwrap_or(false)
    }

    /// True when the slot has been swept (or never allocated).
    pub fn is_free(&self, obj: ObjRef) -> bool {
        self.get(obj).is_none()
    }

    /// Walk the allocation chain, newest first.
    pub fn iter(&self) -> ChainIter<'_> {
        ChainIter {
            heap: self,
            cursor: self.head,
        }
    }
}

/// Iterator over the intrusive allocation chain.
pub struct ChainIter<'a> {
    heap: &'a Heap,
    cursor: Option<ObjRef>,
}

impl Iterator for ChainIter<'_> {
    type Item = ObjRef;

    fn next(&mut self) -> Option<ObjRef> {
        let obj = self.cursor?;
        self.cursor = self.heap.get(obj).and_then(|node| node.next);
        Some(obj)
    }
}
