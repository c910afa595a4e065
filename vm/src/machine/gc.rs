use memory::ObjRef;

/// Trait for garbage collection operations.
pub trait GarbageCollector {
    fn collect_garbage(&mut self);
    fn mark_roots(&self) -> Vec<ObjRef>;
}

impl GarbageCollector for super::vm::VM {
    /// Full stop-the-world cycle: mark from the root stack, sweep the store,
    /// then re-arm the automatic trigger at twice the surviving population.
    ///
    /// Manual and automatic collections share this path, so an explicit call
    /// also resets the auto-trigger point.
    fn collect_garbage(&mut self) {
        let before = self.heap.live_objects();

        let roots = self.mark_roots();
        self.heap.trace(&roots);
        self.heap.sweep();

        // Doubling lets the heap grow with the working set and shrink back
        // when most recent work was garbage.
        self.heap.gc_threshold = self.heap.live_objects() * 2;

        log::debug!(
            "gc: {} -> {} live objects, next threshold {}",
            before,
            self.heap.live_objects(),
            self.heap.gc_threshold
        );
    }

    fn mark_roots(&self) -> Vec<ObjRef> {
        self.stack.to_vec()
    }
}
