#[cfg(test)]
mod tests {
    use crate::{Heap, ObjRef, ObjectKind};

    #[test]
    fn test_objref_roundtrip() {
        let r = ObjRef(42);
        assert_eq!(r.index(), 42);
        assert_eq!(r, ObjRef(42));
        assert_ne!(r, ObjRef(7));
        assert_eq!(format!("{:?}", r), "Obj(42)");
    }

    #[test]
    fn test_kind_predicates() {
        let int = ObjectKind::Int(-3);
        assert!(int.is_int());
        assert!(!int.is_pair());

        let pair = ObjectKind::Pair {
            head: ObjRef(0),
            tail: ObjRef(1),
        };
        assert!(pair.is_pair());
        assert!(!pair.is_int());
    }

    #[test]
    fn test_alloc_starts_unmarked() {
        let mut heap = Heap::new();
        let obj = heap.alloc(ObjectKind::Int(5)).unwrap();
        assert!(!heap.is_marked(obj));
        assert_eq!(heap.get_int(obj), Some(5));
        assert_eq!(heap.get_pair(obj), None);
    }

    #[test]
    fn test_chain_is_newest_first() {
        let mut heap = Heap::new();
        let a = heap.alloc(ObjectKind::Int(1)).unwrap();
        let b = heap.alloc(ObjectKind::Int(2)).unwrap();
        let c = heap.alloc(ObjectKind::Int(3)).unwrap();

        let chain: Vec<ObjRef> = heap.iter().collect();
        assert_eq!(chain, vec![c, b, a]);
    }

    #[test]
    fn test_pair_setters_ignore_ints() {
        let mut heap = Heap::new();
        let int = heap.alloc(ObjectKind::Int(1)).unwrap();
        let other = heap.alloc(ObjectKind::Int(2)).unwrap();

        heap.set_pair_tail(int, other);
        assert_eq!(heap.get_int(int), Some(1));

        let pair = heap
            .alloc(ObjectKind::Pair {
                head: int,
                tail: int,
            })
            .unwrap();
        heap.set_pair_tail(pair, other);
        assert_eq!(heap.get_pair(pair), Some((int, other)));
        heap.set_pair_head(pair, other);
        assert_eq!(heap.get_pair(pair), Some((other, other)));
    }
}
