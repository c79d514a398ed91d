use lazicomb::{
    CartesianProduct, Concat, ConcatList, ForwardOnly, ProductList, SliceCursor, cartesian, concat,
};
use proptest::prelude::*;

fn sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..5)
}

fn non_empty_sequence() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 1..4)
}

fn walk_concat<L: ConcatList>(mut cursor: Concat<L>, end: &Concat<L>) -> Vec<L::Item> {
    let mut seen = Vec::new();
    while cursor != *end {
        seen.push(cursor.value().unwrap());
        cursor.advance();
    }
    seen
}

fn walk_product<L: ProductList>(
    mut cursor: CartesianProduct<L>,
    end: &CartesianProduct<L>,
) -> Vec<L::Values> {
    let mut seen = Vec::new();
    while cursor != *end {
        seen.push(cursor.value().unwrap());
        cursor.advance();
    }
    seen
}

proptest! {
    #[test]
    fn test_concat_visits_every_element_in_order(
        a in sequence(),
        b in sequence(),
        c in sequence()
    ) {
        let expected: Vec<i32> = a.iter().chain(&b).chain(&c).copied().collect();
        let (begin, end) = concat([&a, &b, &c]);

        let seen: Vec<i32> = walk_concat(begin.clone(), &end).into_iter().copied().collect();
        prop_assert_eq!(&seen, &expected);
        prop_assert_eq!(end.distance(&begin), expected.len() as isize);
        prop_assert_eq!(begin.len(), expected.len());
    }

    #[test]
    fn test_concat_indexing_agrees_with_increment(
        a in sequence(),
        b in sequence()
    ) {
        let (begin, end) = concat((&a, &b));
        let mut cursor = begin.clone();
        let mut offset = 0isize;

        while cursor != end {
            prop_assert_eq!(cursor.value().unwrap(), begin.at(offset).unwrap());
            prop_assert_eq!(cursor.clone(), begin.clone() + offset);
            cursor.advance();
            offset += 1;
        }
    }

    #[test]
    fn test_concat_offset_inverse_law(
        a in sequence(),
        b in sequence(),
        c in sequence(),
        start_seed in 0usize..64,
        offset_seed in 0usize..64
    ) {
        let (begin, end) = concat([&a, &b, &c]);
        let len = begin.len();
        let start = (start_seed % (len + 1)) as isize;
        let offset = (offset_seed % (len - start as usize + 1)) as isize;

        let cursor = begin.clone() + start;
        let moved = cursor.clone() + offset;
        prop_assert_eq!(moved.distance(&cursor), offset);
        prop_assert_eq!(moved.clone() - offset, cursor.clone());
        prop_assert!(moved <= end);
        prop_assert!(cursor <= moved);
    }

    #[test]
    fn test_concat_decrement_inverts_increment(
        a in sequence(),
        b in sequence(),
        c in sequence()
    ) {
        let (begin, end) = concat((&a, &b, &c));
        if begin != end {
            let mut cursor = begin.clone().next();
            while cursor != end {
                prop_assert_eq!(cursor.clone().prev().next(), cursor.clone());
                prop_assert_eq!(cursor.clone().next().prev(), cursor.clone());
                cursor.advance();
            }
        }
    }

    #[test]
    fn test_concat_forward_components(
        a in sequence(),
        b in sequence()
    ) {
        let begin = (ForwardOnly(SliceCursor::new(&a)), SliceCursor::new(&b));
        let end = (ForwardOnly(SliceCursor::end(&a)), SliceCursor::end(&b));
        let expected: Vec<&i32> = a.iter().chain(&b).collect();

        prop_assert_eq!(
            walk_concat(Concat::begin(begin, end), &Concat::end(begin, end)),
            expected
        );
    }

    #[test]
    fn test_cartesian_odometer_order(
        a in sequence(),
        b in sequence(),
        c in sequence()
    ) {
        let mut expected = Vec::new();
        for x in &a {
            for y in &b {
                for z in &c {
                    expected.push((x, y, z));
                }
            }
        }
        let (begin, end) = cartesian((&a, &b, &c));

        prop_assert_eq!(walk_product(begin.clone(), &end), expected);
        prop_assert_eq!(begin.len(), a.len() * b.len() * c.len());
        prop_assert_eq!(begin == end, a.is_empty() || b.is_empty() || c.is_empty());
        prop_assert!(begin.is_begin());
        prop_assert!(begin.clone().try_prev().is_err());
        prop_assert!(begin.at(-1).is_err());
    }

    #[test]
    fn test_cartesian_offset_agrees_with_increment(
        a in non_empty_sequence(),
        b in non_empty_sequence(),
        c in non_empty_sequence()
    ) {
        let (begin, end) = cartesian([&a, &b, &c]);
        let mut stepped = begin.clone();
        let mut offset = 0isize;

        while stepped != end {
            let jumped = begin.clone() + offset;
            prop_assert_eq!(&jumped, &stepped);
            prop_assert_eq!(jumped.distance(&begin), offset);
            prop_assert_eq!(jumped.clone() - offset, begin.clone());
            stepped.advance();
            offset += 1;
        }
        prop_assert_eq!(begin.clone() + offset, end);
    }

    #[test]
    fn test_cartesian_retreat_mirrors_advance(
        a in non_empty_sequence(),
        b in non_empty_sequence()
    ) {
        let (begin, end) = cartesian((&a, &b));
        let forward = walk_product(begin.clone(), &end);

        let mut cursor = end.clone();
        let mut backward = Vec::new();
        while cursor != begin {
            cursor.retreat();
            backward.push(cursor.value().unwrap());
        }
        backward.reverse();

        prop_assert_eq!(backward, forward);
    }
}
