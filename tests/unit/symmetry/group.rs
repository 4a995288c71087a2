//! Tests for transform set enumeration and indexing

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use tilevote::symmetry::Transform;
    use tilevote::symmetry::group::{
        TRANSFORM_COUNT, all_transforms, all_transforms_by_expansion,
    };

    // Verifies the full cartesian product is enumerated: sixteen distinct
    // triples, twice the dihedral group of the square
    #[test]
    fn test_sixteen_distinct_transforms() {
        let transforms = all_transforms();
        assert_eq!(transforms.len(), TRANSFORM_COUNT);
        let distinct: HashSet<Transform> = transforms.iter().copied().collect();
        assert_eq!(distinct.len(), TRANSFORM_COUNT);
    }

    // Verifies both derivation strategies agree element for element
    // Verified by reversing the expansion order of one derivation
    #[test]
    fn test_derivations_agree() {
        assert_eq!(all_transforms(), all_transforms_by_expansion());
    }

    #[test]
    fn test_identity_is_first() {
        assert_eq!(all_transforms().first(), Some(&Transform::IDENTITY));
    }

    // Verifies index() matches the enumeration position for every element
    #[test]
    fn test_index_matches_enumeration_order() {
        for (position, transform) in all_transforms().into_iter().enumerate() {
            assert_eq!(transform.index(), position);
            assert_eq!(Transform::from_index(position), Some(transform));
        }
        assert_eq!(Transform::from_index(TRANSFORM_COUNT), None);
    }
}
