//! Tests for the lexicographic scoring rule

#[cfg(test)]
mod tests {
    use tilevote::symmetry::Transform;
    use tilevote::tile::Tile;
    use tilevote::voting::{Score, VoteTable};

    fn score(tile: Tile, votes: &[(Transform, u32)]) -> Score {
        let mut table = VoteTable::new();
        for &(transform, count) in votes {
            table.add_votes(tile, transform, count);
        }
        let entry = table.get(&tile.signature()).unwrap();
        Score::of(entry).unwrap()
    }

    #[test]
    fn test_score_recomputation() {
        let spread = Transform {
            flip_y: true,
            ..Transform::IDENTITY
        };
        let derived = score(
            Tile::new([-1, 2, 0, 1]),
            &[(Transform::IDENTITY, 3), (spread, 2)],
        );
        assert_eq!(derived.total_votes, 5);
        assert_eq!(derived.untransformed_votes, 3);
        assert_eq!(derived.flipped_edge_count, 1);
        assert_eq!(derived.new_edge_count, 1);
    }

    // Verifies the criteria apply in strict lexicographic order, each one
    // a tie-break only when every previous one is exactly equal
    #[test]
    fn test_lexicographic_order() {
        let more_votes = Score {
            new_edge_count: 0,
            total_votes: 6,
            flipped_edge_count: 4,
            untransformed_votes: 0,
        };
        let fewer_votes = Score {
            new_edge_count: 0,
            total_votes: 5,
            flipped_edge_count: 0,
            untransformed_votes: 5,
        };
        assert!(more_votes.is_better_than(fewer_votes));
        assert!(!fewer_votes.is_better_than(more_votes));

        let fewer_flips = Score {
            flipped_edge_count: 1,
            ..fewer_votes
        };
        let more_flips = Score {
            flipped_edge_count: 2,
            untransformed_votes: 9,
            ..fewer_votes
        };
        assert!(fewer_flips.is_better_than(more_flips));

        let more_untransformed = Score {
            untransformed_votes: 3,
            ..fewer_flips
        };
        let less_untransformed = Score {
            untransformed_votes: 1,
            ..fewer_flips
        };
        assert!(more_untransformed.is_better_than(less_untransformed));
    }

    // A tile needing a fresh edge type loses to any tile that reuses
    // existing edges, whatever its vote counts
    #[test]
    fn test_new_edges_rank_last() {
        let needs_new_edge = Score {
            new_edge_count: 1,
            total_votes: 100,
            flipped_edge_count: 0,
            untransformed_votes: 100,
        };
        let reuses_edges = Score {
            new_edge_count: 0,
            total_votes: 1,
            flipped_edge_count: 4,
            untransformed_votes: 0,
        };
        assert!(reuses_edges.is_better_than(needs_new_edge));
        assert!(!needs_new_edge.is_better_than(reuses_edges));
    }

    #[test]
    fn test_equal_scores_compare_false_both_ways() {
        let score = Score {
            new_edge_count: 0,
            total_votes: 5,
            flipped_edge_count: 1,
            untransformed_votes: 2,
        };
        assert!(!score.is_better_than(score));
    }
}
