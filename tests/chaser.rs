mod tests {
    use reaction_chaser::{Chaser, Direction, LogicalRange};

    #[test]
    fn test_reaches_last_after_full_run() {
        let mut chaser = Chaser::new(LogicalRange::new(1, 16));
        for _ in 0..14 {
            chaser.step();
            assert_eq!(chaser.direction(), Direction::Forward);
        }
        chaser.step();
        assert_eq!(chaser.position(), 16);
        assert_eq!(chaser.direction(), Direction::Backward);
        assert!(chaser.at_target());
    }

    #[test]
    fn test_bounces_back_to_first() {
        let mut chaser = Chaser::new(LogicalRange::new(1, 16));
        for _ in 0..30 {
            chaser.step();
        }
        assert_eq!(chaser.position(), 1);
        assert_eq!(chaser.direction(), Direction::Forward);
        chaser.step();
        assert_eq!(chaser.position(), 2);
    }

    #[test]
    fn test_stays_in_range_and_flips_once_per_touch() {
        let range = LogicalRange::new(3, 9);
        let mut chaser = Chaser::new(range);
        let mut previous = chaser;
        for _ in 0..200 {
            chaser.step();
            assert!(range.contains(chaser.position()));
            assert_ne!(chaser.position(), previous.position());

            let flipped = chaser.direction() != previous.direction();
            let on_bound = chaser.position() == range.first || chaser.position() == range.last;
            assert_eq!(flipped, on_bound);
            previous = chaser;
        }
    }

    #[test]
    fn test_two_cell_range_alternates() {
        let mut chaser = Chaser::new(LogicalRange::new(4, 5));
        chaser.step();
        assert_eq!((chaser.position(), chaser.direction()), (5, Direction::Backward));
        chaser.step();
        assert_eq!((chaser.position(), chaser.direction()), (4, Direction::Forward));
    }

    #[test]
    fn test_single_cell_range_holds_still() {
        let mut chaser = Chaser::new(LogicalRange::new(2, 2));
        chaser.step();
        assert_eq!(chaser.position(), 2);
        assert!(chaser.at_target());
    }

    #[test]
    fn test_at_points_back_into_range_on_bounds() {
        let range = LogicalRange::new(1, 16);

        let mut chaser = Chaser::at(range, 16, Direction::Forward);
        assert_eq!(chaser.direction(), Direction::Backward);
        chaser.step();
        assert_eq!((chaser.position(), chaser.direction()), (15, Direction::Backward));

        let mut chaser = Chaser::at(range, 0, Direction::Backward);
        assert_eq!((chaser.position(), chaser.direction()), (1, Direction::Forward));
        chaser.step();
        assert_eq!(chaser.position(), 2);

        let chaser = Chaser::at(range, 40, Direction::Forward);
        assert_eq!((chaser.position(), chaser.direction()), (16, Direction::Backward));

        let chaser = Chaser::at(range, 7, Direction::Backward);
        assert_eq!(chaser.direction(), Direction::Backward);
    }

    #[test]
    fn test_at_clamps_position() {
        let range = LogicalRange::new(1, 16);
        assert_eq!(Chaser::at(range, 40, Direction::Forward).position(), 16);
        assert_eq!(Chaser::at(range, 0, Direction::Forward).position(), 1);
    }
}
