//! Tests for the randomized growth frontier and pixel state transitions

#[cfg(test)]
mod tests {
    use markovtile::algorithm::frontier::{Frontier, FrontierEntry, PixelState};

    // Tests coordinates start unvisited and out-of-bounds has no state
    #[test]
    fn test_initial_state() {
        let frontier = Frontier::new(3, 2);

        assert_eq!(frontier.state((2, 1)), Some(PixelState::Unvisited));
        assert_eq!(frontier.state((3, 0)), None);
        assert!(frontier.is_empty());
        assert_eq!(frontier.colored_count(), 0);
    }

    // Tests lower priorities are dequeued first
    // Verified by using a max-heap without Reverse
    #[test]
    fn test_pop_lowest_priority_first() {
        let mut frontier = Frontier::new(4, 1);
        frontier.schedule((0, 0), 30);
        frontier.schedule((1, 0), 10);
        frontier.schedule((2, 0), 20);

        assert_eq!(frontier.pop(), Some((1, 0)));
        assert_eq!(frontier.pop(), Some((2, 0)));
        assert_eq!(frontier.pop(), Some((0, 0)));
        assert_eq!(frontier.pop(), None);
    }

    // Tests equal priorities come out in insertion order
    // Verified by ordering ties on position
    #[test]
    fn test_ties_break_by_insertion() {
        let mut frontier = Frontier::new(3, 3);
        frontier.schedule((2, 2), 5);
        frontier.schedule((0, 0), 5);
        frontier.schedule((1, 1), 5);

        assert_eq!(frontier.pop(), Some((2, 2)));
        assert_eq!(frontier.pop(), Some((0, 0)));
        assert_eq!(frontier.pop(), Some((1, 1)));
    }

    // Tests a coordinate is never scheduled twice
    // Verified by removing the unvisited check
    #[test]
    fn test_schedule_once() {
        let mut frontier = Frontier::new(2, 2);

        assert!(frontier.schedule((1, 1), 3));
        assert!(!frontier.schedule((1, 1), 0));
        assert!(!frontier.schedule((2, 0), 0));
        assert_eq!(frontier.len(), 1);
        assert_eq!(frontier.state((1, 1)), Some(PixelState::Enqueued));
    }

    // Tests state moves Unvisited -> Enqueued -> Colored
    #[test]
    fn test_state_transitions() {
        let mut frontier = Frontier::new(2, 2);
        frontier.schedule((0, 1), 0);
        let position = frontier.pop().unwrap();

        assert_eq!(frontier.state(position), Some(PixelState::Enqueued));
        assert!(frontier.mark_colored(position));
        assert_eq!(frontier.state(position), Some(PixelState::Colored));
        assert!(!frontier.mark_colored(position));
        assert!(!frontier.schedule(position, 0));
        assert_eq!(frontier.colored_count(), 1);
    }

    // Tests colored entries still in the queue are skipped on pop
    #[test]
    fn test_pop_skips_colored() {
        let mut frontier = Frontier::new(2, 1);
        frontier.schedule((0, 0), 1);
        frontier.schedule((1, 0), 2);
        frontier.mark_colored((0, 0));

        assert_eq!(frontier.pop(), Some((1, 0)));
        assert_eq!(frontier.pop(), None);
    }

    // Tests entry ordering compares priority before sequence
    #[test]
    fn test_entry_ordering() {
        let early = FrontierEntry {
            priority: 1,
            sequence: 9,
            position: (5, 5),
        };
        let late = FrontierEntry {
            priority: 2,
            sequence: 0,
            position: (0, 0),
        };

        assert!(early < late);
    }
}
