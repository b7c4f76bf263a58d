use crate::game::InputPoll;

/// Folds the key events seen between two ticks into one poll result.
///
/// A quit request sticks until polled; otherwise the latest heading wins.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: InputPoll,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, poll: InputPoll) {
        match (self.pending, poll) {
            (InputPoll::Quit, _) | (_, InputPoll::None) => {}
            (_, next) => self.pending = next,
        }
    }

    /// Take this tick's poll result and start collecting the next one
    pub fn poll(&mut self) -> InputPoll {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_empty_polls_none() {
        let mut queue = InputQueue::new();
        assert_eq!(queue.poll(), InputPoll::None);
    }

    #[test]
    fn test_latest_heading_wins() {
        let mut queue = InputQueue::new();
        queue.push(InputPoll::Heading(Direction::Up));
        queue.push(InputPoll::None);
        queue.push(InputPoll::Heading(Direction::Left));

        assert_eq!(queue.poll(), InputPoll::Heading(Direction::Left));
        assert_eq!(queue.poll(), InputPoll::None);
    }

    #[test]
    fn test_quit_dominates() {
        let mut queue = InputQueue::new();
        queue.push(InputPoll::Heading(Direction::Up));
        queue.push(InputPoll::Quit);
        queue.push(InputPoll::Heading(Direction::Down));

        assert_eq!(queue.poll(), InputPoll::Quit);
        assert_eq!(queue.poll(), InputPoll::None);
    }
}
