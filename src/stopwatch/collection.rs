//! The ordered set of stopwatches on screen.
//!
//! Insertion order is display order. Ids are handed out monotonically and
//! are never reused, so a stale id simply stops resolving once its tracker
//! has been removed.

use std::time::Instant;

use super::tracker::ElapsedTimeTracker;

pub type TimerId = usize;

#[derive(Debug, Default)]
pub struct TimerCollection {
    trackers: Vec<(TimerId, ElapsedTimeTracker)>,
    next_id: TimerId,
}

impl TimerCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A collection holding `count` fresh, stopped trackers.
    pub fn with_count(count: usize) -> Self {
        let mut collection = Self::new();
        for _ in 0..count {
            collection.add();
        }
        collection
    }

    fn allocate_id(&mut self) -> TimerId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add(&mut self) -> TimerId {
        let id = self.allocate_id();
        self.trackers.push((id, ElapsedTimeTracker::new()));
        id
    }

    /// Drop the most recently added tracker. Returns its id, or `None` when
    /// the collection was already empty.
    pub fn remove_last(&mut self) -> Option<TimerId> {
        self.trackers.pop().map(|(id, _)| id)
    }

    pub fn remove_all(&mut self) {
        self.trackers.clear();
    }

    pub fn reset_all(&mut self) {
        self.reset_all_at(Instant::now());
    }

    pub fn reset_all_at(&mut self, now: Instant) {
        for (_, tracker) in &mut self.trackers {
            tracker.reset_at(now);
        }
    }

    pub fn len(&self) -> usize {
        self.trackers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trackers.is_empty()
    }

    pub fn get(&self, id: TimerId) -> Option<&ElapsedTimeTracker> {
        self.trackers.iter().find(|(i, _)| *i == id).map(|(_, t)| t)
    }

    pub fn get_mut(&mut self, id: TimerId) -> Option<&mut ElapsedTimeTracker> {
        self.trackers
            .iter_mut()
            .find(|(i, _)| *i == id)
            .map(|(_, t)| t)
    }

    /// Tracker at display position `index`.
    pub fn get_index(&self, index: usize) -> Option<(TimerId, &ElapsedTimeTracker)> {
        self.trackers.get(index).map(|(id, t)| (*id, t))
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<(TimerId, &mut ElapsedTimeTracker)> {
        self.trackers.get_mut(index).map(|(id, t)| (*id, t))
    }

    pub fn position(&self, id: TimerId) -> Option<usize> {
        self.trackers.iter().position(|(i, _)| *i == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (TimerId, &ElapsedTimeTracker)> {
        self.trackers.iter().map(|(id, t)| (*id, t))
    }

    pub fn running_count(&self) -> usize {
        self.trackers.iter().filter(|(_, t)| t.is_running()).count()
    }

    pub fn any_running(&self) -> bool {
        self.trackers.iter().any(|(_, t)| t.is_running())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_add_and_remove_last() {
        let mut timers = TimerCollection::with_count(1);
        timers.add();
        timers.add();
        assert_eq!(timers.len(), 3);
        timers.remove_last();
        assert_eq!(timers.len(), 2);
    }

    #[test]
    fn test_remove_all_then_remove_last_is_noop() {
        let mut timers = TimerCollection::with_count(3);
        timers.remove_all();
        assert!(timers.is_empty());
        assert_eq!(timers.remove_last(), None);
        assert_eq!(timers.len(), 0);
    }

    #[test]
    fn test_remove_last_removes_newest() {
        let mut timers = TimerCollection::new();
        let first = timers.add();
        let second = timers.add();
        assert_eq!(timers.remove_last(), Some(second));
        assert!(timers.get(second).is_none());
        assert!(timers.get(first).is_some());
    }

    #[test]
    fn test_ids_are_not_reused() {
        let mut timers = TimerCollection::new();
        let a = timers.add();
        timers.remove_last();
        let b = timers.add();
        assert_ne!(a, b);
        assert_eq!(timers.position(b), Some(0));
    }

    #[test]
    fn test_trackers_are_independent() {
        let t0 = Instant::now();
        let mut timers = TimerCollection::new();
        let a = timers.add();
        let b = timers.add();
        timers.get_mut(a).unwrap().start_at(t0);
        assert!(timers.get(a).unwrap().is_running());
        assert!(!timers.get(b).unwrap().is_running());
        assert_eq!(timers.running_count(), 1);
        assert!(timers.any_running());
    }

    #[test]
    fn test_reset_all_regardless_of_state() {
        let t0 = Instant::now();
        let mut timers = TimerCollection::with_count(2);
        {
            let (_, running) = timers.get_index_mut(0).unwrap();
            running.start_at(t0);
        }
        {
            let (_, stopped) = timers.get_index_mut(1).unwrap();
            stopped.start_at(t0);
            stopped.stop_at(t0 + Duration::from_secs(4));
        }
        let at = t0 + Duration::from_secs(10);
        timers.reset_all_at(at);
        for (_, t) in timers.iter() {
            assert_eq!(t.current_elapsed_at(at), Duration::ZERO);
        }
        assert!(timers.get_index(0).unwrap().1.is_running());
        assert!(!timers.get_index(1).unwrap().1.is_running());
    }

    #[test]
    fn test_reset_all_on_empty_is_noop() {
        let mut timers = TimerCollection::new();
        timers.reset_all();
        assert!(timers.is_empty());
    }
}
