/*!
 * Timeline
 * Contiguous, ordered sequence of execution intervals
 */

use super::types::Interval;
use crate::core::types::SimTime;
use serde::{Deserialize, Serialize};

/// Execution timeline of one simulation run.
///
/// Intervals form a strict partition of simulated time from the earliest
/// arrival to the last completion: non-decreasing start times, no gaps, no
/// overlaps. The engine is the only writer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    intervals: Vec<Interval>,
}

impl Timeline {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Append an interval. It must start exactly where the timeline ends.
    pub(super) fn push(&mut self, interval: Interval) {
        debug_assert!(interval.end > interval.start);
        if let Some(last) = self.intervals.last() {
            debug_assert_eq!(last.end, interval.start);
        }
        self.intervals.push(interval);
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Earliest covered instant
    pub fn start(&self) -> Option<SimTime> {
        self.intervals.first().map(|i| i.start)
    }

    /// Latest covered instant
    pub fn end(&self) -> Option<SimTime> {
        self.intervals.last().map(|i| i.end)
    }

    /// Total time a process held the CPU
    pub fn busy_time(&self) -> SimTime {
        self.intervals
            .iter()
            .filter(|i| !i.is_idle())
            .map(Interval::duration)
            .sum()
    }

    /// Total time no process was ready. Idle time is never charged to any
    /// process's waiting time.
    pub fn idle_time(&self) -> SimTime {
        self.intervals
            .iter()
            .filter(|i| i.is_idle())
            .map(Interval::duration)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_accessors() {
        let mut timeline = Timeline::new();
        timeline.push(Interval::busy(1, 0, 3));
        timeline.push(Interval::idle(3, 5));
        timeline.push(Interval::busy(2, 5, 6));

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.start(), Some(0));
        assert_eq!(timeline.end(), Some(6));
        assert_eq!(timeline.busy_time(), 4);
        assert_eq!(timeline.idle_time(), 2);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = Timeline::new();
        assert!(timeline.is_empty());
        assert_eq!(timeline.start(), None);
        assert_eq!(timeline.end(), None);
        assert_eq!(timeline.busy_time(), 0);
    }
}
