use folio_protocol::{ScrollBehavior, UiCommand};

use super::easing::ease_in_out_cubic;
use super::tasks::{Task, TaskPoll};

/// The in-page target of an anchor `href`, if it has one.
///
/// Only hashes with a name are followed; `#` on its own and non-hash links
/// keep their default navigation.
pub fn anchor_hash(href: Option<&str>) -> Option<&str> {
    href.filter(|h| h.len() > 1 && h.starts_with('#'))
}

/// Scroll offset that puts an element just below the fixed header.
pub fn anchor_scroll_target(element_top: f64, header_offset: f64) -> f64 {
    element_top - header_offset
}

/// Animates the window scroll position from `from` to `to`.
///
/// The clock starts at the first sample, so a task queued between frames
/// does not skip its opening frames.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollAnimation {
    from: f64,
    to: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

impl ScrollAnimation {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            started_at: None,
        }
    }

    pub fn target(&self) -> f64 {
        self.to
    }

    /// Position after `elapsed_ms`. Exactly `to` once the duration is over.
    pub fn position_at(&self, elapsed_ms: f64) -> f64 {
        let progress = if self.duration_ms > 0.0 {
            (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        if progress >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_in_out_cubic(progress)
    }

    /// Position for the frame at `now` and whether the animation is done.
    pub fn sample(&mut self, now: f64) -> (f64, bool) {
        let start = *self.started_at.get_or_insert(now);
        let elapsed = now - start;
        (self.position_at(elapsed), elapsed >= self.duration_ms)
    }
}

impl Task for ScrollAnimation {
    fn poll(&mut self, now: f64) -> TaskPoll {
        let (top, done) = self.sample(now);
        let commands = vec![UiCommand::scroll_to(top, ScrollBehavior::Instant)];
        if done {
            TaskPoll::Ready(commands)
        } else {
            TaskPoll::Pending(commands)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_hash_filters_non_targets() {
        assert_eq!(anchor_hash(Some("#about")), Some("#about"));
        assert_eq!(anchor_hash(Some("#")), None);
        assert_eq!(anchor_hash(Some("")), None);
        assert_eq!(anchor_hash(Some("/resume.pdf")), None);
        assert_eq!(anchor_hash(None), None);
    }

    #[test]
    fn target_clears_the_header() {
        assert_eq!(anchor_scroll_target(1200.0, 80.0), 1120.0);
    }

    #[test]
    fn halfway_is_half_the_distance() {
        let anim = ScrollAnimation::new(0.0, 1000.0, 800.0);
        assert_eq!(anim.position_at(400.0), 500.0);
    }

    #[test]
    fn lands_exactly_on_target() {
        let anim = ScrollAnimation::new(37.3, 1234.567, 800.0);
        assert_eq!(anim.position_at(800.0), 1234.567);
        assert_eq!(anim.position_at(5_000.0), 1234.567);
    }

    #[test]
    fn clock_starts_on_first_sample() {
        let mut anim = ScrollAnimation::new(0.0, 100.0, 800.0);
        assert_eq!(anim.sample(10_000.0), (0.0, false));
        let (mid, done) = anim.sample(10_400.0);
        assert_eq!(mid, 50.0);
        assert!(!done);
        assert_eq!(anim.sample(10_800.0), (100.0, true));
    }

    #[test]
    fn scrolls_upwards_too() {
        let anim = ScrollAnimation::new(2000.0, 0.0, 800.0);
        assert_eq!(anim.position_at(400.0), 1000.0);
        assert_eq!(anim.position_at(800.0), 0.0);
    }

    #[test]
    fn polls_emit_instant_scrolls() {
        let mut anim = ScrollAnimation::new(0.0, 100.0, 800.0);
        match anim.poll(0.0) {
            TaskPoll::Pending(cmds) => assert_eq!(
                cmds,
                vec![UiCommand::scroll_to(0.0, ScrollBehavior::Instant)]
            ),
            TaskPoll::Ready(_) => panic!("first frame should not finish"),
        }
        assert!(matches!(anim.poll(900.0), TaskPoll::Ready(_)));
    }
}
