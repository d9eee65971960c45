use folio_protocol::{Target, UiCommand};
use log::trace;

/// Result of polling a task for one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum TaskPoll {
    /// Commands for this frame; poll again next frame.
    Pending(Vec<UiCommand>),
    /// Final commands; the task is dropped.
    Ready(Vec<UiCommand>),
}

/// A cooperative animation step function, polled with the frame timestamp
/// in milliseconds.
pub trait Task {
    fn poll(&mut self, now: f64) -> TaskPoll;
}

/// What a task animates. At most one task per key is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskKey {
    WindowScroll,
    Element(Target),
}

/// Emits a command batch once, after a delay.
#[derive(Debug, Clone, PartialEq)]
pub struct Delayed {
    delay_ms: f64,
    started_at: Option<f64>,
    commands: Vec<UiCommand>,
}

impl Delayed {
    /// Delay measured from the first poll.
    pub fn new(delay_ms: f64, commands: Vec<UiCommand>) -> Self {
        Self {
            delay_ms,
            started_at: None,
            commands,
        }
    }

    /// Delay measured from `now` (a timestamp on the frame clock).
    pub fn anchored(now: f64, delay_ms: f64, commands: Vec<UiCommand>) -> Self {
        Self {
            delay_ms,
            started_at: Some(now),
            commands,
        }
    }

    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    pub fn commands(&self) -> &[UiCommand] {
        &self.commands
    }
}

impl Task for Delayed {
    fn poll(&mut self, now: f64) -> TaskPoll {
        let start = *self.started_at.get_or_insert(now);
        if now - start >= self.delay_ms {
            TaskPoll::Ready(std::mem::take(&mut self.commands))
        } else {
            TaskPoll::Pending(Vec::new())
        }
    }
}

/// Keyed set of in-flight tasks.
///
/// Spawning a task for a key that already has one cancels the old task, so
/// repeated triggers replace an animation instead of stacking on top of it.
#[derive(Default)]
pub struct TaskQueue {
    tasks: Vec<(TaskKey, Box<dyn Task>)>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `task` under `key`. Returns `true` if a running task was
    /// cancelled to make room.
    pub fn spawn(&mut self, key: TaskKey, task: impl Task + 'static) -> bool {
        let replaced = self.cancel(key);
        self.tasks.push((key, Box::new(task)));
        replaced
    }

    /// Drop the task registered under `key`, if any.
    pub fn cancel(&mut self, key: TaskKey) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|(k, _)| *k != key);
        let cancelled = self.tasks.len() != before;
        if cancelled {
            trace!("cancelled task {key:?}");
        }
        cancelled
    }

    pub fn contains(&self, key: TaskKey) -> bool {
        self.tasks.iter().any(|(k, _)| *k == key)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Poll every task for the frame at `now`, in spawn order, and drop the
    /// finished ones.
    pub fn poll(&mut self, now: f64) -> Vec<UiCommand> {
        let mut commands = Vec::new();
        self.tasks.retain_mut(|(key, task)| match task.poll(now) {
            TaskPoll::Pending(cmds) => {
                commands.extend(cmds);
                true
            }
            TaskPoll::Ready(cmds) => {
                trace!("task {key:?} finished");
                commands.extend(cmds);
                false
            }
        });
        commands
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.tasks.iter().map(|(key, _)| key))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::ScrollAnimation;
    use folio_protocol::{ScrollBehavior, StyleOp};

    fn fade_in(target: Target) -> Vec<UiCommand> {
        vec![UiCommand::style(target, StyleOp::style("opacity", "1"))]
    }

    #[test]
    fn delayed_fires_once_after_delay() {
        let mut task = Delayed::anchored(1_000.0, 50.0, fade_in(Target::Body));
        assert_eq!(task.poll(1_049.0), TaskPoll::Pending(vec![]));
        assert_eq!(task.poll(1_050.0), TaskPoll::Ready(fade_in(Target::Body)));
    }

    #[test]
    fn unanchored_delay_starts_on_first_poll() {
        let mut task = Delayed::new(100.0, fade_in(Target::Body));
        assert_eq!(task.poll(500.0), TaskPoll::Pending(vec![]));
        assert!(matches!(task.poll(600.0), TaskPoll::Ready(_)));
    }

    #[test]
    fn queue_drops_finished_tasks() {
        let mut queue = TaskQueue::new();
        queue.spawn(
            TaskKey::Element(Target::Body),
            Delayed::anchored(0.0, 10.0, fade_in(Target::Body)),
        );
        assert!(queue.poll(5.0).is_empty());
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.poll(10.0), fade_in(Target::Body));
        assert!(queue.is_empty());
    }

    #[test]
    fn respawning_a_key_cancels_the_previous_task() {
        let mut queue = TaskQueue::new();
        assert!(!queue.spawn(TaskKey::WindowScroll, ScrollAnimation::new(0.0, 1000.0, 800.0)));
        queue.poll(0.0);
        queue.poll(400.0);

        // Second click mid-flight: the first animation must not keep running.
        assert!(queue.spawn(TaskKey::WindowScroll, ScrollAnimation::new(500.0, 0.0, 800.0)));
        assert_eq!(queue.len(), 1);

        let cmds = queue.poll(500.0);
        assert_eq!(
            cmds,
            vec![UiCommand::scroll_to(500.0, ScrollBehavior::Instant)]
        );
    }

    #[test]
    fn keys_are_independent() {
        let mut queue = TaskQueue::new();
        queue.spawn(TaskKey::WindowScroll, ScrollAnimation::new(0.0, 10.0, 800.0));
        queue.spawn(
            TaskKey::Element(Target::HeroPart(0)),
            Delayed::anchored(0.0, 100.0, fade_in(Target::HeroPart(0))),
        );
        queue.spawn(
            TaskKey::Element(Target::HeroPart(1)),
            Delayed::anchored(0.0, 250.0, fade_in(Target::HeroPart(1))),
        );
        assert_eq!(queue.len(), 3);

        assert!(queue.cancel(TaskKey::Element(Target::HeroPart(1))));
        assert!(!queue.contains(TaskKey::Element(Target::HeroPart(1))));
        assert!(!queue.cancel(TaskKey::Element(Target::HeroPart(1))));
        assert_eq!(queue.len(), 2);
    }
}
