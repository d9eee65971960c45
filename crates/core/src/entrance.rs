//! Load-time entrance: page fade-in and the staggered hero reveal.

use folio_protocol::{StyleOp, Target, UiCommand};

use crate::config::EntranceConfig;
use crate::motion::{CubicBezier, Delayed, TaskKey};

/// Commands to run right away plus delayed tasks to hand to the queue.
#[derive(Debug, Default)]
pub struct Entrance {
    pub immediate: Vec<UiCommand>,
    pub scheduled: Vec<(TaskKey, Delayed)>,
}

/// Applied as soon as the script starts, before the first paint.
pub fn page_hidden() -> UiCommand {
    UiCommand::style(Target::Body, StyleOp::style("opacity", "0"))
}

/// Fade the page in shortly after load. `now` is the load time on the frame
/// clock.
pub fn page_fade_in(now: f64, config: &EntranceConfig) -> (TaskKey, Delayed) {
    let commands = vec![
        UiCommand::style(
            Target::Body,
            StyleOp::style("transition", format!("opacity 0.4s {}", CubicBezier::SOFT)),
        ),
        UiCommand::style(Target::Body, StyleOp::style("opacity", "1")),
    ];
    (
        TaskKey::Element(Target::Body),
        Delayed::anchored(now, config.body_fade_delay_ms, commands),
    )
}

/// Stagger the hero parts in. `present[i]` says whether the i-th configured
/// part exists; missing parts are skipped but keep their slot in the timing.
pub fn hero_entrance(present: &[bool], now: f64, config: &EntranceConfig) -> Entrance {
    let mut entrance = Entrance::default();
    let ease = CubicBezier::SOFT;
    for (index, _) in present.iter().enumerate().filter(|(_, p)| **p) {
        let target = Target::HeroPart(index);
        entrance.immediate.extend([
            UiCommand::style(target, StyleOp::style("opacity", "0")),
            UiCommand::style(
                target,
                StyleOp::style("transform", format!("translateY({}px)", config.hero_offset)),
            ),
        ]);

        let delay = config.hero_base_delay_ms + index as f64 * config.hero_step_ms;
        let shown = vec![
            UiCommand::style(
                target,
                StyleOp::style(
                    "transition",
                    format!("opacity 0.8s {ease}, transform 0.8s {ease}"),
                ),
            ),
            UiCommand::style(target, StyleOp::style("opacity", "1")),
            UiCommand::style(target, StyleOp::style("transform", "translateY(0)")),
        ];
        entrance
            .scheduled
            .push((TaskKey::Element(target), Delayed::anchored(now, delay, shown)));
    }
    entrance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_delays_keep_slots_of_missing_parts() {
        let cfg = EntranceConfig::default();
        let entrance = hero_entrance(&[true, false, true, true, false], 0.0, &cfg);
        let delays: Vec<_> = entrance
            .scheduled
            .iter()
            .map(|(key, task)| (*key, task.delay_ms()))
            .collect();
        assert_eq!(
            delays,
            vec![
                (TaskKey::Element(Target::HeroPart(0)), 100.0),
                (TaskKey::Element(Target::HeroPart(2)), 400.0),
                (TaskKey::Element(Target::HeroPart(3)), 550.0),
            ]
        );
        assert_eq!(entrance.immediate.len(), 6);
    }

    #[test]
    fn hero_parts_end_at_rest() {
        let entrance = hero_entrance(&[true], 0.0, &EntranceConfig::default());
        let (_, task) = &entrance.scheduled[0];
        assert!(task.commands().contains(&UiCommand::style(
            Target::HeroPart(0),
            StyleOp::style("transform", "translateY(0)")
        )));
        assert!(task.commands().contains(&UiCommand::style(
            Target::HeroPart(0),
            StyleOp::style(
                "transition",
                "opacity 0.8s cubic-bezier(0.28, 0.11, 0.32, 1), transform 0.8s cubic-bezier(0.28, 0.11, 0.32, 1)"
            )
        )));
    }

    #[test]
    fn page_fades_in_after_fifty_ms() {
        let (key, task) = page_fade_in(1_000.0, &EntranceConfig::default());
        assert_eq!(key, TaskKey::Element(Target::Body));
        assert_eq!(task.delay_ms(), 50.0);
        assert!(task.commands().contains(&UiCommand::style(
            Target::Body,
            StyleOp::style("opacity", "1")
        )));
    }
}
