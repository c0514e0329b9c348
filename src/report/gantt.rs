/*!
 * Text Gantt Chart
 * One glyph per time cell; each process keeps the same glyph across runs
 */

use crate::core::types::Tick;
use crate::scheduler::SimulationResult;
use crate::timeline::{Label, Timeline};

/// Glyph used for idle cells
pub const IDLE_GLYPH: char = '.';

/// Widest bar rendered before cells start covering several ticks
pub const MAX_GANTT_WIDTH: usize = 80;

const GLYPHS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Stable glyph for `label`, keyed by the process's position in the workload
pub fn glyph_for(label: Label, result: &SimulationResult) -> char {
    match label {
        Label::Idle => IDLE_GLYPH,
        Label::Process(pid) => result
            .processes
            .iter()
            .position(|outcome| outcome.pid == pid)
            .map_or('?', |index| char::from(GLYPHS[index % GLYPHS.len()])),
    }
}

fn label_at(timeline: &Timeline, tick: Tick) -> Option<Label> {
    timeline
        .iter()
        .find(|entry| entry.start <= tick && tick < entry.end)
        .map(|entry| entry.label)
}

/// Render the timeline as a bar, an axis, and a legend
pub fn gantt(result: &SimulationResult) -> String {
    let makespan = result.makespan();
    if result.timeline.is_empty() || makespan <= 0 {
        return "No timeline data to visualize".to_string();
    }

    let width = (makespan as usize).min(MAX_GANTT_WIDTH);
    let ticks_per_cell = (makespan as usize).div_ceil(width) as Tick;

    let bar: String = (0..width as Tick)
        .map(|cell| cell * ticks_per_cell)
        .take_while(|&tick| tick < makespan)
        .map(|tick| label_at(&result.timeline, tick).map_or(' ', |l| glyph_for(l, result)))
        .collect();

    let cells = bar.chars().count();
    let axis = format!("0{:>width$}", makespan, width = cells + 1);

    let mut legend: Vec<String> = result
        .processes
        .iter()
        .map(|outcome| {
            let label = Label::Process(outcome.pid);
            format!("{}={}", glyph_for(label, result), label)
        })
        .collect();
    if result.timeline.iter().any(|entry| entry.label.is_idle()) {
        legend.push(format!("{}={}", IDLE_GLYPH, Label::Idle));
    }

    let mut lines = vec![format!("{} Timeline", result.algorithm_name())];
    lines.push(format!("|{}|", bar));
    lines.push(axis);
    if ticks_per_cell > 1 {
        lines.push(format!("(1 cell = {} time units)", ticks_per_cell));
    }
    lines.push(format!("Legend: {}", legend.join(" ")));
    lines.join("\n")
}
