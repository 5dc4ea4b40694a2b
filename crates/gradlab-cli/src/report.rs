//! Text rendering of experiment results
//!
//! Mirrors the explorer's results panel: final position, cost and slope,
//! the convergence verdict and the last few positions.

use gradlab_session::ExperimentReport;
use gradlab_types::TrajectoryPoint;
use nu_ansi_term::Color;

/// How many trailing positions the summary lists
pub const HISTORY_TAIL: usize = 5;

fn paint(color: Color, text: &str, enabled: bool) -> String {
    if enabled {
        color.paint(text).to_string()
    } else {
        text.to_string()
    }
}

pub fn render_report(report: &ExperimentReport, color: bool, trace: bool) -> String {
    let mut out = String::new();
    let params = &report.parameters;
    let diag = &report.diagnostics;

    out.push_str(&format!("Function        f(x) = {}\n", report.expression));
    out.push_str(&format!(
        "Parameters      lr = {}, iterations = {}, x0 = {}\n\n",
        params.learning_rate(),
        params.iterations(),
        params.initial_position()
    ));

    if trace {
        out.push_str(&render_trace(report.trajectory.points()));
        out.push('\n');
    }

    out.push_str(&format!("Final position  {:.4}\n", diag.final_position));
    out.push_str(&format!("Final cost      {:.4}\n", diag.final_value));
    out.push_str(&format!("Final slope     {:.4}\n", diag.final_slope));

    let verdict = if diag.converged {
        paint(Color::Green, &format!("✓ {}", report.summary()), color)
    } else {
        paint(Color::Yellow, &format!("! {}", report.summary()), color)
    };
    out.push_str(&verdict);
    out.push_str("\n\n");

    out.push_str(&format!("Last {} positions:\n", HISTORY_TAIL));
    let tail = report.trajectory.tail(HISTORY_TAIL);
    let first_step = report.trajectory.len() - tail.len();
    for (i, point) in tail.iter().enumerate() {
        out.push_str(&format!("  [{:>3}] {}\n", first_step + i, point.position));
    }

    out
}

/// Step-by-step table of the whole path
pub fn render_trace(points: &[TrajectoryPoint]) -> String {
    let mut out = format!("{:>5}  {:>14}  {:>14}\n", "step", "x", "f(x)");
    for (step, point) in points.iter().enumerate() {
        out.push_str(&format!(
            "{:>5}  {:>14.6}  {:>14.6}\n",
            step, point.position, point.value
        ));
    }
    out
}

/// Describe the points computed before a run failed
pub fn render_partial(points: &[TrajectoryPoint]) -> String {
    match points.last() {
        None => "the starting point could not be evaluated".to_string(),
        Some(last) => format!(
            "{} point(s) computed before the failure; last valid x = {}, f(x) = {}",
            points.len(),
            last.position,
            last.value
        ),
    }
}
