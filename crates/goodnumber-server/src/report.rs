//! Plain text rendering for the command line.

use std::fmt::Write;

use goodnumber_core::{Candidate, Plan};

/// Renders a plan as a small aligned table.
pub fn render_plan(plan: &Plan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "AP:     {}", plan.ap);
    let _ = writeln!(out, "Target: {} ({})", plan.target, plan.family);
    let _ = writeln!(out, "Gap:    {}", plan.gap());

    if !plan.is_reachable() {
        let _ = writeln!(out, "No combination of actions reaches the target exactly.");
        return out;
    }

    let width = plan
        .combination
        .used()
        .map(|(inc, _)| inc.name.len())
        .max()
        .unwrap_or(0);
    for (inc, count) in plan.combination.used() {
        let _ = writeln!(out, "  {:<width$}  {:>5} x {}", inc.name, count, inc.value);
    }
    let _ = writeln!(out, "Total actions: {}", plan.combination.total_parts());
    out
}

/// Renders candidates one per line, nearest first.
pub fn render_candidates(candidates: &[Candidate]) -> String {
    let mut out = String::new();
    for c in candidates {
        let _ = writeln!(out, "{:<10} {}", c.family.name(), c.value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use goodnumber_core::{Planner, TargetFinder};

    #[test]
    fn test_render_reachable_plan() {
        let plan = Planner::default().plan(1980).unwrap();
        let text = render_plan(&plan);
        assert!(text.contains("Target: 2000 (round)"));
        assert!(text.contains("recharge"));
        assert!(text.contains("Total actions: 2"));
    }

    #[test]
    fn test_render_unreachable_plan() {
        let plan = Planner::default().plan(990).unwrap();
        let text = render_plan(&plan);
        assert!(text.contains("Gap:    9"));
        assert!(text.contains("No combination"));
    }

    #[test]
    fn test_render_candidates() {
        let text = render_candidates(&TargetFinder::new().candidates(999));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("round"));
        assert!(lines[0].ends_with("1000"));
        assert!(lines[3].ends_with("3141"));
    }
}
