use super::ranking::compare;
use crate::models::Candidate;
use std::cmp::Ordering;

/// One-line description of a selected flight with the values it was ranked on.
pub fn explain(candidate: &Candidate) -> String {
    format!(
        "Flight {} selected: surplus capacity {} kg, carbon footprint {}",
        candidate.rule.flight,
        format_quantity(candidate.surplus),
        format_quantity(candidate.rule.carbon_footprint)
    )
}

/// Explanation for the head of a ranked list, including why it beat the
/// runner-up. `None` for an empty list.
pub fn explain_ranking(ranked: &[Candidate]) -> Option<String> {
    let winner = ranked.first()?;
    let base = explain(winner);

    let rationale = match ranked.get(1) {
        None => "only eligible flight".to_string(),
        Some(runner_up) if winner.surplus < runner_up.surplus => format!(
            "won on smaller surplus ({} kg vs {} kg for {})",
            format_quantity(winner.surplus),
            format_quantity(runner_up.surplus),
            runner_up.rule.flight
        ),
        Some(runner_up) if compare(winner, runner_up) == Ordering::Less => format!(
            "won on tie-break cost (carbon footprint {} vs {} for {} at equal surplus)",
            format_quantity(winner.rule.carbon_footprint),
            format_quantity(runner_up.rule.carbon_footprint),
            runner_up.rule.flight
        ),
        Some(runner_up) => format!(
            "tied with {} on surplus and carbon footprint, listed first",
            runner_up.rule.flight
        ),
    };

    Some(format!("{} ({})", base, rationale))
}

/// Formats a number without a trailing `.0` when it is integral.
pub fn format_quantity(value: f64) -> String {
    // -0.0 prints as "-0"
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}
