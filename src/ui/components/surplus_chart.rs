use crate::logic::explain::format_quantity;
use crate::models::Candidate;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Widget},
};

const MAX_BAR_WIDTH: u16 = 10;
const BAR_GAP: u16 = 1;

/// Bar chart of surplus capacity per eligible flight.
pub struct SurplusChart<'a> {
    candidates: &'a [Candidate<'a>],
    unit: &'a str,
}

impl<'a> SurplusChart<'a> {
    pub fn new(candidates: &'a [Candidate<'a>]) -> Self {
        Self {
            candidates,
            unit: "kg",
        }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    fn bar_width(&self, area: Rect) -> u16 {
        let count = self.candidates.len().max(1) as u16;
        let inner = area.width.saturating_sub(2);
        let per_bar = inner.saturating_sub(BAR_GAP * count.saturating_sub(1)) / count;
        per_bar.clamp(1, MAX_BAR_WIDTH)
    }
}

impl Widget for SurplusChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = self
            .candidates
            .iter()
            .map(|c| {
                Bar::default()
                    .label(Line::from(c.rule.flight.clone()))
                    .value(c.surplus.max(0.0).round() as u64)
                    .text_value(format_quantity(c.surplus))
                    .style(Style::default().fg(Theme::surplus_color(c.surplus, c.rule.max_weight)))
            })
            .collect();

        let max = bars_max(self.candidates);

        BarChart::default()
            .block(
                Block::default()
                    .title(Span::styled(
                        format!("Surplus Capacity ({})", self.unit),
                        Theme::title(),
                    ))
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .data(BarGroup::default().bars(&bars))
            .bar_width(self.bar_width(area))
            .bar_gap(BAR_GAP)
            .max(max)
            .render(area, buf);
    }
}

fn bars_max(candidates: &[Candidate]) -> u64 {
    candidates
        .iter()
        .map(|c| c.surplus.max(0.0).round() as u64)
        .max()
        .unwrap_or(0)
        .max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightRule;
    use crate::ui::render_to_string;

    #[test]
    fn labels_each_flight() {
        let f2 = FlightRule::new("F2", "Paris", 480.0, "23:59", 5.0);
        let f1 = FlightRule::new("F1", "Paris", 500.0, "23:59", 10.0);
        let candidates = [Candidate::new(&f2, 450.0), Candidate::new(&f1, 450.0)];

        let text = render_to_string(SurplusChart::new(&candidates), 40, 12);
        assert!(text.contains("Surplus Capacity (kg)"));
        assert!(text.contains("F2"));
        assert!(text.contains("F1"));
    }

    #[test]
    fn bar_width_shrinks_with_count() {
        let rules: Vec<_> = (0..20)
            .map(|i| FlightRule::new(format!("F{}", i), "Paris", 100.0, "23:59", 1.0))
            .collect();
        let candidates: Vec<_> = rules.iter().map(|r| Candidate::new(r, 10.0)).collect();
        let chart = SurplusChart::new(&candidates);

        assert_eq!(chart.bar_width(Rect::new(0, 0, 60, 10)), 1);
        let few = &candidates[..2];
        assert_eq!(SurplusChart::new(few).bar_width(Rect::new(0, 0, 60, 10)), MAX_BAR_WIDTH);
    }

    #[test]
    fn zero_surplus_chart_has_positive_scale() {
        let f = FlightRule::new("F1", "Paris", 100.0, "23:59", 1.0);
        let candidates = [Candidate::new(&f, 100.0)];
        assert_eq!(bars_max(&candidates), 1);
    }
}
