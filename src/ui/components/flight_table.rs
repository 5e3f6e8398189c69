use crate::logic::explain::format_quantity;
use crate::models::Candidate;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table, Widget},
};

const HEADERS: [&str; 6] = [
    "Flight",
    "Max Weight",
    "Surplus",
    "Airport",
    "Departure",
    "Carbon",
];

/// Ranked listing of every eligible flight. The first row is the recommendation.
pub struct FlightTable<'a> {
    candidates: &'a [Candidate<'a>],
    unit: &'a str,
    title: String,
}

impl<'a> FlightTable<'a> {
    pub fn new(candidates: &'a [Candidate<'a>]) -> Self {
        Self {
            candidates,
            unit: "kg",
            title: "Available Flights".to_string(),
        }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Rows needed to show every candidate: borders, header, one row each.
    pub fn height(&self) -> u16 {
        u16::try_from(self.candidates.len())
            .unwrap_or(u16::MAX)
            .saturating_add(3)
    }
}

impl Widget for FlightTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let header = Row::new(HEADERS.iter().map(|h| Cell::from(*h).style(Theme::header())));

        let rows: Vec<Row> = self
            .candidates
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let style = if i == 0 {
                    Theme::highlight()
                } else {
                    Theme::normal()
                };

                Row::new(vec![
                    Cell::from(c.rule.flight.clone()),
                    Cell::from(format!("{} {}", format_quantity(c.rule.max_weight), self.unit)),
                    Cell::from(format!("{} {}", format_quantity(c.surplus), self.unit)),
                    Cell::from(c.rule.airport_code.clone()),
                    Cell::from(c.rule.departure_time.clone()),
                    Cell::from(format_quantity(c.rule.carbon_footprint)),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Min(6),
        ];

        Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(Span::styled(self.title, Theme::title()))
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .render(area, buf);
    }
}
