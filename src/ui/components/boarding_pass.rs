use crate::logic::explain::format_quantity;
use crate::models::FlightRule;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct BoardingPass<'a> {
    flight: &'a FlightRule,
    unit: &'a str,
}

impl<'a> BoardingPass<'a> {
    pub const HEIGHT: u16 = 10;

    pub fn new(flight: &'a FlightRule) -> Self {
        Self { flight, unit: "kg" }
    }

    pub fn unit(mut self, unit: &'a str) -> Self {
        self.unit = unit;
        self
    }

    fn field(label: &'static str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{}: ", label), Theme::dim()),
            Span::styled(value, Theme::normal()),
        ])
    }
}

impl Widget for BoardingPass<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(Span::styled("BOARDING PASS", Theme::title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let f = self.flight;
        let lines = vec![
            Line::from(""),
            Self::field("Flight", f.flight.clone()),
            Self::field("Destination", f.destination.clone()),
            Self::field("Airport Code", f.airport_code.clone()),
            Self::field("Departure Time", f.departure_time.clone()),
            Self::field(
                "Max Cargo Capacity",
                format!("{} {}", format_quantity(f.max_weight), self.unit),
            ),
            Self::field("Carbon Footprint", format_quantity(f.carbon_footprint)),
        ];

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
