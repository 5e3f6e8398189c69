pub mod boarding_pass;
pub mod flight_table;
pub mod surplus_chart;

pub use boarding_pass::BoardingPass;
pub use flight_table::FlightTable;
pub use surplus_chart::SurplusChart;
