pub mod csv_input;

pub use csv_input::{read_grid_csv, read_series_csv};
