pub mod date_ranges;
