mod roster_csv;

pub use roster_csv::*;
