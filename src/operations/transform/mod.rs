mod snap;

pub use snap::snap_to_grid;
