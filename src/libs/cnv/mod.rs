pub mod distance;
pub mod error;
pub mod io;
pub mod matrix;
pub mod sim;

pub use distance::{distance, nsp_and_costs, remove_intervals, zero_intervals, zero_intervals_cost};
pub use error::ProfileError;
