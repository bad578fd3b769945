//! Integer-displacement estimation between grid views.

mod block_match;
mod coarse_to_fine;
mod patch;
mod translate;

pub use block_match::{best_displacement, ssd};
pub use coarse_to_fine::{estimate_displacement, AlignParams};
pub use patch::crop_square_patch;
pub use translate::translate;
