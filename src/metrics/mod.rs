mod compactness;
mod partisan;
mod stats;

pub use compactness::{convex_hull_ratio, polsby_popper, schwartzberg};
pub use partisan::{competitiveness, efficiency_gap, mean_median_diff, partisan_index, wasted_votes, WastedVotes};
