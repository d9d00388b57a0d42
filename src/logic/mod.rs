//! Bracket business logic: construction, traversal, and advancement text.

mod double_elimination;
mod status;
mod traversal;

pub use double_elimination::{double_elimination_bracket, MAX_ALLIANCES, MIN_ALLIANCES};
pub use status::{status_text, successor_map, Successors};
pub use traversal::{
    collect_match_groups, collect_match_specs, match_owners, reachable_matchups, update_bracket,
};
