//! Vote-for-rewards panel
//!
//! Sites carry a cooldown; the backend records every claim with the time the
//! site becomes claimable again. The panel derives each site's remaining
//! cooldown from the newest claim log for that site and updates itself
//! optimistically after a successful claim.

pub mod cooldown;
pub mod panel;

pub use cooldown::{
    format_duration, latest_next_available, parse_timestamp, remaining_for_sites, remaining_ms,
    MAX_CLAIM_HISTORY,
};
pub use panel::VotePanel;
