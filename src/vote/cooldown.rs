//! Cooldown arithmetic

use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::HashMap;

use crate::models::{VoteClaimLog, VoteSite};

/// Claim history kept in memory
pub const MAX_CLAIM_HISTORY: usize = 50;

/// Parse a backend timestamp.
///
/// RFC 3339 values keep their offset. Naive ISO values carry no zone; the
/// backend produces them from a UTC clock, so they are read as UTC.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Map each site to the `next_available_at` of its first-seen claim.
///
/// `claims` must be ordered newest first, so first-seen is the newest claim.
/// A newest claim without a timestamp still shadows older ones.
pub fn latest_next_available<'a, I>(claims: I) -> HashMap<i64, Option<&'a str>>
where
    I: IntoIterator<Item = &'a VoteClaimLog>,
{
    let mut by_site = HashMap::new();
    for claim in claims {
        by_site
            .entry(claim.site_id)
            .or_insert(claim.next_available_at.as_deref());
    }
    by_site
}

/// Milliseconds until `next_available_at`; 0 when past, missing or malformed.
pub fn remaining_ms(next_available_at: Option<&str>, now: DateTime<Utc>) -> u64 {
    next_available_at
        .and_then(parse_timestamp)
        .map(|at| (at - now).num_milliseconds())
        .and_then(|ms| u64::try_from(ms).ok())
        .unwrap_or(0)
}

/// Remaining cooldown per site, in site order. Sites without a claim log are
/// claimable (0).
pub fn remaining_for_sites(
    sites: &[VoteSite],
    claims: &[VoteClaimLog],
    now: DateTime<Utc>,
) -> Vec<(i64, u64)> {
    let latest = latest_next_available(claims);
    sites
        .iter()
        .map(|site| {
            let next = latest.get(&site.id).copied().flatten();
            (site.id, remaining_ms(next, now))
        })
        .collect()
}

/// `"{h}h {m}m"`, `"{m}m {s}s"` or `"{s}s"`
pub fn format_duration(ms: u64) -> String {
    let total_secs = ms / 1000;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
    }

    fn site(id: i64) -> VoteSite {
        VoteSite {
            id,
            name: format!("site-{id}"),
            url: format!("https://vote{id}.example"),
            image_url: None,
            cooldown_minutes: 720,
            points_reward: 1,
            is_enabled: true,
            position: 0,
            next_available_at: None,
        }
    }

    fn log(site_id: i64, next: Option<&str>) -> VoteClaimLog {
        VoteClaimLog {
            site_id,
            reward: 1,
            next_available_at: next.map(str::to_string),
        }
    }

    #[test]
    fn test_parse_naive_as_utc() {
        let parsed = parse_timestamp("2024-05-01T12:30:00").unwrap();
        assert_eq!(parsed, now() + Duration::minutes(30));

        let micros = parse_timestamp("2024-05-01T12:30:00.250000").unwrap();
        assert_eq!(micros, now() + Duration::minutes(30) + Duration::milliseconds(250));
    }

    #[test]
    fn test_parse_rfc3339_keeps_offset() {
        let parsed = parse_timestamp("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(parsed, now());
        assert_eq!(parse_timestamp("2024-05-01T12:00:00Z"), Some(now()));
    }

    #[test]
    fn test_parse_malformed() {
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("tomorrow"), None);
        assert_eq!(parse_timestamp("2024-13-45T99:00:00"), None);
    }

    #[test]
    fn test_sites_without_logs_are_claimable() {
        let sites = vec![site(1), site(2)];
        let remaining = remaining_for_sites(&sites, &[], now());
        assert_eq!(remaining, vec![(1, 0), (2, 0)]);
    }

    #[test]
    fn test_future_timestamp_counts_down() {
        let sites = vec![site(1)];
        let claims = vec![log(1, Some("2024-05-01T13:00:00"))];
        let remaining = remaining_for_sites(&sites, &claims, now());
        assert_eq!(remaining, vec![(1, 3_600_000)]);
    }

    #[test]
    fn test_past_timestamp_is_claimable() {
        assert_eq!(remaining_ms(Some("2024-05-01T11:59:59"), now()), 0);
        assert_eq!(remaining_ms(Some("2024-05-01T12:00:00"), now()), 0);
    }

    #[test]
    fn test_missing_or_malformed_is_claimable() {
        assert_eq!(remaining_ms(None, now()), 0);
        assert_eq!(remaining_ms(Some("soon"), now()), 0);
    }

    #[test]
    fn test_only_newest_log_counts() {
        let sites = vec![site(1)];
        // Newest first: the newer claim already expired, an older one would not have.
        let claims = vec![
            log(1, Some("2024-05-01T11:00:00")),
            log(1, Some("2024-05-02T11:00:00")),
        ];
        assert_eq!(remaining_for_sites(&sites, &claims, now()), vec![(1, 0)]);
    }

    #[test]
    fn test_newest_log_without_timestamp_shadows_older() {
        let claims = vec![log(3, None), log(3, Some("2024-05-02T00:00:00"))];
        let latest = latest_next_available(&claims);
        assert_eq!(latest.get(&3), Some(&None));
    }

    #[test]
    fn test_logs_for_unknown_sites_ignored() {
        let sites = vec![site(1)];
        let claims = vec![log(99, Some("2024-05-02T00:00:00"))];
        assert_eq!(remaining_for_sites(&sites, &claims, now()), vec![(1, 0)]);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59_999), "59s");
        assert_eq!(format_duration(61_000), "1m 1s");
        assert_eq!(format_duration(3_600_000), "1h 0m");
        assert_eq!(format_duration(12 * 3_600_000 + 5 * 60_000 + 7_000), "12h 5m");
    }
}
