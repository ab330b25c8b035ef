//! ADS rate-limit quota reported in response headers.

use chrono::DateTime;
use reqwest::header::HeaderMap;

/// Daily quota snapshot from the `X-RateLimit-*` headers of an ADS response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimits {
    /// Requests allowed per period.
    pub limit: Option<u32>,
    /// Requests left in the current period.
    pub remaining: Option<u32>,
    /// Unix timestamp at which the quota resets.
    pub reset: Option<i64>,
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<T>().ok())
}

impl RateLimits {
    /// Read the rate-limit headers. Returns `None` when ADS sent none of them.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let limits = Self {
            limit: header_number(headers, "x-ratelimit-limit"),
            remaining: header_number(headers, "x-ratelimit-remaining"),
            reset: header_number(headers, "x-ratelimit-reset"),
        };
        if limits == Self::default() {
            None
        } else {
            Some(limits)
        }
    }

    /// Reset time in ctime layout, UTC. Unknown or invalid resets show the epoch.
    pub fn reset_display(&self) -> String {
        DateTime::from_timestamp(self.reset.unwrap_or(0), 0)
            .or_else(|| DateTime::from_timestamp(0, 0))
            .map(|t| t.format("%a %b %e %H:%M:%S %Y").to_string())
            .unwrap_or_default()
    }

    /// The two summary lines printed to stderr after a query.
    pub fn report(&self) -> String {
        let show = |v: Option<u32>| v.map(|n| n.to_string()).unwrap_or_else(|| "?".to_string());
        format!(
            "Remaining (limit): {:>4} ({:>4})\nReset (UTC): {}",
            show(self.remaining),
            show(self.limit),
            self.reset_display()
        )
    }
}
