//! Momentum Scoring Heuristics
//!
//! Pure functions mapping raw market metrics to an opportunity score.
//! Two variants exist because the two providers expose different fields:
//! the boosted-listing feed carries full pair metrics (valuation, buy/sell
//! counts), while the trending-pool feed only carries price change, volume
//! and reserve. Both start at 0, add weighted contributions, and floor the
//! result at 0.
//!
//! Momentum contributions are bounded to an upper window (m5 below 15%, h1
//! below 30%) -- moves beyond that are treated as already played out, and the
//! pump/dump penalties take over from there.

/// Full metrics available from a trading-pair detail lookup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairMetrics {
    /// Fully diluted valuation in USD, 0 if unknown
    pub fdv: f64,
    /// 5-minute price change (%)
    pub m5_change: f64,
    /// 1-hour price change (%)
    pub h1_change: f64,
    /// 24-hour price change (%)
    pub h24_change: f64,
    /// Trailing 24h USD volume
    pub volume_24h: f64,
    /// Pooled liquidity in USD
    pub liquidity: f64,
    /// Buy transactions over the trailing 24h
    pub buys_24h: u64,
    /// Sell transactions over the trailing 24h
    pub sells_24h: u64,
}

/// Reduced metrics available from a trending-pool listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolMetrics {
    /// 1-hour price change (%)
    pub h1_change: f64,
    /// 6-hour price change (%)
    pub h6_change: f64,
    /// Trailing 24h USD volume
    pub volume_24h: f64,
    /// Pooled liquidity (reserve) in USD
    pub liquidity: f64,
}

/// Score a candidate from full pair metrics.
pub fn score_boosted_pair(m: &PairMetrics) -> f64 {
    let mut score = 0.0;

    // Early-stage bonus by valuation band; unknown fdv earns nothing.
    if m.fdv > 0.0 && m.fdv < 500_000.0 {
        score += 30.0;
    } else if (500_000.0..2_000_000.0).contains(&m.fdv) {
        score += 20.0;
    } else if (2_000_000.0..10_000_000.0).contains(&m.fdv) {
        score += 10.0;
    }

    // Short-window momentum, only inside the early-move window.
    if m.m5_change > 0.0 && m.m5_change < 15.0 {
        score += m.m5_change * 3.0;
    }
    if m.h1_change > 0.0 && m.h1_change < 30.0 {
        score += m.h1_change * 2.0;
    }

    // Hourly move confirmed by continuing 5-minute action.
    if m.h1_change > 5.0 && m.m5_change > 0.0 {
        score += 15.0;
    }

    // Volume turning over the pool, both thresholds cumulative.
    let vol_to_liq = m.volume_24h / m.liquidity.max(1.0);
    if vol_to_liq > 2.0 {
        score += 20.0;
    }
    if vol_to_liq > 5.0 {
        score += 15.0;
    }

    // Buy pressure, both thresholds cumulative.
    let buy_ratio = m.buys_24h as f64 / (m.sells_24h as f64).max(1.0);
    if buy_ratio > 1.3 {
        score += 15.0;
    }
    if buy_ratio > 2.0 {
        score += 10.0;
    }

    // Deterioration penalties.
    if m.m5_change > 30.0 {
        score -= 25.0; // already pumped
    }
    if m.h1_change < -15.0 {
        score -= 20.0; // actively dumping
    }
    if m.h24_change < -40.0 {
        score -= 20.0; // dead
    }
    if m.liquidity < 15_000.0 {
        score -= 10.0; // too thin to trade
    }
    if buy_ratio < 0.5 {
        score -= 15.0; // net sell pressure
    }

    score.max(0.0)
}

/// Score a candidate from trending-pool metrics.
///
/// Trending inclusion itself is a signal, hence the flat base bonus.
pub fn score_trending_pool(m: &PoolMetrics) -> f64 {
    let mut score = 0.0;

    if m.h1_change > 0.0 && m.h1_change < 30.0 {
        score += m.h1_change * 2.0;
    }
    if m.h6_change > 0.0 && m.h6_change < 50.0 {
        score += m.h6_change;
    }

    if m.volume_24h / m.liquidity.max(1.0) > 2.0 {
        score += 20.0;
    }

    score += 10.0;

    if m.h1_change < -15.0 {
        score -= 20.0;
    }
    if m.liquidity < 15_000.0 {
        score -= 10.0;
    }

    score.max(0.0)
}
