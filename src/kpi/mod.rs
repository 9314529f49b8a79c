//! KPI record types
//!
//! Each record is an immutable snapshot of named numeric fields, created
//! fresh per request and discarded after serialization. The values are
//! static placeholders to be replaced by database-backed computation; the
//! wire field names are the contract and must not change.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account equity snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct EquityKpi {
    /// Settled cash balance
    pub balance: f64,
    /// Unrealized P&L across open positions
    #[serde(rename = "unrealizedPnL")]
    pub unrealized_pnl: f64,
    /// Balance plus unrealized P&L
    pub total_equity: f64,
    /// Equity change over the reference period, in percent
    pub change_percent: f64,
    /// Equity change over the reference period, absolute
    pub change_amount: f64,
}

impl EquityKpi {
    pub fn snapshot() -> Self {
        Self {
            balance: 50000.00,
            unrealized_pnl: 2500.00,
            total_equity: 52500.00,
            change_percent: 5.26,
            change_amount: 2500.00,
        }
    }
}

/// Daily profit and loss snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DailyPnlKpi {
    pub realized: f64,
    pub unrealized: f64,
    pub total: f64,
    pub change_percent: f64,
}

impl DailyPnlKpi {
    pub fn snapshot() -> Self {
        Self {
            realized: 1200.00,
            unrealized: 800.00,
            total: 2000.00,
            change_percent: 4.17,
        }
    }
}

/// P&L over today, month-to-date, and year-to-date windows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PeriodPnlKpi {
    pub today: f64,
    pub today_change_percent: f64,
    pub mtd: f64,
    pub mtd_delta: f64,
    pub mtd_change_percent: f64,
    pub ytd: f64,
    pub ytd_delta: f64,
    pub ytd_change_percent: f64,
}

impl PeriodPnlKpi {
    pub fn snapshot() -> Self {
        Self {
            today: 2000.00,
            today_change_percent: 4.17,
            mtd: 15000.00,
            mtd_delta: 3000.00,
            mtd_change_percent: 25.00,
            ytd: 45000.00,
            ytd_delta: 12000.00,
            ytd_change_percent: 36.36,
        }
    }
}

/// Drawdown snapshot relative to peak equity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DrawdownKpi {
    /// Decline from peak equity to current equity
    pub current_drawdown: f64,
    /// Largest peak-to-trough decline observed
    pub max_drawdown: f64,
    /// Current drawdown as a fraction of the maximum
    pub drawdown_ratio: f64,
    pub current_drawdown_percent: f64,
    pub max_drawdown_percent: f64,
    pub peak_equity: f64,
    pub current_equity: f64,
    /// How much of the maximum drawdown has been recovered, in percent
    pub recovery_percent: f64,
}

impl DrawdownKpi {
    pub fn snapshot() -> Self {
        Self {
            current_drawdown: 2000.00,
            max_drawdown: 5000.00,
            drawdown_ratio: 0.40,
            current_drawdown_percent: 3.81,
            max_drawdown_percent: 9.09,
            peak_equity: 55000.00,
            current_equity: 52500.00,
            recovery_percent: 60.00,
        }
    }
}

/// All four KPIs in one response, stamped with the generation time.
///
/// Transient aggregate, never stored. The timestamp is read once per call
/// so repeated calls return non-decreasing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllKpis {
    pub equity: EquityKpi,
    pub daily: DailyPnlKpi,
    pub period: PeriodPnlKpi,
    pub drawdown: DrawdownKpi,
    pub timestamp: DateTime<Utc>,
}

impl AllKpis {
    pub fn snapshot() -> Self {
        Self {
            equity: EquityKpi::snapshot(),
            daily: DailyPnlKpi::snapshot(),
            period: PeriodPnlKpi::snapshot(),
            drawdown: DrawdownKpi::snapshot(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn equity_snapshot_serializes_with_exact_field_names() {
        let value = serde_json::to_value(EquityKpi::snapshot()).unwrap();
        assert_eq!(
            value,
            json!({
                "balance": 50000.00,
                "unrealizedPnL": 2500.00,
                "totalEquity": 52500.00,
                "changePercent": 5.26,
                "changeAmount": 2500.00,
            })
        );
    }

    #[test]
    fn daily_snapshot_serializes_with_exact_field_names() {
        let value = serde_json::to_value(DailyPnlKpi::snapshot()).unwrap();
        assert_eq!(
            value,
            json!({
                "realized": 1200.00,
                "unrealized": 800.00,
                "total": 2000.00,
                "changePercent": 4.17,
            })
        );
    }

    #[test]
    fn period_snapshot_serializes_with_exact_field_names() {
        let value = serde_json::to_value(PeriodPnlKpi::snapshot()).unwrap();
        assert_eq!(
            value,
            json!({
                "today": 2000.00,
                "todayChangePercent": 4.17,
                "mtd": 15000.00,
                "mtdDelta": 3000.00,
                "mtdChangePercent": 25.00,
                "ytd": 45000.00,
                "ytdDelta": 12000.00,
                "ytdChangePercent": 36.36,
            })
        );
    }

    #[test]
    fn drawdown_snapshot_serializes_with_exact_field_names() {
        let value = serde_json::to_value(DrawdownKpi::snapshot()).unwrap();
        assert_eq!(
            value,
            json!({
                "currentDrawdown": 2000.00,
                "maxDrawdown": 5000.00,
                "drawdownRatio": 0.40,
                "currentDrawdownPercent": 3.81,
                "maxDrawdownPercent": 9.09,
                "peakEquity": 55000.00,
                "currentEquity": 52500.00,
                "recoveryPercent": 60.00,
            })
        );
    }

    #[test]
    fn all_snapshot_composes_the_single_kpis() {
        let all = AllKpis::snapshot();
        assert_eq!(all.equity, EquityKpi::snapshot());
        assert_eq!(all.daily, DailyPnlKpi::snapshot());
        assert_eq!(all.period, PeriodPnlKpi::snapshot());
        assert_eq!(all.drawdown, DrawdownKpi::snapshot());
    }

    #[test]
    fn all_snapshot_timestamps_are_non_decreasing() {
        let first = AllKpis::snapshot();
        let second = AllKpis::snapshot();
        assert!(second.timestamp >= first.timestamp);
    }

    #[test]
    fn all_snapshot_timestamp_is_fresh() {
        let before = Utc::now();
        let all = AllKpis::snapshot();
        let after = Utc::now();
        assert!(all.timestamp >= before && all.timestamp <= after);
    }

    #[test]
    fn records_reject_unknown_fields() {
        let extra = json!({
            "realized": 1.0,
            "unrealized": 2.0,
            "total": 3.0,
            "changePercent": 4.0,
            "bogus": 5.0,
        });
        assert!(serde_json::from_value::<DailyPnlKpi>(extra).is_err());
    }
}
