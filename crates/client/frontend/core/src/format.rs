//! Display formatting shared by every frontend.
use leaderboard_core::Money;

/// Currency symbol prefixed to every amount.
pub const CURRENCY: char = '£';

/// Format an amount as `£<amount>` with two decimals.
pub fn format_money(money: Money) -> String {
    format!("{CURRENCY}{money}")
}
