/// Tier granted by a successful payment or a manual activation.
pub const PREMIUM_TIER: &str = "Premium";

/// Days of access granted when a paid checkout session is found.
pub const PAID_SESSION_ACCESS_DAYS: i64 = 365;

/// Checkout sessions scanned when the payer has no customer record yet.
pub const ORPHAN_SESSION_SCAN_LIMIT: u32 = 100;

/// Checkout sessions scanned for a known customer.
pub const CUSTOMER_SESSION_SCAN_LIMIT: u32 = 10;

/// Debts above this interest rate (percent per month) are flagged as high risk.
pub const HIGH_RISK_INTEREST_RATE: f64 = 5.0;
