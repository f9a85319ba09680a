//! Price display strings and their structured form.
//!
//! Catalog data stores prices the way a pricing page shows them (`"$0"`,
//! `"$20/month"`, `"Custom"`, `"定制"`). Everything that needs a number goes
//! through [`parse_price`]; nothing else inspects the raw string.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// First numeric token, allowing thousands separators and a decimal part.
static AMOUNT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d[\d,]*(?:\.\d+)?").expect("valid regex"));

/// One row of a tool's pricing table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub plan: String,
    pub price: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl PricingPlan {
    pub fn parsed_price(&self) -> Price {
        parse_price(&self.price)
    }

    /// A plan counts as free when it says so by name or costs nothing.
    pub fn is_free(&self) -> bool {
        self.plan.to_lowercase().contains("free") || self.parsed_price().amount == Some(0.0)
    }
}

/// Structured price derived from a display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Price {
    /// `None` when the display string carries no number ("Custom", "Contact us").
    pub amount: Option<f64>,
    /// ISO currency code inferred from a leading symbol, when there is one.
    pub currency: Option<&'static str>,
    pub display: String,
}

impl Price {
    /// Sort key where unknown amounts compare as infinitely expensive.
    pub fn sort_amount(&self) -> f64 {
        self.amount.unwrap_or(f64::INFINITY)
    }

    pub fn cmp_amount(&self, other: &Price) -> Ordering {
        self.sort_amount().total_cmp(&other.sort_amount())
    }
}

/// Convert a price display string into a [`Price`].
///
/// # Examples
///
/// ```
/// use rect_core::pricing::parse_price;
///
/// assert_eq!(parse_price("$20/month").amount, Some(20.0));
/// assert_eq!(parse_price("$1,200/year").amount, Some(1200.0));
/// assert_eq!(parse_price("Custom").amount, None);
/// ```
pub fn parse_price(display: &str) -> Price {
    let amount = AMOUNT_RE
        .find(display)
        .and_then(|m| m.as_str().replace(',', "").parse::<f64>().ok());

    Price {
        amount,
        currency: detect_currency(display),
        display: display.to_string(),
    }
}

fn detect_currency(display: &str) -> Option<&'static str> {
    display.trim_start().chars().find_map(|c| match c {
        '$' => Some("USD"),
        '€' => Some("EUR"),
        '£' => Some("GBP"),
        '¥' | '￥' => Some("CNY"),
        _ => None,
    })
}

/// The cheapest plan with a positive, parseable price.
///
/// Free plans and plans without a number ("Custom", "定制") never qualify.
pub fn lowest_paid_plan(plans: &[PricingPlan]) -> Option<&PricingPlan> {
    plans
        .iter()
        .map(|p| (p, p.parsed_price()))
        .filter(|(_, price)| price.amount.is_some_and(|a| a > 0.0))
        .min_by(|(_, a), (_, b)| a.cmp_amount(b))
        .map(|(plan, _)| plan)
}

/// The first plan that is free, if any.
pub fn free_plan(plans: &[PricingPlan]) -> Option<&PricingPlan> {
    plans.iter().find(|p| p.is_free())
}
