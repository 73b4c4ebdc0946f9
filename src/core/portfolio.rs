//! Portfolio datasets: direct investments and fund holdings.
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Asset class tag carried by pooled vehicles.
pub const FUND_ASSET_CLASS: &str = "Fund";
pub const PUBLIC_EQUITY_ASSET_CLASS: &str = "Public Equity";
pub const PRIVATE_DIRECT_ASSET_CLASS: &str = "Private Direct";
pub const UNKNOWN_RISK_LEVEL: &str = "Unknown";

/// A single directly held investment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Investment {
    pub name: String,
    pub amount: f64,
    pub asset_class: String,
    pub risk_level: String,
    #[serde(default)]
    pub growth_rate_pct: f64,
}

impl Investment {
    pub fn is_fund(&self) -> bool {
        self.asset_class == FUND_ASSET_CLASS
    }
}

/// Fraction of a fund's capital allocated to one underlying investment.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct FundHolding {
    pub fund_name: String,
    pub held_investment_name: String,
    pub holding_fraction: f64,
}

/// Both source datasets, built once at startup and only read afterwards.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Portfolio {
    pub investments: Vec<Investment>,
    #[serde(default)]
    pub fund_holdings: Vec<FundHolding>,
}

impl Portfolio {
    pub fn new(investments: Vec<Investment>, fund_holdings: Vec<FundHolding>) -> Self {
        Self {
            investments,
            fund_holdings,
        }
    }

    pub fn find(&self, name: &str) -> Option<&Investment> {
        self.investments.iter().find(|i| i.name == name)
    }

    /// Investments tagged with `asset_class`, in dataset order.
    pub fn by_asset_class<'a>(&'a self, asset_class: &'a str) -> impl Iterator<Item = &'a Investment> {
        self.investments
            .iter()
            .filter(move |i| i.asset_class == asset_class)
    }

    /// Checks the datasets for suspicious input.
    ///
    /// Nothing here is fatal: the aggregation accepts all of these cases, so
    /// callers are expected to log the returned messages and carry on.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        let mut seen = HashSet::new();
        for investment in &self.investments {
            if !seen.insert(investment.name.as_str()) {
                warnings.push(format!("Duplicate investment name: {}", investment.name));
            }
            if investment.amount < 0.0 {
                warnings.push(format!(
                    "Negative amount {} for investment {}",
                    investment.amount, investment.name
                ));
            }
        }

        let mut allocated: HashMap<&str, f64> = HashMap::new();
        for holding in &self.fund_holdings {
            if !(0.0..=1.0).contains(&holding.holding_fraction) {
                warnings.push(format!(
                    "Holding fraction {} of {} in {} is outside [0, 1]",
                    holding.holding_fraction, holding.fund_name, holding.held_investment_name
                ));
            }
            match self.find(&holding.fund_name) {
                Some(fund) if fund.is_fund() => {}
                Some(other) => warnings.push(format!(
                    "Fund holding refers to {} which has asset class {}",
                    other.name, other.asset_class
                )),
                None => warnings.push(format!(
                    "Fund holding refers to unknown fund {}",
                    holding.fund_name
                )),
            }
            *allocated.entry(holding.fund_name.as_str()).or_default() +=
                holding.holding_fraction;
        }

        let mut over: Vec<_> = allocated
            .into_iter()
            .filter(|(_, total)| *total > 1.0 + f64::EPSILON)
            .collect();
        over.sort_by(|(a, _), (b, _)| a.cmp(b));
        for (fund, total) in over {
            warnings.push(format!("Fund {fund} allocates {total:.2} of its capital"));
        }

        warnings
    }
}
