//! Look-through aggregation of fund holdings onto direct investments.
use crate::core::portfolio::{
    FundHolding, Investment, PRIVATE_DIRECT_ASSET_CLASS, PUBLIC_EQUITY_ASSET_CLASS,
    UNKNOWN_RISK_LEVEL,
};
use std::collections::HashMap;
use tracing::debug;

/// Merges fund-held positions into the direct investments.
///
/// A holding whose `held_investment_name` matches a direct investment adds
/// `held.amount * holding_fraction` to that row. Note this uses the held
/// investment's own amount, not the fund's. A holding with no match becomes a
/// synthetic row valued at `fund.amount * holding_fraction`; repeated
/// unmatched names merge into the first synthetic row.
///
/// Rows keep the order of `investments`, followed by synthetic rows in the
/// order of `fund_holdings`. Inputs are never modified.
pub fn compute_effective_exposure(
    investments: &[Investment],
    fund_holdings: &[FundHolding],
) -> Vec<Investment> {
    // First row wins for duplicated names, matching the row that is updated.
    let mut direct: HashMap<&str, &Investment> = HashMap::new();
    for investment in investments {
        direct.entry(investment.name.as_str()).or_insert(investment);
    }

    let mut exposure = investments.to_vec();
    let mut index: HashMap<String, usize> = HashMap::new();
    for (pos, investment) in exposure.iter().enumerate() {
        index.entry(investment.name.clone()).or_insert(pos);
    }

    for holding in fund_holdings {
        let name = holding.held_investment_name.as_str();
        let amount = match direct.get(name) {
            Some(held) => held.amount * holding.holding_fraction,
            None => {
                let fund_amount = direct.get(holding.fund_name.as_str()).map_or(0.0, |f| f.amount);
                fund_amount * holding.holding_fraction
            }
        };

        match index.get(name) {
            Some(&pos) => {
                debug!("Adding {amount} look-through exposure to {name}");
                exposure[pos].amount += amount;
            }
            None => {
                debug!("Adding synthetic investment {name} with {amount} from {}", holding.fund_name);
                index.insert(name.to_string(), exposure.len());
                exposure.push(synthetic_investment(name, amount));
            }
        }
    }

    exposure
}

fn synthetic_investment(name: &str, amount: f64) -> Investment {
    let asset_class = if name.contains(PUBLIC_EQUITY_ASSET_CLASS) {
        PUBLIC_EQUITY_ASSET_CLASS
    } else {
        PRIVATE_DIRECT_ASSET_CLASS
    };
    Investment {
        name: name.to_string(),
        amount,
        asset_class: asset_class.to_string(),
        risk_level: UNKNOWN_RISK_LEVEL.to_string(),
        growth_rate_pct: 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::portfolio::fixtures::sample_portfolio;

    fn amount_of(rows: &[Investment], name: &str) -> f64 {
        rows.iter()
            .find(|r| r.name == name)
            .map(|r| r.amount)
            .unwrap_or_else(|| panic!("{name} missing from exposure"))
    }

    #[test]
    fn test_sample_exposure() {
        let portfolio = sample_portfolio();
        let exposure =
            compute_effective_exposure(&portfolio.investments, &portfolio.fund_holdings);

        assert_eq!(exposure.len(), 8);
        assert_eq!(amount_of(&exposure, "AAPL (Public)"), 16000.0);
        assert_eq!(amount_of(&exposure, "TSLA (Public)"), 18000.0);
        assert_eq!(amount_of(&exposure, "IKEA (Private)"), 10400.0);
        assert_eq!(amount_of(&exposure, "Huawei (Private)"), 9800.0);
        assert_eq!(amount_of(&exposure, "NVDA (Public)"), 5000.0);
        assert_eq!(amount_of(&exposure, "Blackstone growth fund"), 15000.0);
    }

    #[test]
    fn test_unmatched_holding_becomes_synthetic_row() {
        let portfolio = sample_portfolio();
        let exposure =
            compute_effective_exposure(&portfolio.investments, &portfolio.fund_holdings);

        let synthetic = exposure.last().unwrap();
        assert_eq!(synthetic.name, "Public Equity 4");
        assert_eq!(synthetic.amount, 18000.0 * 0.75);
        assert_eq!(synthetic.asset_class, "Public Equity");
        assert_eq!(synthetic.risk_level, "Unknown");
        assert_eq!(synthetic.growth_rate_pct, 0.0);
    }

    #[test]
    fn test_order_and_inputs_preserved() {
        let portfolio = sample_portfolio();
        let before = portfolio.clone();
        let exposure =
            compute_effective_exposure(&portfolio.investments, &portfolio.fund_holdings);

        let names: Vec<_> = exposure.iter().map(|r| r.name.as_str()).collect();
        let mut expected: Vec<_> = portfolio.investments.iter().map(|r| r.name.as_str()).collect();
        expected.push("Public Equity 4");
        assert_eq!(names, expected);
        assert_eq!(portfolio, before);
    }

    #[test]
    fn test_idempotent() {
        let portfolio = sample_portfolio();
        let first = compute_effective_exposure(&portfolio.investments, &portfolio.fund_holdings);
        let second = compute_effective_exposure(&portfolio.investments, &portfolio.fund_holdings);
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_unmatched_name_merges() {
        let mut portfolio = sample_portfolio();
        portfolio.fund_holdings.push(FundHolding {
            fund_name: "Blackstone growth fund".to_string(),
            held_investment_name: "Public Equity 4".to_string(),
            holding_fraction: 0.1,
        });
        portfolio.fund_holdings.push(FundHolding {
            fund_name: "Blackstone growth fund".to_string(),
            held_investment_name: "Stripe".to_string(),
            holding_fraction: 0.2,
        });

        let exposure =
            compute_effective_exposure(&portfolio.investments, &portfolio.fund_holdings);
        assert_eq!(exposure.len(), 9);
        assert_eq!(amount_of(&exposure, "Public Equity 4"), 13500.0 + 1500.0);

        let stripe = exposure.last().unwrap();
        assert_eq!(stripe.name, "Stripe");
        assert_eq!(stripe.amount, 3000.0);
        assert_eq!(stripe.asset_class, "Private Direct");
    }

    #[test]
    fn test_duplicate_direct_names_use_first_row() {
        let mut first = sample_portfolio().investments[0].clone();
        first.name = "A".to_string();
        first.amount = 100.0;
        let mut second = first.clone();
        second.amount = 1000.0;
        let holdings = vec![FundHolding {
            fund_name: "Blackstone growth fund".to_string(),
            held_investment_name: "A".to_string(),
            holding_fraction: 0.5,
        }];

        let exposure = compute_effective_exposure(&[first, second], &holdings);
        let amounts: Vec<_> = exposure.iter().map(|r| r.amount).collect();
        assert_eq!(amounts, vec![150.0, 1000.0]);
    }

    #[test]
    fn test_unknown_fund_contributes_nothing() {
        let holdings = vec![FundHolding {
            fund_name: "Ghost fund".to_string(),
            held_investment_name: "Orphan".to_string(),
            holding_fraction: 0.5,
        }];
        let exposure = compute_effective_exposure(&[], &holdings);
        assert_eq!(exposure.len(), 1);
        assert_eq!(exposure[0].amount, 0.0);
    }
}
