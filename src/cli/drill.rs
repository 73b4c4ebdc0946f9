use super::ui;
use crate::core::drilldown::{DrillInput, drilldown};
use crate::core::portfolio::Portfolio;
use anyhow::Result;
use tracing::warn;

/// Prints the breakdown shown after clicking `asset_class` on the dashboard.
pub fn run(portfolio: &Portfolio, asset_class: &str, currency: &str) -> Result<()> {
    let output = drilldown(portfolio, &DrillInput::slice(asset_class));
    if output.figure.is_empty() {
        warn!("No investments with asset class {asset_class}");
    }

    println!("\n{}", output.figure.display_as_table(currency));
    ui::print_separator();
    Ok(())
}
