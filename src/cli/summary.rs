use super::ui;
use crate::core::chart::{PieChart, asset_class_chart, updated_holdings_chart};
use crate::core::portfolio::Portfolio;
use anyhow::Result;
use comfy_table::Cell;

impl PieChart {
    /// Renders the chart slices as a table with each slice's share of the total.
    pub fn display_as_table(&self, currency: &str) -> String {
        let mut table = ui::new_styled_table();
        let mut header = vec![
            ui::header_cell("Name"),
            ui::header_cell(&format!("Amount ({currency})")),
            ui::header_cell("Share (%)"),
        ];
        if let Some(field) = &self.color_field {
            header.insert(1, ui::header_cell(field));
        }
        table.set_header(header);

        let total = self.total();
        for (i, (label, value)) in self.slices().enumerate() {
            let mut row = vec![
                Cell::new(label),
                ui::amount_cell(value),
                ui::share_cell(value, total),
            ];
            if let Some(categories) = &self.categories {
                let category = categories.get(i).map_or("", String::as_str);
                row.insert(
                    1,
                    Cell::new(ui::style_text(category, ui::StyleType::Subtle)),
                );
            }
            table.add_row(row);
        }

        let mut output = format!("{}\n\n", ui::style_text(&self.title, ui::StyleType::Title));
        output.push_str(&table.to_string());
        output.push_str(&format!(
            "\n\nTotal ({}): {}",
            ui::style_text(currency, ui::StyleType::TotalLabel),
            ui::style_text(&format!("{total:.2}"), ui::StyleType::TotalValue)
        ));
        output
    }
}

pub fn run(portfolio: &Portfolio, currency: &str) -> Result<()> {
    let asset_classes = asset_class_chart(&portfolio.investments);
    let updated = updated_holdings_chart(&portfolio.investments, &portfolio.fund_holdings);

    println!("\n{}", asset_classes.display_as_table(currency));
    ui::print_separator();
    println!("\n{}", updated.display_as_table(currency));
    ui::print_separator();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::portfolio::fixtures::sample_portfolio;

    #[test]
    fn test_asset_class_table() {
        let portfolio = sample_portfolio();
        let output = asset_class_chart(&portfolio.investments).display_as_table("USD");

        assert!(output.contains("Investment Distribution by Asset Class"));
        assert!(output.contains("Private Direct"));
        assert!(output.contains("33000.00"));
        assert!(output.contains("44.00%"));
        assert!(output.contains("75000.00"));
        assert!(!output.contains("Risk Level"));
    }

    #[test]
    fn test_run_summary() {
        assert!(run(&sample_portfolio(), "USD").is_ok());
    }
}
