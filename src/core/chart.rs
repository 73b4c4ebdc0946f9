//! Pie chart specifications rendered by the dashboard.
use crate::core::exposure::compute_effective_exposure;
use crate::core::portfolio::{FundHolding, Investment};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Donut hole ratio shared by every chart.
pub const DONUT_HOLE: f64 = 0.4;
pub const CHART_TEMPLATE: &str = "presentation";

pub const ASSET_CLASS_TITLE: &str = "Investment Distribution by Asset Class";
pub const UPDATED_HOLDINGS_TITLE: &str =
    "Updated Investment Distribution (Including Fund Holdings)";

/// Qualitative palette for slices colored by category.
const PALETTE: [&str; 10] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3", "#FF6692", "#B6E880",
    "#FF97FF", "#FECB52",
];

/// Investment field used to color breakdown slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorField {
    RiskLevel,
}

impl ColorField {
    pub fn label(&self) -> &'static str {
        match self {
            ColorField::RiskLevel => "Risk Level",
        }
    }

    fn value<'a>(&self, investment: &'a Investment) -> &'a str {
        match self {
            ColorField::RiskLevel => &investment.risk_level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Per-slice color, present only when slices are colored by a field.
    pub colors: Option<Vec<String>>,
    pub color_field: Option<String>,
    /// Per-slice value of `color_field`.
    pub categories: Option<Vec<String>>,
    pub hole: f64,
    pub show_legend: bool,
    pub template: String,
}

impl PieChart {
    fn donut(title: &str, labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            title: title.to_string(),
            labels,
            values,
            colors: None,
            color_field: None,
            categories: None,
            hole: DONUT_HOLE,
            show_legend: true,
            template: CHART_TEMPLATE.to_string(),
        }
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Label and value pairs in slice order.
    pub fn slices(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Sums investment amounts per asset class, ordered by asset class name.
pub fn group_by_asset_class(investments: &[Investment]) -> BTreeMap<String, f64> {
    let mut groups = BTreeMap::new();
    for investment in investments {
        *groups.entry(investment.asset_class.clone()).or_insert(0.0) += investment.amount;
    }
    groups
}

pub fn asset_class_chart(investments: &[Investment]) -> PieChart {
    let (labels, values) = group_by_asset_class(investments).into_iter().unzip();
    PieChart::donut(ASSET_CLASS_TITLE, labels, values)
}

/// One slice per row, colored by `color_field`.
pub fn breakdown_chart(rows: &[Investment], color_field: ColorField, title: &str) -> PieChart {
    let labels = rows.iter().map(|r| r.name.clone()).collect();
    let values = rows.iter().map(|r| r.amount).collect();
    let mut chart = PieChart::donut(title, labels, values);

    let mut assigned: HashMap<&str, &str> = HashMap::new();
    let colors = rows
        .iter()
        .map(|r| {
            let category = color_field.value(r);
            let next = PALETTE[assigned.len() % PALETTE.len()];
            assigned.entry(category).or_insert(next).to_string()
        })
        .collect();

    chart.colors = Some(colors);
    chart.categories = Some(rows.iter().map(|r| color_field.value(r).to_string()).collect());
    chart.color_field = Some(color_field.label().to_string());
    chart
}

pub fn updated_holdings_chart(
    investments: &[Investment],
    fund_holdings: &[FundHolding],
) -> PieChart {
    let exposure = compute_effective_exposure(investments, fund_holdings);
    let (labels, values) = exposure.into_iter().map(|i| (i.name, i.amount)).unzip();
    PieChart::donut(UPDATED_HOLDINGS_TITLE, labels, values)
}
