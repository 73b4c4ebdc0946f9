//! Drill-down state transitions for the asset class chart.
//!
//! The controller keeps no state between calls. The client holds the back
//! control's click counter and passes it back with every interaction.
use crate::core::chart::{ColorField, PieChart, asset_class_chart, breakdown_chart};
use crate::core::portfolio::{FUND_ASSET_CLASS, Investment, Portfolio};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

pub const FUND_BREAKDOWN_TITLE: &str = "Fund Breakdown (Including Direct Holdings)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrillState {
    Top,
    Drill,
}

/// A clicked slice as reported by the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickPoint {
    pub label: String,
}

/// Chart click payload, `{points: [{label}]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClickData {
    #[serde(default)]
    pub points: Vec<ClickPoint>,
}

impl ClickData {
    pub fn for_label(label: &str) -> Self {
        Self {
            points: vec![ClickPoint {
                label: label.to_string(),
            }],
        }
    }

    fn label(&self) -> Option<&str> {
        self.points.first().map(|p| p.label.as_str())
    }
}

/// Everything the client sends with one interaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrillInput {
    #[serde(default)]
    pub click_data: Option<ClickData>,
    #[serde(default)]
    pub back_clicks: Option<u32>,
}

impl DrillInput {
    pub fn slice(label: &str) -> Self {
        Self {
            click_data: Some(ClickData::for_label(label)),
            back_clicks: None,
        }
    }

    pub fn back(clicks: u32) -> Self {
        Self {
            click_data: None,
            back_clicks: Some(clicks),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrillOutput {
    pub state: DrillState,
    pub figure: PieChart,
    pub back_visible: bool,
    pub back_clicks: Option<u32>,
}

impl DrillOutput {
    fn top(investments: &[Investment]) -> Self {
        Self {
            state: DrillState::Top,
            figure: asset_class_chart(investments),
            back_visible: false,
            back_clicks: Some(0),
        }
    }
}

/// Decides which chart to show after an interaction.
///
/// A back click takes priority over a slice click and resets the counter. A
/// slice click passes the counter through unchanged. Labels that match no
/// asset class yield an empty breakdown.
pub fn drilldown(portfolio: &Portfolio, input: &DrillInput) -> DrillOutput {
    if input.back_clicks.is_some_and(|n| n > 0) {
        debug!("Back clicked, returning to asset class view");
        return DrillOutput::top(&portfolio.investments);
    }

    let Some(asset_class) = input.click_data.as_ref().and_then(ClickData::label) else {
        return DrillOutput::top(&portfolio.investments);
    };

    debug!("Drilling into {asset_class}");
    let rows: Vec<Investment> = portfolio.by_asset_class(asset_class).cloned().collect();
    let figure = if asset_class == FUND_ASSET_CLASS {
        breakdown_chart(&sum_by_name(rows), ColorField::RiskLevel, FUND_BREAKDOWN_TITLE)
    } else {
        breakdown_chart(
            &rows,
            ColorField::RiskLevel,
            &format!("{asset_class} Breakdown"),
        )
    };

    DrillOutput {
        state: DrillState::Drill,
        figure,
        back_visible: true,
        back_clicks: input.back_clicks,
    }
}

/// Collapses rows sharing a name into one, ordered by name.
///
/// The first row seen for a name supplies the non-amount fields.
fn sum_by_name(rows: Vec<Investment>) -> Vec<Investment> {
    let mut merged: BTreeMap<String, Investment> = BTreeMap::new();
    for row in rows {
        match merged.get_mut(&row.name) {
            Some(existing) => existing.amount += row.amount,
            None => {
                merged.insert(row.name.clone(), row);
            }
        }
    }
    merged.into_values().collect()
}
