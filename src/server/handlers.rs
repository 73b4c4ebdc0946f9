use super::AppState;
use crate::core::chart::{PieChart, asset_class_chart, updated_holdings_chart};
use crate::core::drilldown::{self, DrillInput, DrillOutput};
use axum::{Json, extract::State, response::Html};
use serde::Serialize;

const INDEX_HTML: &str = include_str!("index.html");

pub(super) async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub(super) async fn healthz() -> &'static str {
    "ok"
}

#[derive(Debug, Serialize)]
pub(super) struct Charts {
    asset_class: PieChart,
    updated_holdings: PieChart,
}

/// Both charts of the initial page. The look-through chart is recomputed on
/// every request.
pub(super) async fn charts(State(state): State<AppState>) -> Json<Charts> {
    let portfolio = state.portfolio();
    Json(Charts {
        asset_class: asset_class_chart(&portfolio.investments),
        updated_holdings: updated_holdings_chart(
            &portfolio.investments,
            &portfolio.fund_holdings,
        ),
    })
}

pub(super) async fn drilldown(
    State(state): State<AppState>,
    Json(input): Json<DrillInput>,
) -> Json<DrillOutput> {
    Json(drilldown::drilldown(state.portfolio(), &input))
}
