use dioxus::prelude::*;
use shared_types::{Invoice, InvoiceStatus};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, PageActions, PageHeader,
    PageTitle, TabContent, TabList, TabTrigger, Tabs,
};

use crate::components::RoleToggle;
use crate::fixtures;
use crate::guard::RoleRedirect;

/// Chart viewport for the sales line, in viewBox units.
const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 200.0;

/// Maps a value series onto evenly spaced `x,y` points for an SVG polyline.
/// The y axis is inverted so larger values sit higher.
fn polyline_points(values: &[i64], width: f64, height: f64) -> String {
    let max = values.iter().copied().max().unwrap_or(0).max(1) as f64;
    let step = if values.len() > 1 {
        width / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 * step;
            let y = height - (*value as f64 / max) * height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// User dashboard: a monthly sales line chart, recently paid invoices, and
/// an invoice summary tab.
#[component]
pub fn User() -> Element {
    let invoices = fixtures::invoices();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./user.css") }
        RoleRedirect {}

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "User Dashboard" }
                PageActions { RoleToggle {} }
            }

            Tabs {
                horizontal: true,
                default_value: "dashboard",
                TabList {
                    TabTrigger { value: "dashboard", index: 0usize, "Dashboard" }
                    TabTrigger { value: "invoices", index: 1usize, "Invoices" }
                }

                TabContent { value: "dashboard", index: 0usize,
                    OverviewTab { invoices: invoices.clone() }
                }

                TabContent { value: "invoices", index: 1usize,
                    InvoicesTab { invoices: invoices.clone() }
                }
            }
        }
    }
}

#[component]
fn OverviewTab(invoices: Vec<Invoice>) -> Element {
    let metrics = fixtures::monthly_metrics();
    let sales: Vec<i64> = metrics.iter().map(|m| m.sales).collect();
    let points = polyline_points(&sales, CHART_WIDTH, CHART_HEIGHT);

    let recently_paid: Vec<Invoice> = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Paid)
        .take(3)
        .cloned()
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Monthly Sales" }
            }
            CardContent {
                svg {
                    class: "line-chart",
                    view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                    preserve_aspect_ratio: "none",
                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: "var(--accent)",
                        stroke_width: "3",
                    }
                }
                div { class: "chart-months",
                    for metric in metrics.iter() {
                        span { "{metric.month}" }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Recently Paid Invoices" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Invoice ID" }
                        DataTableColumn { "Date" }
                        DataTableColumn { "Amount" }
                    }
                    DataTableBody {
                        for inv in recently_paid.iter() {
                            DataTableRow {
                                DataTableCell { "{inv.id}" }
                                DataTableCell { "{inv.issued}" }
                                DataTableCell { "${inv.amount}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InvoicesTab(invoices: Vec<Invoice>) -> Element {
    let paid = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Paid)
        .count();
    let due = invoices
        .iter()
        .filter(|inv| inv.status == InvoiceStatus::Due)
        .count();
    let total = invoices.len();

    rsx! {
        div { class: "summary-grid",
            SummaryCard { label: "Paid Invoices", value: paid }
            SummaryCard { label: "Due Invoices", value: due }
            SummaryCard { label: "Total Invoices", value: total }
        }

        Card {
            CardHeader {
                CardTitle { "All Invoices" }
            }
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Invoice ID" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Amount" }
                    }
                    DataTableBody {
                        for inv in invoices.iter() {
                            DataTableRow {
                                DataTableCell { "{inv.id}" }
                                DataTableCell {
                                    StatusBadge { status: inv.status }
                                }
                                DataTableCell { "${inv.amount}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(label: String, value: usize) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "summary-card",
                    span { class: "summary-value", "{value}" }
                    span { class: "summary-label", "{label}" }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: InvoiceStatus) -> Element {
    let variant = match status {
        InvoiceStatus::Paid => BadgeVariant::Success,
        InvoiceStatus::Due => BadgeVariant::Warning,
    };
    let label = status.as_str();

    rsx! {
        Badge { variant: variant, "{label}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn polyline_spans_the_viewport() {
        let points = polyline_points(&[1_000, 2_000], 600.0, 200.0);
        // First point at the left edge, last at the right; the larger value
        // sits at the top (y = 0).
        assert_eq!(points, "0.0,100.0 600.0,0.0");
    }

    #[test]
    fn polyline_handles_single_point() {
        let points = polyline_points(&[500], 600.0, 200.0);
        assert_eq!(points, "0.0,0.0");
    }

    #[test]
    fn polyline_handles_empty_series() {
        assert_eq!(polyline_points(&[], 600.0, 200.0), "");
    }
}
