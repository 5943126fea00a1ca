use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBanknote, LdDollarSign, LdTrendingUp};
use dioxus_free_icons::Icon;
use shared_types::{ManagedUser, MonthlyMetric};
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Input, PageActions, PageHeader,
    PageTitle, TabContent, TabList, TabTrigger, Tabs,
};

use crate::components::RoleToggle;
use crate::fixtures;
use crate::guard::RoleRedirect;

/// Maximum bar height as a percentage of the chart area.
const BAR_MAX_PCT: f64 = 100.0;

/// Height of a bar relative to the tallest value in the series.
fn bar_height_pct(value: i64, max: i64) -> f64 {
    if max <= 0 {
        return 0.0;
    }
    (value as f64 / max as f64) * BAR_MAX_PCT
}

/// Admin dashboard: headline sales metrics, a monthly chart, and a small
/// user-management table backed by local state.
#[component]
pub fn Admin() -> Element {
    let users = use_signal(fixtures::seed_users);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./admin.css") }
        RoleRedirect {}

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "Admin Dashboard" }
                PageActions { RoleToggle {} }
            }

            Tabs {
                horizontal: true,
                default_value: "dashboard",
                TabList {
                    TabTrigger { value: "dashboard", index: 0usize, "Dashboard" }
                    TabTrigger { value: "users", index: 1usize, "User Management" }
                }

                TabContent { value: "dashboard", index: 0usize,
                    OverviewTab {}
                }

                TabContent { value: "users", index: 1usize,
                    UserManagementTab { users: users }
                }
            }
        }
    }
}

#[component]
fn OverviewTab() -> Element {
    let summary = fixtures::sales_summary();

    rsx! {
        div { class: "stats-grid",
            StatCard {
                title: "Total Sales",
                value: format!("${}", summary.total_sales),
                icon: rsx! { Icon::<LdDollarSign> { icon: LdDollarSign, width: 24, height: 24 } },
            }
            StatCard {
                title: "Total Profit",
                value: format!("${}", summary.total_profit),
                icon: rsx! { Icon::<LdBanknote> { icon: LdBanknote, width: 24, height: 24 } },
            }
            StatCard {
                title: "Profit Growth",
                value: format!("{}%", summary.profit_growth),
                icon: rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 24, height: 24 } },
            }
        }

        SalesChart { metrics: fixtures::monthly_metrics() }
    }
}

/// A single stat card with an icon and a headline value.
#[component]
fn StatCard(title: String, value: String, icon: Element) -> Element {
    rsx! {
        Card {
            CardContent {
                div { class: "stat-card",
                    div { class: "stat-icon", {icon} }
                    div { class: "stat-body",
                        span { class: "stat-title", "{title}" }
                        span { class: "stat-value", "{value}" }
                    }
                }
            }
        }
    }
}

/// Monthly sales vs profit rendered as a grouped bar chart.
#[component]
fn SalesChart(metrics: Vec<MonthlyMetric>) -> Element {
    let max = metrics
        .iter()
        .flat_map(|m| [m.sales, m.profit])
        .max()
        .unwrap_or(0);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Sales & Profit" }
            }
            CardContent {
                div { class: "bar-chart",
                    for metric in metrics.iter() {
                        div { class: "bar-group",
                            div { class: "bar-pair",
                                Bar {
                                    class: "bar bar-sales",
                                    pct: bar_height_pct(metric.sales, max),
                                    label: format!("Sales: ${}", metric.sales),
                                }
                                Bar {
                                    class: "bar bar-profit",
                                    pct: bar_height_pct(metric.profit, max),
                                    label: format!("Profit: ${}", metric.profit),
                                }
                            }
                            span { class: "bar-label", "{metric.month}" }
                        }
                    }
                }
                div { class: "chart-legend",
                    span { class: "legend-swatch legend-sales" }
                    span { "Sales" }
                    span { class: "legend-swatch legend-profit" }
                    span { "Profit" }
                }
            }
        }
    }
}

#[component]
fn Bar(class: String, pct: f64, label: String) -> Element {
    rsx! {
        div {
            class: "{class}",
            style: "height: {pct}%",
            title: "{label}",
        }
    }
}

#[component]
fn UserManagementTab(users: Signal<Vec<ManagedUser>>) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);

    let mut add_user = move || {
        let next_id = users.read().len() as i64 + 1;
        users.write().push(ManagedUser {
            id: next_id,
            name: name(),
            email: email(),
        });
        name.set(String::new());
        email.set(String::new());
    };

    rsx! {
        Card {
            CardHeader {
                CardTitle { "User Data" }
            }
            CardContent {
                div { class: "add-user-row",
                    Input {
                        placeholder: "Name",
                        value: name(),
                        on_input: move |e: FormEvent| name.set(e.value()),
                    }
                    Input {
                        input_type: "email",
                        placeholder: "Email",
                        value: email(),
                        on_input: move |e: FormEvent| email.set(e.value()),
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| add_user(),
                        "Add User"
                    }
                }

                DataTable {
                    DataTableHeader {
                        DataTableColumn { "ID" }
                        DataTableColumn { "Name" }
                        DataTableColumn { "Email" }
                    }
                    DataTableBody {
                        for user in users.read().iter() {
                            DataTableRow {
                                DataTableCell { "{user.id}" }
                                DataTableCell { "{user.name}" }
                                DataTableCell { "{user.email}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_heights_scale_against_series_max() {
        assert_eq!(bar_height_pct(6_000, 6_000), 100.0);
        assert_eq!(bar_height_pct(3_000, 6_000), 50.0);
        assert_eq!(bar_height_pct(0, 6_000), 0.0);
    }

    #[test]
    fn empty_series_renders_flat_bars() {
        assert_eq!(bar_height_pct(4_000, 0), 0.0);
    }
}
