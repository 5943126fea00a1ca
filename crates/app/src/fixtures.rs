//! Dummy business data backing the dashboards.
//!
//! Everything here is static demo content; nothing is fetched or persisted.

use shared_types::{Invoice, InvoiceStatus, ManagedUser, MonthlyMetric, SalesSummary};

/// Headline metrics for the admin dashboard.
pub fn sales_summary() -> SalesSummary {
    SalesSummary {
        total_sales: 50_000,
        total_profit: 15_000,
        profit_growth: 20,
    }
}

/// Initial rows for the admin user-management table.
pub fn seed_users() -> Vec<ManagedUser> {
    vec![
        ManagedUser {
            id: 1,
            name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
        },
        ManagedUser {
            id: 2,
            name: "Jane Smith".to_string(),
            email: "jane@example.com".to_string(),
        },
        ManagedUser {
            id: 3,
            name: "Bob Johnson".to_string(),
            email: "bob@example.com".to_string(),
        },
    ]
}

/// Six months of sales and profit for the dashboard charts.
pub fn monthly_metrics() -> Vec<MonthlyMetric> {
    let rows = [
        ("January", 4_000, 4_000),
        ("February", 2_000, 2_000),
        ("March", 3_000, 5_000),
        ("April", 5_000, 1_000),
        ("May", 6_000, 3_000),
        ("June", 3_000, 6_000),
    ];
    rows.iter()
        .map(|(month, sales, profit)| MonthlyMetric {
            month: month.to_string(),
            sales: *sales,
            profit: *profit,
        })
        .collect()
}

/// Invoices listed on the user dashboard.
pub fn invoices() -> Vec<Invoice> {
    let rows = [
        ("INV001", "2024-10-01", InvoiceStatus::Paid, 500),
        ("INV002", "2024-10-05", InvoiceStatus::Due, 750),
        ("INV003", "2024-10-10", InvoiceStatus::Paid, 400),
        ("INV004", "2024-10-14", InvoiceStatus::Due, 300),
        ("INV005", "2024-10-18", InvoiceStatus::Paid, 650),
    ];
    rows.iter()
        .map(|(id, issued, status, amount)| Invoice {
            id: id.to_string(),
            issued: issued.to_string(),
            status: *status,
            amount: *amount,
        })
        .collect()
}
