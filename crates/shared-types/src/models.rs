use serde::{Deserialize, Serialize};

/// Aggregate metrics shown at the top of the admin dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SalesSummary {
    pub total_sales: i64,
    pub total_profit: i64,
    /// Growth as a whole percentage, not a fraction.
    pub profit_growth: i64,
}

/// A row in the admin user-management table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManagedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Payment state of an invoice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum InvoiceStatus {
    Paid,
    Due,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Due => "Due",
        }
    }
}

/// An invoice row on the user dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invoice {
    pub id: String,
    /// Issue date as displayed, e.g. `2024-10-01`.
    pub issued: String,
    pub status: InvoiceStatus,
    /// Whole-dollar amount.
    pub amount: i64,
}

/// One month of sales and profit for the dashboard charts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthlyMetric {
    pub month: String,
    pub sales: i64,
    pub profit: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn invoice_status_labels() {
        assert_eq!(InvoiceStatus::Paid.as_str(), "Paid");
        assert_eq!(InvoiceStatus::Due.as_str(), "Due");
    }

    #[test]
    fn invoice_roundtrip_through_json() {
        let invoice = Invoice {
            id: "INV001".to_string(),
            issued: "2024-10-01".to_string(),
            status: InvoiceStatus::Paid,
            amount: 500,
        };
        let json = serde_json::to_string(&invoice).unwrap();
        let parsed: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(invoice, parsed);
    }
}
