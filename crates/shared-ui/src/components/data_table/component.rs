use dioxus::prelude::*;

/// Scrollable table wrapper with co-located styles.
#[component]
pub fn DataTable(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "data-table",
            table {
                {children}
            }
        }
    }
}

/// Table header section — wraps `th` elements in a `thead > tr`.
#[component]
pub fn DataTableHeader(children: Element) -> Element {
    rsx! {
        thead {
            tr { {children} }
        }
    }
}

/// Table body section.
#[component]
pub fn DataTableBody(children: Element) -> Element {
    rsx! {
        tbody { {children} }
    }
}

/// Column header cell.
#[component]
pub fn DataTableColumn(children: Element) -> Element {
    rsx! {
        th { {children} }
    }
}

/// Table row.
#[component]
pub fn DataTableRow(children: Element) -> Element {
    rsx! {
        tr { class: "data-table-row", {children} }
    }
}

/// Table data cell.
#[component]
pub fn DataTableCell(children: Element) -> Element {
    rsx! {
        td { {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_header_and_body_rows() {
        let html = dioxus_ssr::render_element(rsx! {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Invoice ID" }
                    DataTableColumn { "Amount" }
                }
                DataTableBody {
                    DataTableRow {
                        DataTableCell { "INV001" }
                        DataTableCell { "$500" }
                    }
                }
            }
        });
        assert!(html.contains("<thead>"), "html: {html}");
        assert!(html.contains("Invoice ID"));
        assert!(html.contains("INV001"));
    }
}
