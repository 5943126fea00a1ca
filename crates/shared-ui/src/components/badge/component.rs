use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    /// Positive state, e.g. a paid invoice.
    Success,
    /// Attention state, e.g. a due invoice.
    Warning,
}

impl BadgeVariant {
    fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Success => "success",
            BadgeVariant::Warning => "warning",
        }
    }
}

/// Inline label for statuses and counts.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "badge", None, false),
        Attribute::new("data-style", variant.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..merged,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_variant_as_data_attribute() {
        let html = dioxus_ssr::render_element(rsx! {
            Badge { variant: BadgeVariant::Warning, "Due" }
        });
        assert!(html.contains("data-style=\"warning\""), "html: {html}");
        assert!(html.contains("Due"));
    }

    #[test]
    fn default_variant_is_primary() {
        assert_eq!(BadgeVariant::default().class(), "primary");
    }
}
