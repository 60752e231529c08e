//! Order Log Frontend App
//!
//! Tab bar and the page for the selected tab.

use leptos::prelude::*;

use crate::components::EntityPage;
use crate::models::{ProductOrder, Project};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    ProductOrders,
    Projects,
    /// Placeholder; shows the product order page
    Parts,
}

impl Tab {
    /// The page actually rendered for this tab
    pub fn page(self) -> Tab {
        match self {
            Tab::Parts => Tab::ProductOrders,
            other => other,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let (current_tab, set_current_tab) = signal(Tab::default());
    // Re-selecting the active tab must not remount its page
    let page = Memo::new(move |_| current_tab.get().page());

    let tab_class = move |tab: Tab| {
        if current_tab.get() == tab { "tab active" } else { "tab" }
    };

    view! {
        <main class="container">
            <div class="tab-bar">
                <button
                    class=move || tab_class(Tab::ProductOrders)
                    on:click=move |_| set_current_tab.set(Tab::ProductOrders)
                >
                    "Product Orders"
                </button>
                <button
                    class=move || tab_class(Tab::Projects)
                    on:click=move |_| set_current_tab.set(Tab::Projects)
                >
                    "Projects"
                </button>
                <button class="tab" disabled=true>
                    "Parts"
                </button>
            </div>
            <div class="tab-page">
                {move || match page.get() {
                    Tab::Projects => view! { <EntityPage<Project>/> }.into_any(),
                    _ => view! { <EntityPage<ProductOrder>/> }.into_any(),
                }}
            </div>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_product_orders() {
        assert_eq!(Tab::default(), Tab::ProductOrders);
    }

    #[test]
    fn test_parts_falls_back_to_product_orders() {
        assert_eq!(Tab::Parts.page(), Tab::ProductOrders);
        assert_eq!(Tab::Projects.page(), Tab::Projects);
    }
}
