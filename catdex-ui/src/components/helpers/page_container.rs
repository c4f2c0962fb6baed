//! Centered page column

use dioxus::prelude::*;

/// Page column used under the app header. `test_id` marks which page
/// subtree is currently shown.
#[component]
pub fn PageContainer(#[props(default)] test_id: Option<String>, children: Element) -> Element {
    rsx! {
        section {
            class: "max-w-5xl mx-auto px-4 py-8 md:px-6",
            "data-testid": test_id,
            {children}
        }
    }
}
