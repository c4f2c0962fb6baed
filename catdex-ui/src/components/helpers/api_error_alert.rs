//! Amber alert shown when an API request could not be served.

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Friendly, non-technical alert. Has no retry action.
#[component]
pub fn ApiErrorAlert(message: String) -> Element {
    rsx! {
        div {
            class: "bg-amber-900/30 border border-amber-700/50 rounded-lg p-4",
            role: "alert",
            div { class: "flex items-start gap-3",
                AlertTriangleIcon { class: "w-5 h-5 text-amber-500 flex-shrink-0 mt-0.5" }
                p { class: "text-sm font-medium text-amber-200", "{message}" }
            }
        }
    }
}
