//! Common helper UI components

mod api_error_alert;
mod back_button;
mod loading_spinner;
mod page_container;

pub use api_error_alert::ApiErrorAlert;
pub use back_button::BackButton;
pub use loading_spinner::LoadingSpinner;
pub use page_container::PageContainer;
