//! Widget state for the interactive page sections.
//!
//! Each widget is a plain struct constructed through a `mount` function when
//! the loader activates it. Rendering lives in `crate::ui`; these modules own
//! behavior and animation state only.

pub mod bubbles;
pub mod chart;
pub mod faq;
pub mod input_field;
pub mod newsletter;

pub use bubbles::BubblesWidget;
pub use chart::ChartWidget;
pub use faq::FaqWidget;
pub use input_field::InputField;
pub use newsletter::{FormField, NewsletterWidget};
