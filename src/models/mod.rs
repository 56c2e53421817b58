//! Data models for content records, animation properties and the contact form.
//!
//! Models are independent of the terminal UI and of the animation engine.

pub mod contact;
pub mod record;
pub mod rgb;
pub mod visual;

// Re-export all model types
pub use contact::{ContactField, ContactForm, Submission};
pub use record::{DisplayRecord, Project, RecordKind, Service, TechCategory, Technology};
pub use rgb::RgbColor;
pub use visual::VisualProps;
