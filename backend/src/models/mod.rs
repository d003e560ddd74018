//! Domain models for the cost calculator

pub mod assembly;
pub mod filament;
pub mod item;
pub mod part;
pub mod printer;

use std::collections::BTreeMap;

/// Free-form descriptive metadata (color, scale, ...)
///
/// Carried for display only; no cost query ever reads it.
pub type Attributes = BTreeMap<String, serde_json::Value>;

// Re-exports
pub use assembly::MultiPart;
pub use filament::Filament;
pub use item::PricedItem;
pub use part::{NonPrintedPart, Part};
pub use printer::{Printer, PrinterSpec};
