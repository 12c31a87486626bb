pub mod calculator;
pub mod table;
pub mod types;

pub use calculator::{AspectCalculator, AspectEndpoint};
pub use table::{AspectSettings, AspectTable, OrbScaling};
pub use types::{Aspect, AspectClass, AspectDefinition, AspectFilter, AspectKind};
