mod destination;
pub use destination::*;

mod content;
pub use content::*;

mod section;
pub use section::*;

mod quiz;
pub use quiz::*;

mod location;
pub use location::*;

mod registry;
pub use registry::*;

mod catalog;
pub use catalog::*;

mod menu;
pub use menu::*;

mod config;
pub use config::*;

pub mod test_case;

pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
