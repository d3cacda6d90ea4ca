mod core;
pub use core::{Message, Role, completion};

mod intent;
pub use intent::{IntentFilters, MapsIntent, extract_intent};
