pub mod places;
pub use places::{PlaceResult, PlacesClient, Provider, SearchOutcome};
