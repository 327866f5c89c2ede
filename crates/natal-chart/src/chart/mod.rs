pub mod loader;
pub mod request;
pub mod settings;

pub use loader::{load_chart_request_from_json, load_chart_request_from_value, ChartVariant};
pub use request::{AspectEntry, ChartRequest, HouseCusp, PersonInfo, PlanetPosition, SignField};
pub use settings::{ChartRadii, ChartSettings, IncompleteHousesPolicy, MinimalSettings};
