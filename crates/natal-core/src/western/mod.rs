pub mod decans;
pub mod dignities;
pub mod houses;
pub mod rulers;

pub use decans::{get_decan_index, get_decan_info_for_sign_and_degree, get_decan_info_from_longitude, DecanInfo};
pub use dignities::{DignitiesService, Dignity, DignityReport, ExactExaltation, DEFAULT_EXACT_EXALTATIONS};
pub use houses::HouseCusps;
pub use rulers::{chart_ruler, ruler_of_sign_index, sign_ruler, ChartRuler, RulershipScheme};
