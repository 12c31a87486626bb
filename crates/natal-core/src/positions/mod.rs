pub mod types;

pub use types::{
    validate_longitude, Angle, Body, BodyPosition, ChartAngles, ChartInput, ChartPoint,
    PositionSet, RawBodyPosition, ALL_BODIES,
};
