use serde::{Deserialize, Serialize};

/// Where the map opens before any route has been computed.
pub const DEFAULT_CENTER: Coordinates = Coordinates {
    latitude: 42.4426,
    longitude: 19.2685,
};

pub const DEFAULT_ZOOM: u8 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<Coordinates> for String {
    fn from(coordinates: Coordinates) -> Self {
        format!("{},{}", coordinates.latitude, coordinates.longitude)
    }
}

#[test]
fn coordinates_into_query_string() {
    let location: String = DEFAULT_CENTER.into();
    assert_eq!(location, "42.4426,19.2685");
}
