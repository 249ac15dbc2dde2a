//! Feed locations, the initial view and the base layer tile sources

/// USGS summary feed: every earthquake of the past seven days.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 plate boundaries (Bird, 2003) as GeoJSON line strings.
pub const TECTONIC_PLATES_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Logical name of the display region the map mounts into.
pub const DEFAULT_CONTAINER_ID: &str = "map";

/// Initial center, roughly over the contiguous United States.
pub const DEFAULT_CENTER: (f64, f64) = (37.09, -95.71);

/// Initial zoom level.
pub const DEFAULT_ZOOM: f64 = 5.0;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Environment variable holding the Mapbox token for the satellite layer.
pub const MAPBOX_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

/// Substituted into the satellite URL when no token is configured.
pub const MAPBOX_TOKEN_PLACEHOLDER: &str = "YOUR_MAPBOX_ACCESS_TOKEN";

pub const OPENSTREETMAP_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const OPENSTREETMAP_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

pub const MAPBOX_SATELLITE_URL: &str =
    "https://api.mapbox.com/styles/v1/mapbox/satellite-v9/tiles/{z}/{x}/{y}?access_token={accessToken}";
pub const MAPBOX_ATTRIBUTION: &str = "Map data © <a href=\"https://www.mapbox.com/\">Mapbox</a>";

pub const CARTO_LIGHT_URL: &str = "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png";
pub const CARTO_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors &copy; <a href=\"https://carto.com/\">CARTO</a>";

/// Display names used by the layer control.
pub const OUTDOORS_LAYER_NAME: &str = "Outdoors";
pub const SATELLITE_LAYER_NAME: &str = "Satellite";
pub const GRAYSCALE_LAYER_NAME: &str = "Grayscale";
pub const EARTHQUAKES_OVERLAY_NAME: &str = "Earthquakes";
pub const TECTONIC_PLATES_OVERLAY_NAME: &str = "Tectonic Plates";
