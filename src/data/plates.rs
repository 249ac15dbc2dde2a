use crate::{
    core::geo::LatLng,
    data::{earthquake::SkippedFeature, geojson::GeoJson},
    MapError,
};

/// One plate boundary segment; only its geometry is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundary {
    /// PB2002 boundary name such as `"AF-AN"`.
    pub name: Option<String>,
    pub paths: Vec<Vec<LatLng>>,
}

/// Extracts drawable boundaries, skipping features without line geometry.
pub fn plate_boundaries(geojson: &GeoJson) -> (Vec<PlateBoundary>, Vec<SkippedFeature>) {
    let mut boundaries = Vec::new();
    let mut skipped = Vec::new();

    for (index, feature) in geojson.features().iter().enumerate() {
        let paths = feature.geometry().and_then(|geometry| {
            let paths: Vec<Vec<LatLng>> = geometry
                .paths()
                .into_iter()
                .filter(|path| path.len() >= 2)
                .collect();
            if paths.is_empty() {
                Err(MapError::Validation("no drawable line geometry".to_string()))
            } else {
                Ok(paths)
            }
        });

        match paths {
            Ok(paths) => boundaries.push(PlateBoundary {
                name: feature
                    .property("Name")
                    .and_then(|n| n.as_str())
                    .map(str::to_string),
                paths,
            }),
            Err(e) => {
                log::debug!("Skipping plate feature #{}: {}", index, e);
                skipped.push(SkippedFeature {
                    index,
                    id: feature.id_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    (boundaries, skipped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pb2002_boundaries() {
        let geojson = GeoJson::from_str(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature",
                 "properties": {"LAYER": "plate boundary", "Name": "AF-AN", "PlateA": "AF", "PlateB": "AN", "Type": ""},
                 "geometry": {"type": "LineString", "coordinates": [[-0.4379, -54.8518], [-0.0388, -54.6772], [0.443, -54.4512]]}},
                {"type": "Feature", "properties": {"Name": "broken"}, "geometry": null},
                {"type": "Feature", "properties": {"Name": "dot"},
                 "geometry": {"type": "Point", "coordinates": [1.0, 2.0]}}
            ]}"#,
        )
        .unwrap();

        let (boundaries, skipped) = plate_boundaries(&geojson);
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].name.as_deref(), Some("AF-AN"));
        assert_eq!(boundaries[0].paths[0].len(), 3);
        assert_eq!(boundaries[0].paths[0][0], LatLng::new(-54.8518, -0.4379));
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[1].index, 2);
    }
}
