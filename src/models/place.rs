//! Geo place models.

use serde::{Deserialize, Serialize};

use super::primitives::PlaceId;

/// A geo place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Place ID
    pub id: PlaceId,
    /// Short name
    #[serde(default)]
    pub name: String,
    /// Full name, e.g. "Berlin, Germany"
    #[serde(default)]
    pub full_name: Option<String>,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// ISO country code
    #[serde(default)]
    pub country_code: Option<String>,
    /// `city`, `admin`, `country`, ...
    #[serde(default)]
    pub place_type: Option<String>,
    /// API URL for the place
    #[serde(default)]
    pub url: Option<String>,
    /// Enclosing polygon
    #[serde(default)]
    pub bounding_box: Option<BoundingBox>,
}

/// GeoJSON-style bounding polygon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Usually `Polygon`
    #[serde(rename = "type")]
    pub kind: String,
    /// `[longitude, latitude]` rings
    pub coordinates: Vec<Vec<[f64; 2]>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_with_bounding_box() {
        let place: Place = serde_json::from_value(serde_json::json!({
            "id": "3078869807f9dd36",
            "name": "Berlin",
            "full_name": "Berlin, Germany",
            "place_type": "city",
            "bounding_box": {
                "type": "Polygon",
                "coordinates": [[[13.08, 52.33], [13.76, 52.33], [13.76, 52.67], [13.08, 52.67]]]
            }
        }))
        .unwrap();

        let bbox = place.bounding_box.as_ref().unwrap();
        assert_eq!(bbox.kind, "Polygon");
        assert_eq!(bbox.coordinates[0].len(), 4);
        let [long, lat] = bbox.coordinates[0][1];
        assert!((long - 13.76).abs() < 1e-9 && (lat - 52.33).abs() < 1e-9);

        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(json["bounding_box"]["type"], "Polygon");
    }
}
