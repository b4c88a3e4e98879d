//! Classification of languages as Melanesian
//!
//! A language is Melanesian if one of its countries is a Melanesian country.
//! Languages of other countries (e.g. those of Western New Guinea, which
//! Glottolog assigns to Indonesia) are tested against the region boundary:
//! inside one of its polygons, or within `tolerance` degrees of one.

use crate::error::{BuildError, Result};
use geo::{Contains, EuclideanDistance, Geometry, Point, Polygon};
use geojson::GeoJson;
use handfive_domain::Languoid;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Country lists in Glottolog that are known to be wrong
const COUNTRY_CORRECTIONS: &[(&str, &[&str])] = &[
    // Rotuman: listed without Fiji
    ("rotu1241", &["FJ"]),
    // Motu: listed without Papua New Guinea
    ("motu1246", &["PG"]),
];

/// Decides region membership for languoids
#[derive(Debug, Clone)]
pub struct RegionClassifier {
    countries: HashSet<String>,
    polygons: Vec<Polygon<f64>>,
    tolerance: f64,
}

impl RegionClassifier {
    /// Create a classifier from country codes and boundary polygons
    pub fn new<I, S>(countries: I, polygons: Vec<Polygon<f64>>, tolerance: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            countries: countries.into_iter().map(Into::into).collect(),
            polygons,
            tolerance,
        }
    }

    /// Create a classifier with the boundary read from a GeoJSON file
    pub fn from_geojson_file<I, S>(
        path: impl AsRef<Path>,
        countries: I,
        tolerance: f64,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let content = std::fs::read_to_string(path.as_ref())?;
        let polygons = polygons_from_geojson(&content)?;
        debug!(polygons = polygons.len(), "Loaded region boundary");
        Ok(Self::new(countries, polygons, tolerance))
    }

    /// Whether the languoid belongs to the region
    pub fn classify(&self, languoid: &Languoid) -> bool {
        if country_codes(languoid).iter().any(|c| self.countries.contains(*c)) {
            return true;
        }
        match (languoid.longitude, languoid.latitude) {
            (Some(lon), Some(lat)) => self.near(lon, lat),
            _ => {
                warn!(languoid = %languoid.id, "No coordinates, classified as outside the region");
                false
            }
        }
    }

    /// Whether a point lies in, or within the tolerance of, the boundary
    pub fn near(&self, lon: f64, lat: f64) -> bool {
        // Pacific-centred boundaries use longitudes beyond 180
        let candidates = if lon < 0.0 {
            vec![Point::new(lon, lat), Point::new(lon + 360.0, lat)]
        } else {
            vec![Point::new(lon, lat)]
        };
        candidates.iter().any(|point| {
            self.polygons.iter().any(|polygon| {
                polygon.contains(point) || point.euclidean_distance(polygon) <= self.tolerance
            })
        })
    }
}

fn country_codes(languoid: &Languoid) -> Vec<&str> {
    COUNTRY_CORRECTIONS
        .iter()
        .find(|(id, _)| *id == languoid.id)
        .map(|(_, countries)| countries.to_vec())
        .unwrap_or_else(|| languoid.countries.iter().map(String::as_str).collect())
}

/// Collect all polygons of a GeoJSON document
pub fn polygons_from_geojson(content: &str) -> Result<Vec<Polygon<f64>>> {
    let geojson: GeoJson = content.parse()?;
    let collection: geo::GeometryCollection<f64> = geojson::quick_collection(&geojson)?;

    let mut polygons = Vec::new();
    for geometry in collection {
        collect_polygons(geometry, &mut polygons);
    }
    if polygons.is_empty() {
        return Err(BuildError::Config("region boundary contains no polygons".to_string()));
    }
    Ok(polygons)
}

fn collect_polygons(geometry: Geometry<f64>, out: &mut Vec<Polygon<f64>>) {
    match geometry {
        Geometry::Polygon(p) => out.push(p),
        Geometry::MultiPolygon(mp) => out.extend(mp),
        Geometry::GeometryCollection(gc) => {
            for g in gc {
                collect_polygons(g, out);
            }
        }
        _ => {}
    }
}
