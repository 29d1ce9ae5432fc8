//! # 行政边界 GeoJSON 解析器
//!
//! 读取底图使用的州级边界（例如 Natural Earth `admin_1_states_provinces_lakes`
//! 导出的 GeoJSON）。支持 FeatureCollection / Feature / 裸 Geometry，
//! 仅保留 Polygon 与 MultiPolygon。
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `geojson` 解析，`geo` 几何类型

use crate::error::Result;

use geo::{Geometry, MultiPolygon};
use geojson::GeoJson;
use std::path::Path;

/// 单个州（或省）的边界
#[derive(Debug, Clone)]
pub struct StateBoundary {
    pub name: Option<String>,
    pub shape: MultiPolygon<f64>,
}

/// 解析边界文件
pub fn parse_boundaries_file(path: &Path) -> Result<Vec<StateBoundary>> {
    let content = super::read_input(path)?;
    parse_boundaries_content(&content)
}

/// 从字符串内容解析边界
pub fn parse_boundaries_content(content: &str) -> Result<Vec<StateBoundary>> {
    let geojson: GeoJson = content.parse()?;

    let mut boundaries = Vec::new();
    match geojson {
        GeoJson::FeatureCollection(collection) => {
            for feature in collection.features {
                push_feature(&mut boundaries, feature)?;
            }
        }
        GeoJson::Feature(feature) => push_feature(&mut boundaries, feature)?,
        GeoJson::Geometry(geometry) => {
            if let Some(shape) = to_multipolygon(Geometry::try_from(geometry)?) {
                boundaries.push(StateBoundary { name: None, shape });
            }
        }
    }

    log::debug!("Loaded {} boundary polygons", boundaries.len());
    Ok(boundaries)
}

fn push_feature(boundaries: &mut Vec<StateBoundary>, feature: geojson::Feature) -> Result<()> {
    let name = feature
        .property("name")
        .or_else(|| feature.property("NAME"))
        .and_then(|v| v.as_str())
        .map(str::to_string);

    let Some(geometry) = feature.geometry else {
        return Ok(());
    };

    match to_multipolygon(Geometry::try_from(geometry)?) {
        Some(shape) => boundaries.push(StateBoundary { name, shape }),
        None => log::trace!("Skipping non-polygon feature {:?}", name),
    }
    Ok(())
}

fn to_multipolygon(geometry: Geometry<f64>) -> Option<MultiPolygon<f64>> {
    match geometry {
        Geometry::MultiPolygon(mp) => Some(mp),
        Geometry::Polygon(p) => Some(MultiPolygon(vec![p])),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_collection() {
        let content = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "properties": { "name": "Colorado" },
      "geometry": {
        "type": "Polygon",
        "coordinates": [[[-109.05, 37.0], [-102.04, 37.0], [-102.04, 41.0], [-109.05, 41.0], [-109.05, 37.0]]]
      }
    },
    {
      "type": "Feature",
      "properties": { "name": "Capital" },
      "geometry": { "type": "Point", "coordinates": [-104.99, 39.74] }
    },
    {
      "type": "Feature",
      "properties": { "NAME": "Hawaii" },
      "geometry": {
        "type": "MultiPolygon",
        "coordinates": [
          [[[-155.0, 19.0], [-154.8, 19.5], [-155.5, 20.2], [-155.0, 19.0]]],
          [[[-156.0, 20.6], [-156.4, 20.9], [-156.7, 20.8], [-156.0, 20.6]]]
        ]
      }
    }
  ]
}"#;
        let boundaries = parse_boundaries_content(content).unwrap();
        assert_eq!(boundaries.len(), 2);
        assert_eq!(boundaries[0].name.as_deref(), Some("Colorado"));
        assert_eq!(boundaries[0].shape.0.len(), 1);
        assert_eq!(boundaries[1].name.as_deref(), Some("Hawaii"));
        assert_eq!(boundaries[1].shape.0.len(), 2);
    }

    #[test]
    fn test_parse_bare_geometry() {
        let content = r#"{"type": "Polygon", "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]}"#;
        let boundaries = parse_boundaries_content(content).unwrap();
        assert_eq!(boundaries.len(), 1);
        assert!(boundaries[0].name.is_none());
    }

    #[test]
    fn test_parse_invalid_geojson() {
        assert!(parse_boundaries_content("{ not json").is_err());
    }
}
