//! Record module - serde types for one saved shape

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

use fallblocks_core::types::{Rgba, MASK_SIZE};
use fallblocks_core::{Mask, ShapeTemplate};

/// Serialized color, components in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorRecord {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl From<Rgba> for ColorRecord {
    fn from(c: Rgba) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

impl From<ColorRecord> for Rgba {
    fn from(c: ColorRecord) -> Self {
        Rgba::new(c.r, c.g, c.b, c.a)
    }
}

/// One saved shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub grid: [[bool; MASK_SIZE]; MASK_SIZE],
    pub color: ColorRecord,
}

impl ShapeRecord {
    /// Parse a single JSON record
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("malformed shape record")
    }

    pub fn from_template(template: &ShapeTemplate) -> Self {
        Self {
            name: Some(template.name().to_string()),
            grid: *template.mask().columns(),
            color: template.color().into(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize shape record")
    }

    /// Validate and convert, naming the shape `fallback_name` if the record
    /// carries no name
    pub fn into_template(self, fallback_name: &str) -> Result<ShapeTemplate> {
        let name = self
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| fallback_name.to_string());

        let color = Rgba::from(self.color);
        if !color.is_normalized() {
            bail!("shape '{}' has a color component outside [0, 1]: {:?}", name, color);
        }

        let mask = Mask::from_columns(self.grid);
        ShapeTemplate::new(name.clone(), mask, color)
            .ok_or_else(|| anyhow!("shape '{}' has an empty grid", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T_RECORD: &str = r#"{
        "grid": [[false, true, false, false],
                 [false, true, true, false],
                 [false, true, false, false],
                 [false, false, false, false]],
        "color": {"r": 0.5, "g": 0.0, "b": 1.0, "a": 1.0}
    }"#;

    #[test]
    fn test_parse_record() {
        let record = ShapeRecord::parse(T_RECORD).unwrap();
        assert!(record.name.is_none());
        assert!(record.grid[1][2]);

        let template = record.into_template("tee").unwrap();
        assert_eq!(template.name(), "tee");
        assert_eq!(template.mask().count(), 4);
        assert_eq!(template.color(), Rgba::new(0.5, 0.0, 1.0, 1.0));
    }

    #[test]
    fn test_named_record_and_default_alpha() {
        let json = r#"{"name": "dot", "grid": [[true,false,false,false],[false,false,false,false],[false,false,false,false],[false,false,false,false]], "color": {"r": 1, "g": 1, "b": 0}}"#;
        let template = ShapeRecord::parse(json).unwrap().into_template("ignored").unwrap();
        assert_eq!(template.name(), "dot");
        assert_eq!(template.color(), Rgba::YELLOW);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let json = r#"{"grid": [[false,false,false,false],[false,false,false,false],[false,false,false,false],[false,false,false,false]], "color": {"r": 1, "g": 0, "b": 0, "a": 1}}"#;
        let err = ShapeRecord::parse(json).unwrap().into_template("blank").unwrap_err();
        assert!(err.to_string().contains("empty grid"));
    }

    #[test]
    fn test_color_out_of_range_rejected() {
        let mut record = ShapeRecord::parse(T_RECORD).unwrap();
        record.color.g = 2.0;
        assert!(record.into_template("bright").is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(ShapeRecord::parse("{\"grid\": [[true]]}").is_err());
        assert!(ShapeRecord::parse("not json").is_err());
    }

    #[test]
    fn test_template_survives_serialization() {
        let original = fallblocks_core::classic_templates()[2].clone();
        let json = ShapeRecord::from_template(&original).to_json().unwrap();
        let back = ShapeRecord::parse(&json).unwrap().into_template("x").unwrap();
        assert_eq!(back, original);
    }
}
