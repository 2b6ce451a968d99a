pub mod schema;

use anyhow::{Context, Result};
pub use schema::{SpriteDescriptor, SpriteState, Template, Vec2i};

/// Parse a descriptor from YAML. JSON documents parse too.
pub fn load_from_yaml_str(s: &str) -> Result<SpriteDescriptor> {
    let desc: SpriteDescriptor = serde_yaml::from_str(s)?;
    Ok(desc)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<SpriteDescriptor> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    load_from_yaml_str(&data).with_context(|| format!("parsing {}", path.display()))
}
