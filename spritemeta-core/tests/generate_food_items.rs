use std::fs;
use std::path::Path;

use spritemeta_core::descriptor::{self, SpriteDescriptor, Vec2i};
use spritemeta_core::error::GenerateError;
use spritemeta_core::naming::StemRule;
use spritemeta_core::verify::verify_dir;
use spritemeta_core::{Generator, GeneratorConfig};
use tempfile::tempdir;

fn setup(root: &Path, names: &[&str]) -> GeneratorConfig {
    let cfg = GeneratorConfig {
        input_dir: root.join("images").join("food_items"),
        output_dir: root.join("sprites").join("food_items"),
        ..GeneratorConfig::default()
    };
    fs::create_dir_all(&cfg.input_dir).unwrap();
    fs::create_dir_all(&cfg.output_dir).unwrap();
    for name in names {
        let p = cfg.input_dir.join(name);
        if let Some(parent) = p.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(p, b"\x89PNG").unwrap();
    }
    cfg
}

#[test]
fn apple_png_becomes_apple_json() {
    let dir = tempdir().expect("failed to create temp directory");
    let cfg = setup(dir.path(), &["apple.png"]);
    Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();

    let text = fs::read_to_string(cfg.output_dir.join("apple.json")).unwrap();
    assert!(text.starts_with("{\n    \"path\": \"images/food_items/apple.png\",\n    \"frame_size\": {\n        \"x\": 100,"));
    assert!(!text.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "path": "images/food_items/apple.png",
            "frame_size": {"x": 100, "y": 98},
            "states": [{"pos": {"x": 0, "y": 0}, "frames": {"x": 1, "y": 1}}],
            "internal": false,
            "batched": false
        })
    );
}

#[test]
fn every_input_gets_a_sidecar_with_same_shape() {
    let dir = tempdir().expect("failed to create temp directory");
    let cfg = setup(dir.path(), &["apple.png", "bread.png", "fish.bmp", "nested/cheese.png"]);
    let report = Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();
    assert_eq!(report.count(), 4);

    for (stem, file) in [("apple", "apple.png"), ("bread", "bread.png"), ("fish", "fish.bmp"), ("cheese", "cheese.png")] {
        let d = descriptor::load_from_path(cfg.output_dir.join(format!("{stem}.json"))).unwrap();
        assert_eq!(d.path, format!("images/food_items/{file}"));
        assert!(d.same_shape(&SpriteDescriptor::default()));
    }
    assert!(verify_dir(&cfg.output_dir, &SpriteDescriptor::default()).unwrap().is_ok());
}

#[test]
fn second_run_is_byte_identical() {
    let dir = tempdir().expect("failed to create temp directory");
    let cfg = setup(dir.path(), &["apple.png", "pear.png"]);
    Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();
    let first = fs::read(cfg.output_dir.join("pear.json")).unwrap();
    Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();
    assert_eq!(fs::read(cfg.output_dir.join("pear.json")).unwrap(), first);
}

#[test]
fn four_char_name_writes_dot_json() {
    let dir = tempdir().expect("failed to create temp directory");
    let cfg = setup(dir.path(), &["a.pn"]);
    let mut names = Vec::new();
    Generator::new(cfg.clone())
        .run(|n| {
            names.push(n.to_string());
            Ok(())
        })
        .unwrap();
    assert_eq!(names, vec![String::new()]);
    assert!(cfg.output_dir.join(".json").is_file());
}

#[test]
fn missing_output_dir_fails_unless_created() {
    let dir = tempdir().expect("failed to create temp directory");
    let cfg = setup(dir.path(), &["apple.png"]);
    fs::remove_dir(&cfg.output_dir).unwrap();

    let err = Generator::new(cfg.clone()).run(|_| Ok(())).unwrap_err();
    assert!(matches!(err, GenerateError::Write { .. }));

    let cfg = GeneratorConfig { create_output_dir: true, ..cfg };
    Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();
    assert!(cfg.output_dir.join("apple.json").is_file());
}

#[test]
fn extension_rule_and_template_override() {
    let dir = tempdir().expect("failed to create temp directory");
    let mut cfg = setup(dir.path(), &["pie.jpeg"]);
    cfg.stem_rule = StemRule::Extension;
    cfg.asset_prefix = "gfx/".into();
    cfg.template = descriptor::load_from_yaml_str("frame_size: { x: 32, y: 32 }\n").unwrap();
    Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();

    let d = descriptor::load_from_path(cfg.output_dir.join("pie.json")).unwrap();
    assert_eq!(d.path, "gfx/pie.jpeg");
    assert_eq!(d.frame_size, Vec2i::new(32, 32));
}

#[test]
fn non_ascii_name_is_escaped_in_path() {
    let dir = tempdir().expect("failed to create temp directory");
    let cfg = setup(dir.path(), &["crème.png"]);
    Generator::new(cfg.clone()).run(|_| Ok(())).unwrap();

    let text = fs::read_to_string(cfg.output_dir.join("crème.json")).unwrap();
    assert!(text.contains(r#""path": "images/food_items/cr\u00e8me.png","#));
    assert_eq!(descriptor::load_from_path(cfg.output_dir.join("crème.json")).unwrap().path, "images/food_items/crème.png");
}
