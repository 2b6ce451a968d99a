//! The sidecar generation loop.

use std::path::PathBuf;

use crate::descriptor::{SpriteDescriptor, Template};
use crate::error::GenerateError;
use crate::export;
use crate::naming::{self, StemRule};
use crate::scan;

pub const DEFAULT_INPUT_DIR: &str = "./images/food_items";
pub const DEFAULT_OUTPUT_DIR: &str = "./sprites/food_items";
pub const DEFAULT_ASSET_PREFIX: &str = "images/food_items";

#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    /// Prefix written into `path`, relative to the game's asset root.
    pub asset_prefix: String,
    pub stem_rule: StemRule,
    pub template: SpriteDescriptor,
    pub create_output_dir: bool,
    pub dry_run: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            asset_prefix: DEFAULT_ASSET_PREFIX.to_string(),
            stem_rule: StemRule::default(),
            template: SpriteDescriptor::default(),
            create_output_dir: false,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub written: Vec<PathBuf>,
}

impl Report {
    pub fn count(&self) -> usize { self.written.len() }
}

pub struct Generator {
    cfg: GeneratorConfig,
    template: Template,
}

impl Generator {
    pub fn new(cfg: GeneratorConfig) -> Self {
        let template = Template::new(cfg.template.clone());
        Self { cfg, template }
    }

    /// Walk the input tree and write one sidecar per file, calling `on_file`
    /// with each base name before its write. Stops at the first error,
    /// including one returned by `on_file`; files already written stay on disk.
    pub fn run<F>(&mut self, mut on_file: F) -> Result<Report, GenerateError>
    where
        F: FnMut(&str) -> std::io::Result<()>,
    {
        if self.cfg.create_output_dir && !self.cfg.dry_run {
            std::fs::create_dir_all(&self.cfg.output_dir).map_err(|source| GenerateError::CreateDir {
                path: self.cfg.output_dir.clone(),
                source,
            })?;
        }

        let files = scan::collect_files(&self.cfg.input_dir)?;
        log::debug!("found {} files under {}", files.len(), self.cfg.input_dir.display());

        let mut report = Report::default();
        for file in &files {
            let file_name = naming::file_name_str(file)?;
            let base = self.cfg.stem_rule.base_name(file_name)?;
            on_file(base).map_err(|source| GenerateError::Report { name: base.to_string(), source })?;

            let out = naming::output_path(&self.cfg.output_dir, base);
            let asset = naming::asset_path(&self.cfg.asset_prefix, file_name);
            let desc = self.template.stamp(&asset);
            if self.cfg.dry_run {
                log::debug!("dry run: would write {}", out.display());
            } else {
                export::write_descriptor(&out, desc)?;
                log::debug!("wrote {}", out.display());
            }
            report.written.push(out);
        }

        log::info!(
            "{} {} sidecar(s) into {}",
            if self.cfg.dry_run { "planned" } else { "wrote" },
            report.count(),
            self.cfg.output_dir.display()
        );
        Ok(report)
    }
}
