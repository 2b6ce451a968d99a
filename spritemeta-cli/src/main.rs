use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use spritemeta_core::descriptor::{self, SpriteDescriptor};
use spritemeta_core::generate::{DEFAULT_ASSET_PREFIX, DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR};
use spritemeta_core::naming::StemRule;
use spritemeta_core::verify::{verify_dir, Mismatch};
use spritemeta_core::{Generator, GeneratorConfig, VERSION};

#[derive(Parser, Debug)]
#[command(name = "spritemeta", version = VERSION, about = "Write sprite metadata sidecars for image folders")]
struct Cli {
    /// Defaults to `generate` with every option at its default
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write one <name>.json descriptor per image
    Generate(GenerateArgs),
    /// Load a descriptor (JSON or YAML) and print its fields
    Inspect { path: PathBuf },
    /// Check that every descriptor in a folder matches the template
    Verify {
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,
        /// Template to compare against instead of the built-in one
        #[arg(long)]
        template: Option<PathBuf>,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[arg(long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
    /// Prefix written into each descriptor's `path`
    #[arg(long, default_value = DEFAULT_ASSET_PREFIX)]
    asset_prefix: String,
    /// YAML/JSON descriptor whose fields replace the built-in template
    #[arg(long)]
    template: Option<PathBuf>,
    /// Drop the real extension instead of the last four characters
    #[arg(long)]
    strip_extension: bool,
    /// Create the output folder if it is missing
    #[arg(long)]
    create_output: bool,
    /// Print names without writing files
    #[arg(long)]
    dry_run: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT_DIR.into(),
            output: DEFAULT_OUTPUT_DIR.into(),
            asset_prefix: DEFAULT_ASSET_PREFIX.into(),
            template: None,
            strip_extension: false,
            create_output: false,
            dry_run: false,
        }
    }
}

fn load_template(path: Option<&PathBuf>) -> Result<SpriteDescriptor> {
    match path {
        Some(p) => descriptor::load_from_path(p),
        None => Ok(SpriteDescriptor::default()),
    }
}

/// Runs the generator, writing one base name per line to `out` and nothing else.
fn generate<W: Write>(args: GenerateArgs, out: &mut W) -> Result<()> {
    let cfg = GeneratorConfig {
        template: load_template(args.template.as_ref())?,
        input_dir: args.input,
        output_dir: args.output,
        asset_prefix: args.asset_prefix,
        stem_rule: if args.strip_extension { StemRule::Extension } else { StemRule::default() },
        create_output_dir: args.create_output,
        dry_run: args.dry_run,
    };
    Generator::new(cfg).run(|name| writeln!(out, "{}", name))?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    match cli.cmd.unwrap_or_else(|| Command::Generate(GenerateArgs::default())) {
        Command::Generate(args) => generate(args, &mut std::io::stdout().lock())?,
        Command::Inspect { path } => {
            let d = descriptor::load_from_path(&path)?;
            println!("Loaded descriptor: {}", path.display());
            println!("  path: {}", d.path);
            println!("  frame_size: {}x{}", d.frame_size.x, d.frame_size.y);
            for (i, s) in d.states.iter().enumerate() {
                println!("  state[{}]: pos=({}, {}) frames={}x{}", i, s.pos.x, s.pos.y, s.frames.x, s.frames.y);
            }
            println!("  internal: {}, batched: {}", d.internal, d.batched);
        }
        Command::Verify { output, template } => {
            let template = load_template(template.as_ref())?;
            let report = verify_dir(&output, &template)?;
            for m in &report.mismatches {
                match m {
                    Mismatch::Shape(p) => println!("MISMATCH {}", p.display()),
                    Mismatch::Unreadable { path, reason } => println!("UNREADABLE {} ({})", path.display(), reason),
                }
            }
            println!("checked {} file(s), {} mismatch(es)", report.checked.len(), report.mismatches.len());
            if !report.is_ok() {
                bail!("{} descriptor(s) differ from the template", report.mismatches.len());
            }
        }
    }
    Ok(())
}
