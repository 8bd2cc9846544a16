use cardforge::catalog::{Catalog, Project, Subtype, Variant};
use cardforge::compose::{FontLibrary, RusttypeBackend, render_batch, validate_frame_image};
use cardforge::config;
use cardforge::export::export_texts;
use cardforge::output;
use cardforge::stats::project_stats;
use cardforge::store::{CatalogStore, ProjectContext, list_projects};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cardforge")]
#[command(about = "Catalog manager and asset compositor for trading-card print runs")]
#[command(long_about = "\
Catalog manager and asset compositor for trading-card print runs

A project is one card set of one of two game variants:

  nc    ordinary + special runs (6/7 rarity tiers)
  vc    alpha + omega + delta runs (5 tiers, value offsets +0/+3/+6)

Workspace layout:

  <root>/
  ├── cardforge.toml           # Workspace config (optional)
  ├── fonts/                   # .ttf/.otf files, resolved by family name
  └── <project>/
      ├── catalog.json         # Cards + frames + project header
      ├── alpha/001.png        # Per-subtype card art, by card number
      ├── alpha.txt            # Text export output
      └── 001_FOX_1000.png     # Rendered card assets

Typical session:

  cardforge init summer-set --variant vc --run alpha=100 --run omega=50
  cardforge fill summer-set --subtype alpha --respect 1000 \\
      --name 'Лисиця' --description 'Руда і хитра' --export-name Fox
  cardforge frame summer-set --subtype alpha --respect 1000 \\
      --image frames/a1.png --text-pos 412,180 --num-pos 412,1100
  cardforge stats summer-set
  cardforge export summer-set
  cardforge render summer-set

Run 'cardforge gen-config' to print a documented cardforge.toml.")]
#[command(version)]
struct Cli {
    /// Workspace root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create a project and bulk-create its print run
    Init {
        name: String,
        /// Game variant: nc or vc
        #[arg(long)]
        variant: Variant,
        /// Run size per subtype, e.g. --run alpha=100 (repeatable)
        #[arg(long = "run", value_parser = parse_run, required = true)]
        runs: Vec<(Subtype, u32)>,
    },
    /// Fill in the next open card of a tier
    Fill {
        project: String,
        #[arg(long)]
        subtype: Subtype,
        /// Tier respect value, e.g. 4000
        #[arg(long)]
        respect: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Romanized name for exports and asset names (defaults to --name)
        #[arg(long)]
        export_name: Option<String>,
    },
    /// Show the card table
    List { project: String },
    /// Show completion statistics
    Stats { project: String },
    /// List projects in the workspace
    Projects,
    /// Show or edit a tier's frame style
    Frame {
        project: String,
        #[arg(long)]
        subtype: Subtype,
        #[arg(long)]
        respect: u32,
        /// Frame overlay image path
        #[arg(long)]
        image: Option<PathBuf>,
        /// Name text anchor, e.g. --text-pos 412,180
        #[arg(long, value_parser = parse_pos)]
        text_pos: Option<(i32, i32)>,
        /// Number text anchor
        #[arg(long, value_parser = parse_pos)]
        num_pos: Option<(i32, i32)>,
        #[arg(long)]
        text_font: Option<String>,
        #[arg(long)]
        num_font: Option<String>,
        #[arg(long)]
        text_size: Option<u32>,
        #[arg(long)]
        num_size: Option<u32>,
        /// Color name or #RRGGBB
        #[arg(long)]
        text_color: Option<String>,
        #[arg(long)]
        num_color: Option<String>,
        #[arg(long)]
        shadow_text: Option<bool>,
        #[arg(long)]
        emboss_text: Option<bool>,
        #[arg(long)]
        shadow_num: Option<bool>,
        #[arg(long)]
        emboss_num: Option<bool>,
        /// Prefix card numbers with №
        #[arg(long)]
        number_marker: Option<bool>,
    },
    /// Write per-subtype text files for completed cards
    Export { project: String },
    /// Composite completed cards into PNG assets
    Render { project: String },
    /// Print a stock cardforge.toml with all options documented
    GenConfig,
}

/// Parse `subtype=size` run arguments.
fn parse_run(s: &str) -> Result<(Subtype, u32), String> {
    let (subtype, size) = s
        .split_once('=')
        .ok_or_else(|| format!("expected subtype=size, got '{s}'"))?;
    let subtype: Subtype = subtype.parse()?;
    let size: u32 = size
        .parse()
        .map_err(|_| format!("run size '{size}' is not a number"))?;
    Ok((subtype, size))
}

/// Parse `x,y` pixel anchors.
fn parse_pos(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got '{s}'"))?;
    let x: i32 = x.trim().parse().map_err(|_| format!("bad x '{x}'"))?;
    let y: i32 = y.trim().parse().map_err(|_| format!("bad y '{y}'"))?;
    Ok((x, y))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init {
            name,
            variant,
            runs,
        } => {
            let config = config::load_config(&cli.root)?;
            let ctx = ProjectContext::new(&cli.root, &name);
            let catalog = Catalog::create(
                Project {
                    name: name.clone(),
                    variant,
                },
                &runs,
                &config.frame,
            )?;
            ctx.create_layout(variant)?;
            ctx.store().save(&catalog)?;
            println!(
                "Created {variant} project '{name}': {} cards, {} frames → {}",
                catalog.cards.len(),
                catalog.frames.len(),
                ctx.store().path().display()
            );
        }
        Command::Fill {
            project,
            subtype,
            respect,
            name,
            description,
            export_name,
        } => {
            let ctx = ProjectContext::new(&cli.root, &project);
            let store = ctx.store();
            let mut catalog = store.load()?;
            let number = catalog
                .fill_card(subtype, respect, name, description, export_name)?
                .number
                .clone();
            store.save(&catalog)?;
            println!("Filled {subtype} card {number} at respect {respect}");
        }
        Command::List { project } => {
            let catalog = ProjectContext::new(&cli.root, &project).store().load()?;
            output::print_card_list(&catalog);
        }
        Command::Stats { project } => {
            let catalog = ProjectContext::new(&cli.root, &project).store().load()?;
            output::print_stats(&project_stats(&catalog), catalog.project.variant);
        }
        Command::Projects => {
            let names = list_projects(&cli.root)?;
            if names.is_empty() {
                println!("No projects in {}", cli.root.display());
            }
            for name in names {
                println!("{name}");
            }
        }
        Command::Frame {
            project,
            subtype,
            respect,
            image,
            text_pos,
            num_pos,
            text_font,
            num_font,
            text_size,
            num_size,
            text_color,
            num_color,
            shadow_text,
            emboss_text,
            shadow_num,
            emboss_num,
            number_marker,
        } => {
            let ctx = ProjectContext::new(&cli.root, &project);
            let store = ctx.store();
            let mut catalog = store.load()?;
            let frame = catalog.frame_mut(subtype, respect)?;

            if let Some(image) = image {
                validate_frame_image(&image)?;
                frame.image = Some(image);
            }
            if let Some((x, y)) = text_pos {
                frame.x_text = x;
                frame.y_text = y;
            }
            if let Some((x, y)) = num_pos {
                frame.x_num = x;
                frame.y_num = y;
            }
            if let Some(font) = text_font {
                frame.font_text = font;
            }
            if let Some(font) = num_font {
                frame.font_num = font;
            }
            if let Some(size) = text_size {
                frame.font_text_size = size;
            }
            if let Some(size) = num_size {
                frame.font_num_size = size;
            }
            if let Some(color) = text_color {
                frame.color_text = color;
            }
            if let Some(color) = num_color {
                frame.color_num = color;
            }
            if let Some(flag) = shadow_text {
                frame.shadow_text = flag;
            }
            if let Some(flag) = emboss_text {
                frame.emboss_text = flag;
            }
            if let Some(flag) = shadow_num {
                frame.shadow_num = flag;
            }
            if let Some(flag) = emboss_num {
                frame.emboss_num = flag;
            }
            if let Some(flag) = number_marker {
                frame.number_marker = flag;
            }

            let summary = format!(
                "{subtype} @ {respect}: image={} text=({},{}) {}px num=({},{}) {}px",
                frame
                    .image
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "unset".to_string()),
                frame.x_text,
                frame.y_text,
                frame.font_text_size,
                frame.x_num,
                frame.y_num,
                frame.font_num_size,
            );
            store.save(&catalog)?;
            println!("{summary}");
        }
        Command::Export { project } => {
            let ctx = ProjectContext::new(&cli.root, &project);
            let catalog = ctx.store().load()?;
            let files = export_texts(&catalog, &ctx)?;
            output::print_export(&files);
        }
        Command::Render { project } => {
            let config = config::load_config(&cli.root)?;
            let ctx = ProjectContext::new(&cli.root, &project);
            let catalog = ctx.store().load()?;
            let fonts = FontLibrary::discover(&cli.root.join(&config.fonts_dir))?;
            let mut backend = RusttypeBackend::new(fonts);
            let rendered = render_batch(&mut backend, &catalog, &ctx)?;
            output::print_render(&rendered);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
