//! Atelier CLI
//!
//! Command-line front end over the shell controller: list, add, remove,
//! share, import, and export design assets.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use atelier::config::share::DEFAULT_ORIGIN;
use atelier::data::{
    AssetStore, Color, Component, DiskStorage, Gradient, Icon, Logo, Theme, Typography,
};
use atelier::error::Result;
use atelier::share::export::write_asset_json;
use atelier::shell::ShellController;

/// Manage and share design assets
#[derive(Parser)]
#[command(name = "atelier", about = "Design-asset manager", version)]
struct Cli {
    /// Storage directory override (defaults to the platform config dir)
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List assets of one kind
    List {
        kind: KindArg,
        /// Case-insensitive substring filter
        #[arg(long)]
        filter: Option<String>,
    },
    /// Add an asset
    #[command(subcommand)]
    Add(AddCommand),
    /// Remove an asset by id
    Remove { kind: KindArg, id: String },
    /// Print a share URL for the whole collection, or for one asset
    Share {
        kind: Option<KindArg>,
        id: Option<String>,
    },
    /// Import a shared collection from a URL
    Import { url: String },
    /// Write one asset to <name>.json
    Export {
        kind: KindArg,
        id: String,
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Show the theme preference, or set/toggle it
    Theme {
        /// New theme; omit to toggle
        value: Option<ThemeArg>,
    },
}

#[derive(Subcommand)]
enum AddCommand {
    /// Add a typography style
    Typography {
        name: String,
        #[arg(long, default_value = "Helvetica Neue")]
        family: String,
        #[arg(long, default_value = "16px")]
        size: String,
        #[arg(long, default_value = "400")]
        weight: String,
        #[arg(long, default_value = "1.5")]
        line_height: String,
    },
    /// Add a palette color
    Color {
        name: String,
        #[arg(long, default_value = "#000000")]
        hex: String,
    },
    /// Add a two-stop gradient
    Gradient {
        name: String,
        #[arg(long, default_value = "#6366f1")]
        from: String,
        #[arg(long, default_value = "#ec4899")]
        to: String,
        /// Angle in degrees, 0-360
        #[arg(long, default_value_t = 135)]
        angle: u16,
    },
    /// Add a logo from a URL or a local image file
    Logo {
        /// Defaults to the file name when --file is given
        name: Option<String>,
        #[arg(long, conflicts_with = "file")]
        url: Option<String>,
        /// Local image file, embedded as a data URI
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Add an SVG icon from markup or a local .svg file
    Icon {
        /// Defaults to the file name when --file is given
        name: Option<String>,
        #[arg(long, conflicts_with = "file")]
        svg: Option<String>,
        /// Local .svg file, read as raw markup
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Add a reusable component snippet
    Component {
        name: String,
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "")]
        description: String,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum KindArg {
    Typography,
    Colors,
    Gradients,
    Logos,
    Icons,
    Components,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

/// Run a block against the store matching a kind argument
macro_rules! with_store {
    ($shell:expr, $kind:expr, $store:ident => $body:block) => {
        match $kind {
            KindArg::Typography => {
                let $store = &mut $shell.typography;
                $body
            }
            KindArg::Colors => {
                let $store = &mut $shell.colors;
                $body
            }
            KindArg::Gradients => {
                let $store = &mut $shell.gradients;
                $body
            }
            KindArg::Logos => {
                let $store = &mut $shell.logos;
                $body
            }
            KindArg::Icons => {
                let $store = &mut $shell.icons;
                $body
            }
            KindArg::Components => {
                let $store = &mut $shell.components;
                $body
            }
        }
    };
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let storage = match cli.dir {
        Some(dir) => DiskStorage::with_dir(dir),
        None => DiskStorage::new()?,
    };
    let mut shell = ShellController::new(Arc::new(storage), DEFAULT_ORIGIN);

    match cli.command {
        Command::List { kind, filter } => {
            let query = filter.unwrap_or_default();
            with_store!(shell, kind, store => {
                list_assets(store, &query);
            });
        }

        Command::Add(add) => run_add(&mut shell, add)?,

        Command::Remove { kind, id } => {
            let removed = with_store!(shell, kind, store => { store.delete(&id)? });
            if removed {
                println!("Removed {}", id);
            } else {
                println!("No asset with id {}", id);
            }
        }

        Command::Share { kind, id } => match (kind, id) {
            (Some(kind), Some(id)) => {
                let url = with_store!(shell, kind, store => {
                    match store.get(&id) {
                        Some(asset) => {
                            let asset = asset.clone();
                            Some(shell.share_asset(&asset.id, &asset.name, &asset)?)
                        }
                        None => None,
                    }
                });
                match url {
                    Some(url) => println!("{}", url),
                    None => println!("No asset with id {}", id),
                }
            }
            (None, None) => println!("{}", shell.share_all()?),
            _ => {
                eprintln!("Share one asset with both a kind and an id, or neither to share all");
                std::process::exit(2);
            }
        },

        Command::Import { url } => match shell.startup_import(&url)? {
            Some(_) => {
                let counts = shell.snapshot().counts;
                let total: usize = counts.iter().map(|(_, n)| n).sum();
                println!("Imported. Collection now holds {} assets.", total);
            }
            None => println!("Nothing imported (no share payload found, or it was malformed)."),
        },

        Command::Export { kind, id, out } => {
            let path = with_store!(shell, kind, store => {
                store
                    .get(&id)
                    .map(|asset| write_asset_json(&out, &asset.name, asset))
                    .transpose()?
            });
            match path {
                Some(path) => println!("Wrote {}", path.display()),
                None => println!("No asset with id {}", id),
            }
        }

        Command::Theme { value } => {
            let theme = match value {
                Some(ThemeArg::Light) => {
                    shell.set_theme(Theme::Light)?;
                    Theme::Light
                }
                Some(ThemeArg::Dark) => {
                    shell.set_theme(Theme::Dark)?;
                    Theme::Dark
                }
                None => shell.toggle_theme()?,
            };
            println!("{}", theme.as_str());
        }
    }

    Ok(())
}

fn run_add(shell: &mut ShellController, add: AddCommand) -> Result<()> {
    let added = match add {
        AddCommand::Typography {
            name,
            family,
            size,
            weight,
            line_height,
        } => shell
            .typography
            .add(&name, Typography::new(family, size, weight, line_height))?
            .map(|a| a.id.clone()),

        AddCommand::Color { name, hex } => shell
            .colors
            .add(&name, Color::new(hex))?
            .map(|a| a.id.clone()),

        AddCommand::Gradient {
            name,
            from,
            to,
            angle,
        } => shell
            .gradients
            .add(&name, Gradient::new(from, to, angle))?
            .map(|a| a.id.clone()),

        AddCommand::Logo { name, url, file } => {
            let payload = match (&url, &file) {
                (Some(url), None) => Logo::new(url.clone()),
                (None, Some(path)) => Logo::from_file(path)?,
                _ => Logo::new(String::new()), // missing content: add() is a no-op
            };
            let name = name
                .or_else(|| file_stem(file.as_deref()))
                .unwrap_or_default();
            shell.logos.add(&name, payload)?.map(|a| a.id.clone())
        }

        AddCommand::Icon { name, svg, file } => {
            let payload = match (&svg, &file) {
                (Some(svg), None) => Icon::new(svg.clone()),
                (None, Some(path)) => Icon::from_file(path)?,
                _ => Icon::new(String::new()), // missing content: add() is a no-op
            };
            let name = name
                .or_else(|| file_stem(file.as_deref()))
                .unwrap_or_default();
            shell.icons.add(&name, payload)?.map(|a| a.id.clone())
        }

        AddCommand::Component {
            name,
            code,
            description,
        } => shell
            .components
            .add(&name, Component::new(code, description))?
            .map(|a| a.id.clone()),
    };

    match added {
        Some(id) => println!("Added {}", id),
        None => println!("Nothing added: a name and the kind's content field are required."),
    }
    Ok(())
}

fn list_assets<P: atelier::data::AssetPayload>(store: &AssetStore<P>, query: &str) {
    let assets = store.filter(query);
    if assets.is_empty() {
        if query.is_empty() {
            println!("No assets yet.");
        } else {
            println!("No assets match '{}'.", query);
        }
        return;
    }

    for asset in assets {
        let summary = asset.payload.summary();
        if summary.is_empty() {
            println!("{}  {}", asset.id, asset.name);
        } else {
            println!("{}  {}  {}", asset.id, asset.name, summary);
        }
    }
}

fn file_stem(path: Option<&std::path::Path>) -> Option<String> {
    path.and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
