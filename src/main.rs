//! # Lolev Label CLI
//!
//! Command-line interface for composing, exporting and sharing labels.
//!
//! ## Usage
//!
//! ```bash
//! # Preview SVG (with guides) on stdout
//! lolev-label render --query 'name=Hazy+Daze&style=IPA&abv=6.8&temperature=45&margins=true'
//!
//! # Export artwork for a shared link into a directory
//! lolev-label render --url 'https://labels.lolev.beer/?name=Hazy+Daze&style=IPA&abv=6.8&temperature=45' \
//!     --export --out-dir out/
//!
//! # Remember the last label between runs
//! lolev-label --store ~/.lolev-label.json render --query 'name=Pils&style=Lager&abv=4.8&temperature=38'
//! lolev-label --store ~/.lolev-label.json share
//!
//! # Barcode and QR downloads
//! lolev-label barcode 036000291452 --out-dir out/
//! lolev-label qr hazy-daze --out-dir out/
//!
//! # HTTP server
//! lolev-label serve --listen 0.0.0.0:8080
//! ```

use clap::{Args, Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lolev_label::{
    LabelConfig, LabelError,
    codec::{self, derive_variant},
    compose,
    export::{ClipboardWriter, DirectoryExporter, ExportArtifact, FileExporter, StreamClipboard},
    metrics::{QR_BASE_URL, SHARE_BASE_URL},
    render::{self, Viewport},
    server::{self, ServerConfig},
    store::{self, LabelStore},
};

/// Lolev Label - Printable beverage label composer
#[derive(Parser, Debug)]
#[command(name = "lolev-label")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file holding the last edited label
    #[arg(long, global = true, value_name = "FILE")]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Where a label configuration comes from.
#[derive(Args, Debug)]
struct Source {
    /// Label parameters as a query string
    #[arg(long, conflicts_with = "url")]
    query: Option<String>,

    /// Full share link to read the parameters from
    #[arg(long)]
    url: Option<String>,
}

impl Source {
    fn query(&self) -> String {
        match (&self.query, &self.url) {
            (Some(query), _) => query.clone(),
            (None, Some(url)) => codec::query_of(url),
            (None, None) => String::new(),
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a label as SVG
    Render {
        #[command(flatten)]
        source: Source,

        /// Strip guides, placeholders and bleed lines
        #[arg(long)]
        export: bool,

        /// Zoom factor (1-16)
        #[arg(long, default_value = "1")]
        zoom: f64,

        /// Canvas x to center the view on
        #[arg(long)]
        cx: Option<f64>,

        /// Canvas y to center the view on
        #[arg(long)]
        cy: Option<f64>,

        /// Write into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Print the share link for a label
    Share {
        #[command(flatten)]
        source: Source,

        /// Page the link points at
        #[arg(long, default_value = SHARE_BASE_URL)]
        base_url: String,
    },

    /// Print the variant slug derived from a name
    Variant {
        /// Display name
        name: String,
    },

    /// Write a UPC-A barcode SVG
    Barcode {
        /// 12-digit UPC
        upc: String,

        /// Ink color as #RRGGBB
        #[arg(long, default_value = "#000000")]
        color: String,

        /// Output directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Write a QR code SVG linking to a variant's page
    Qr {
        /// Variant slug
        variant: String,

        /// Ink color as #RRGGBB
        #[arg(long, default_value = "#000000")]
        color: String,

        /// Prefix of the beer pages
        #[arg(long, default_value = QR_BASE_URL)]
        base_url: String,

        /// Output directory
        #[arg(long, value_name = "DIR", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Page that share links point at
        #[arg(long, default_value = SHARE_BASE_URL)]
        base_url: String,

        /// Prefix of the beer pages QR codes link to
        #[arg(long, default_value = QR_BASE_URL)]
        qr_base_url: String,
    },
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), LabelError> {
    let cli = Cli::parse();
    let store = cli.store.map(LabelStore::new);

    match cli.command {
        Commands::Render {
            source,
            export,
            zoom,
            cx,
            cy,
            out_dir,
        } => {
            let config = load(&source, store.as_ref())?;
            let scene = compose(&config);
            if let Some(message) = scene.message() {
                info!("{}", message);
            }

            match out_dir {
                Some(dir) => {
                    let artifact = if export {
                        ExportArtifact::label(&config)
                    } else {
                        let viewport = viewport(zoom, cx, cy);
                        ExportArtifact::svg(
                            format!("preview-{}", codec::export_filename(&config.name, &config.variant)),
                            render::to_svg_with_viewport(&scene, &viewport),
                        )
                    };
                    let path = DirectoryExporter::new(dir).export(&artifact)?;
                    println!("{}", path.display());
                }
                None => {
                    let svg = if export {
                        render::export_svg(&scene)
                    } else {
                        render::to_svg_with_viewport(&scene, &viewport(zoom, cx, cy))
                    };
                    io::stdout().write_all(svg.as_bytes())?;
                }
            }
        }

        Commands::Share { source, base_url } => {
            let config = load(&source, store.as_ref())?;
            let mut clipboard = StreamClipboard::new(io::stdout());
            clipboard.write_text(&codec::share_url(&base_url, &config))?;
        }

        Commands::Variant { name } => {
            println!("{}", derive_variant(&name));
        }

        Commands::Barcode {
            upc,
            color,
            out_dir,
        } => {
            let artifact = ExportArtifact::barcode(&upc, &color)?;
            let path = DirectoryExporter::new(out_dir).export(&artifact)?;
            println!("{}", path.display());
        }

        Commands::Qr {
            variant,
            color,
            base_url,
            out_dir,
        } => {
            let artifact = ExportArtifact::qr(&base_url, &variant, &color)?;
            let path = DirectoryExporter::new(out_dir).export(&artifact)?;
            println!("{}", path.display());
        }

        Commands::Serve {
            listen,
            base_url,
            qr_base_url,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                share_base_url: base_url,
                qr_base_url,
            };
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Resolve the label for a command and remember it when a store is in use.
fn load(source: &Source, store: Option<&LabelStore>) -> Result<LabelConfig, LabelError> {
    let config = store::resolve(&source.query(), store);
    if let Some(store) = store {
        store.save(&config)?;
    }
    Ok(config)
}

fn viewport(zoom: f64, cx: Option<f64>, cy: Option<f64>) -> Viewport {
    let default = Viewport::default();
    Viewport::new(
        zoom,
        cx.unwrap_or(default.center_x()),
        cy.unwrap_or(default.center_y()),
    )
}
