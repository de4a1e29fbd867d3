//! Ark Grid optimizer CLI

use anyhow::{bail, Context};
use arkgrid::{GemType, GridOptimizer, Role, SearchConfig, Solver};
use arkgrid_cli::{catalog_table, Session, Side, SideReport};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arkgrid")]
#[command(about = "Ark Grid gem optimizer")]
#[command(version)]
struct Cli {
    /// Log filter, e.g. "debug" or "arkgrid_search=debug" (overrides RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write an empty session (three Relic cores per side)
    Init {
        /// Session file to create
        file: PathBuf,

        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Set the gems of one type in a session
    Set {
        /// Session file
        file: PathBuf,

        /// Inventory to edit
        #[arg(value_enum)]
        side: SideArg,

        /// Gem type (A-H, K, L)
        gem: GemType,

        /// Side-point value of each gem (0-20)
        points: Vec<u32>,

        /// Set the gem count instead, padding with zero-valued gems
        #[arg(short, long, conflicts_with = "points")]
        count: Option<usize>,
    },

    /// Find the best gem assignment for a session
    Solve {
        /// Session file
        file: PathBuf,

        /// Which grid to optimize
        #[arg(short, long, value_enum, default_value = "both")]
        side: SideSelection,

        /// Score as a support build regardless of the session
        #[arg(long)]
        support: bool,

        /// Worker threads (0 = all cores, 1 = sequential)
        #[arg(short, long, default_value = "0")]
        threads: usize,

        /// Time limit per side in milliseconds (0 = unlimited)
        #[arg(long, default_value = "0")]
        time_limit: u64,

        /// Output file for results (JSON)
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Print the gem catalog
    Catalog,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    /// Class grid (order path)
    Class,
    /// General grid (chaos path)
    General,
}

impl From<SideArg> for Side {
    fn from(arg: SideArg) -> Self {
        match arg {
            SideArg::Class => Side::Class,
            SideArg::General => Side::General,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SideSelection {
    Class,
    General,
    Both,
}

impl SideSelection {
    fn sides(self) -> &'static [Side] {
        match self {
            SideSelection::Class => &[Side::Class],
            SideSelection::General => &[Side::General],
            SideSelection::Both => &Side::BOTH,
        }
    }
}

fn init_logging(log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level.as_deref());

    match cli.command {
        Commands::Init { file, force } => {
            if file.exists() && !force {
                bail!(
                    "{} already exists (use --force to overwrite)",
                    file.display()
                );
            }
            Session::new()
                .save(&file)
                .with_context(|| format!("writing {}", file.display()))?;
            println!("Session written to: {}", file.display());
        }

        Commands::Set {
            file,
            side,
            gem,
            points,
            count,
        } => {
            let mut session =
                Session::load(&file).with_context(|| format!("loading {}", file.display()))?;
            let side = Side::from(side);

            match count {
                Some(n) => session.resize_gems(side, gem, n),
                None => session.set_gems(side, gem, &points),
            }
            session
                .save(&file)
                .with_context(|| format!("writing {}", file.display()))?;

            println!(
                "{} {}: {:?}",
                side.label(),
                gem,
                session.inventory(side).side_points(gem)
            );
        }

        Commands::Solve {
            file,
            side,
            support,
            threads,
            time_limit,
            json,
        } => {
            let session =
                Session::load(&file).with_context(|| format!("loading {}", file.display()))?;
            let role = if support {
                Role::Support
            } else {
                session.role()
            };

            let config = SearchConfig::new()
                .with_threads(threads)
                .with_time_limit(time_limit);
            let optimizer = GridOptimizer::new(config);

            let mut reports = Vec::new();
            for &side in side.sides() {
                let problem = session.problem(side, role);
                let result = optimizer
                    .solve(&problem)
                    .with_context(|| format!("optimizing {} grid", side.label()))?;

                let report = SideReport::new(side, &problem, &result);
                println!("{}", report);
                reports.push(report);
            }

            if let Some(path) = json {
                let out = serde_json::to_string_pretty(&reports)?;
                std::fs::write(&path, out)?;
                println!("Results saved to: {}", path.display());
            }
        }

        Commands::Catalog => {
            print!("{}", catalog_table());
        }
    }

    Ok(())
}
