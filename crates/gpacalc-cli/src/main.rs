//! gpacalc CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use gpacalc_core::state::Theme;
use gpacalc_core::Grade;

mod commands;
mod context;

#[derive(Parser)]
#[command(
    name = "gpacalc",
    version,
    about = "Semester GPA, CGPA, and improvement calculator"
)]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the semesters of the grade table
    Semesters,

    /// Semester GPA from per-course grades
    Sgpa {
        #[command(subcommand)]
        action: SgpaAction,
    },

    /// Cumulative GPA from per-semester GPAs
    Cgpa {
        #[command(subcommand)]
        action: CgpaAction,
    },

    /// Project a semester GPA after retaking courses
    Improve {
        #[command(subcommand)]
        action: ImproveAction,
    },

    /// Export a report of one view
    Export {
        /// Which view to export
        view: ExportView,

        /// Output format
        #[arg(long, value_enum, default_value_t = ExportFormat::Html)]
        format: ExportFormat,

        /// Output directory (default: report_dir from config)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Reset all entered grades and GPAs
    ClearAll {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },

    /// Show or set the table style
    Theme {
        /// New theme: light or dark
        theme: Option<Theme>,
    },

    /// Create starter config and sample grade table
    Init,

    /// Validate a grade table TOML file
    Validate {
        /// Path to the grade table
        #[arg(long)]
        grade_table: PathBuf,
    },
}

#[derive(Subcommand)]
pub enum SgpaAction {
    /// Select the semester to enter grades for (clears previous grades)
    Select { semester: String },
    /// Set the grade of a course, e.g. `sgpa grade "EEE 101" A-`
    Grade {
        course: String,
        grade: Grade,
    },
    /// Show grades and semester GPA
    Show,
}

#[derive(Subcommand)]
pub enum CgpaAction {
    /// Enter the GPA of a completed semester
    Set { semester: String, gpa: String },
    /// Remove the GPA of a semester
    Clear { semester: String },
    /// Show per-semester GPAs and the CGPA
    Show,
}

#[derive(Subcommand)]
pub enum ImproveAction {
    /// Select the semester to project
    Select { semester: String },
    /// Enter the GPA the semester was completed with
    Gpa { gpa: String },
    /// Add a course to retake
    Add { course: String },
    /// Drop a course from the projection
    Remove { course: String },
    /// Set the expected grade of an added course
    Grade {
        course: String,
        grade: Grade,
    },
    /// Show the projection
    Show,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportView {
    Sgpa,
    Cgpa,
    Improvement,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Html,
    Markdown,
    Json,
    All,
}

fn main() {
    let directive: tracing_subscriber::filter::Directive = match "gpacalc=info".parse() {
        Ok(directive) => directive,
        Err(e) => {
            eprintln!("Error: invalid log directive: {e}");
            process::exit(1);
        }
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(directive))
        .init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result = match cli.command {
        Commands::Semesters => commands::semesters::execute(config),
        Commands::Sgpa { action } => commands::sgpa::execute(config, action),
        Commands::Cgpa { action } => commands::cgpa::execute(config, action),
        Commands::Improve { action } => commands::improve::execute(config, action),
        Commands::Export {
            view,
            format,
            output,
        } => commands::export::execute(config, view, format, output),
        Commands::ClearAll { yes } => commands::clear_all::execute(config, yes),
        Commands::Theme { theme } => commands::theme::execute(config, theme),
        Commands::Init => commands::init::execute(),
        Commands::Validate { grade_table } => commands::validate::execute(grade_table),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
