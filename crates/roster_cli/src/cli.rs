use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    author,
    version,
    about = "Manage courses, students and course enrollments."
)]
pub struct Cli {
    /// SQLite database file (created and migrated on first use).
    #[arg(long, env = "ROSTER_DB", value_name = "PATH", default_value = "roster.db")]
    pub db: PathBuf,

    /// Use a throwaway in-memory store instead of the database file.
    #[arg(long)]
    pub memory: bool,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "ROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rotating log files. Logs go to stderr when unset.
    #[arg(long, env = "ROSTER_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print core version information.
    Ping,
    /// Create, show or list courses.
    Course {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Create, show or list students with their enrolled courses.
    Student {
        #[command(subcommand)]
        action: EntityAction,
    },
    /// Enroll a student in a course.
    Register {
        student_id: String,
        course_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum EntityAction {
    /// Create a new entity with a generated 8-digit id.
    Create { name: String },
    /// Show one entity by id.
    Get { id: String },
    /// List every entity.
    List,
}
