//! CLI administration tool for courses-api.
//!
//! Inspects and maintains the course database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # List all courses
//! cargo run --bin admin -- courses list
//!
//! # Show one course
//! cargo run --bin admin -- courses show 3f2b8c1e-...
//!
//! # Delete a course without the confirmation prompt
//! cargo run --bin admin -- courses delete 3f2b8c1e-... -y
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or the `DB_*` components (see `config` module)

use courses_api::application::services::CourseService;
use courses_api::config::{Config, StorageBackend};
use courses_api::domain::entities::Course;
use courses_api::infrastructure::persistence::PgCourseRepository;
use courses_api::server::{connect_database, run_migrations};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing courses-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect and delete courses
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[derive(Subcommand)]
enum CourseAction {
    /// List all courses
    List,

    /// Show a single course
    Show {
        /// Course id (UUID)
        id: String,
    },

    /// Delete a course
    Delete {
        /// Course id (UUID)
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

type PgCourseService = CourseService<PgCourseRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    config.storage_backend = StorageBackend::Postgres;

    let pool = connect_database(&config).await?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Courses { action } => {
            let repo = Arc::new(PgCourseRepository::new(Arc::new(pool)));
            handle_course_action(action, &CourseService::new(repo)).await?;
        }
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            run_migrations(pool).await?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

async fn handle_course_action(action: CourseAction, service: &PgCourseService) -> Result<()> {
    match action {
        CourseAction::List => list_courses(service).await,
        CourseAction::Show { id } => show_course(service, &id).await,
        CourseAction::Delete { id, yes } => delete_course(service, &id, yes).await,
    }
}

/// Lists all courses in creation order.
///
/// # Output Format
///
/// ```text
/// 📚 Courses
///
///   ID                                    Level          Title
///   ─────────────────────────────────────────────────────────────────────
///   0b6c6b4e-8a35-4a4e-9a0f-5c1d2f9e7b11  Débutant       Intro to Rust
/// ```
async fn list_courses(service: &PgCourseService) -> Result<()> {
    println!("{}", "📚 Courses".bright_blue().bold());
    println!();

    let courses = service
        .find_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list courses: {}", e))?;

    if courses.is_empty() {
        println!("{}", "  No courses found".yellow());
        return Ok(());
    }

    println!(
        "  {:<37} {:<14} {}",
        "ID".bright_white().bold(),
        "Level".bright_white().bold(),
        "Title".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for course in &courses {
        println!(
            "  {:<37} {:<14} {}",
            course.id.to_string().bright_black(),
            course.level.as_str(),
            course.title.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        courses.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_course(service: &PgCourseService, id: &str) -> Result<()> {
    let course = service
        .find_one(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_course(&course);
    Ok(())
}

/// Deletes a course after confirmation (default: No) unless `--yes` is given.
async fn delete_course(service: &PgCourseService, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Course".bright_blue().bold());
    println!();

    let course = service
        .find_one(id)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    print_course(&course);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this course?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let confirmation = service
        .remove(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete course: {}", e))?;

    println!();
    println!("{}", format!("✅ {}", confirmation.message).green().bold());
    println!();

    Ok(())
}

fn print_course(course: &Course) {
    println!("  ID:          {}", course.id.to_string().bright_black());
    println!("  Title:       {}", course.title.cyan());
    println!("  Level:       {}", course.level.as_str());
    println!("  Description: {}", course.description);
    println!();
}
