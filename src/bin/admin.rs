//! CLI tool for inspecting the demo server's static configuration.
//!
//! # Usage
//!
//! ```bash
//! # Print the route registry and demo catalog
//! cargo run --bin admin -- routes
//!
//! # Validate virtual route fallbacks
//! cargo run --bin admin -- routes check
//!
//! # Load and validate configuration from the environment
//! cargo run --bin admin -- config
//!
//! # Print the seeded contact list
//! cargo run --bin admin -- contacts
//! ```

use htmx_demos::application::services::survey::SURVEY_STEPS;
use htmx_demos::config;
use htmx_demos::domain::entities::{Contact, DEMOS, ROUTES, route};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

/// CLI tool for the htmx-demos server.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Show the route registry
    Routes {
        #[command(subcommand)]
        action: Option<RoutesAction>,
    },

    /// Load, validate and print configuration
    Config,

    /// Show the seeded contact list
    Contacts,
}

#[derive(Subcommand)]
enum RoutesAction {
    /// Validate virtual route fallbacks
    Check,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Routes { action: None } => print_routes(),
        Commands::Routes {
            action: Some(RoutesAction::Check),
        } => check_routes()?,
        Commands::Config => print_config()?,
        Commands::Contacts => print_contacts(),
    }

    Ok(())
}

fn print_routes() {
    println!("{}", "Registered routes".bold());
    for r in ROUTES {
        let fallback = r
            .fallback
            .map(|f| format!("-> {}", f.path))
            .unwrap_or_default();
        let permissions: Vec<String> = r.permissions.iter().map(|p| p.to_string()).collect();
        println!(
            "  {:<6} {:<22} {:<8} [{}] {}",
            r.method.as_str().cyan(),
            r.path,
            r.interaction.to_string().yellow(),
            permissions.join(","),
            fallback.dimmed()
        );
    }

    println!();
    println!("{}", "Survey steps".bold());
    for step in &SURVEY_STEPS {
        let next = step
            .next
            .map(|n| format!("asks {} -> {}", n.item_name, n.post_url))
            .unwrap_or_else(|| "last step".to_string());
        println!("  {:<6} {:<22} {:<6} {}", "POST".cyan(), step.path, step.progress, next);
    }

    println!();
    println!("{}", "Demo pages".bold());
    for demo in &DEMOS {
        let marker = if demo.is_interactive() {
            "interactive".green()
        } else {
            "static".dimmed()
        };
        println!("  {:<6} {:<22} {:<12} {}", "GET".cyan(), demo.path(), marker, demo.title);
    }
}

fn check_routes() -> Result<()> {
    route::validate(&ROUTES).context("Route registry is invalid")?;

    let count = route::virtual_routes(&ROUTES).count();
    println!("{} {} virtual routes have a fallback", "✓".green(), count);
    Ok(())
}

fn print_config() -> Result<()> {
    let config = config::load_from_env().context("Configuration is invalid")?;

    println!("{}", "Configuration".bold());
    println!("  Listen address:   {}", config.listen_addr);
    println!("  Static directory: {}", config.static_dir);
    println!("  Search delay:     {}ms", config.search_delay_ms);
    println!("  Log level:        {}", config.log_level);
    println!("  Log format:       {}", config.log_format);
    println!("{} Configuration is valid", "✓".green());
    Ok(())
}

fn print_contacts() {
    println!("{}", "Seeded contacts".bold());
    for contact in Contact::seed() {
        let name = if contact.deleted {
            contact.name.strikethrough().dimmed()
        } else if contact.is_protected() {
            contact.name.yellow()
        } else {
            contact.name.normal()
        };
        println!("  {:>2}  {}", contact.id, name);
    }
}
