//! staffdir - Main entry point
//!
//! Launches the interactive directory, or runs one of the headless
//! commands (`list`, `validate`).

use anyhow::{Context, Result};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::File;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use staffdir::cli::{Cli, Commands, ListArgs};
use staffdir::engine::{Directory, FilterCriteria, ViewState};
use staffdir::routes::{DIRECTORY_PATH, Route};
use staffdir::seed::{SeedFile, sample_employees};
use staffdir::{App, Employee};

/// Initialize tracing. `RUST_LOG` overrides `default_level`.
fn init_tracing(log_file: Option<&Path>, default_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

/// Main application entry point
fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // The TUI owns the screen, so it only logs warnings unless redirected
    let default_level = match cli.command {
        None | Some(Commands::Browse { .. }) => "warn",
        Some(_) => "info",
    };
    init_tracing(cli.log_file.as_deref(), default_level)?;
    debug!("CLI arguments parsed");

    match cli.command {
        Some(Commands::Validate { file }) => {
            info!(file = %file.display(), "Validating seed file");
            match SeedFile::load_from_file(&file).and_then(|seed| {
                seed.validate()?;
                Ok(seed)
            }) {
                Ok(seed) => {
                    println!(
                        "✓ Seed file is valid: {} ({} employees)",
                        file.display(),
                        seed.employees.len()
                    );
                }
                Err(e) => {
                    error!("Seed validation failed: {:#}", e);
                    eprintln!("✗ Seed validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::List(args)) => {
            let directory = load_directory(cli.seed.as_deref())?;
            run_list(&directory, &args)?;
        }
        Some(Commands::Browse { path }) => {
            let directory = load_directory(cli.seed.as_deref())?;
            run_tui(directory, &path)?;
        }
        None => {
            let directory = load_directory(cli.seed.as_deref())?;
            run_tui(directory, DIRECTORY_PATH)?;
        }
    }

    Ok(())
}

/// Build the session directory from `--seed` or the built-in sample staff
fn load_directory(seed: Option<&Path>) -> Result<Directory> {
    let employees: Vec<Employee> = match seed {
        Some(path) => {
            let seed = SeedFile::load_from_file(path)?;
            seed.validate()
                .with_context(|| format!("Invalid seed file {}", path.display()))?;
            info!(path = %path.display(), count = seed.employees.len(), "Loaded seed file");
            seed.employees
        }
        None => sample_employees(),
    };
    Ok(Directory::new(employees)?)
}

/// Print one page of the directory
fn run_list(directory: &Directory, args: &ListArgs) -> Result<()> {
    let filters = FilterCriteria {
        first_name: args.first_name.clone(),
        department: args
            .department
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown department '{}'", args.department))?,
        role: args
            .role
            .parse()
            .map_err(|_| anyhow::anyhow!("Unknown role '{}'", args.role))?,
    };

    let mut view = ViewState::new();
    view.set_search_term(args.search.as_str());
    view.set_filters(filters);
    view.set_sort_key(args.sort);
    view.set_page_size(args.page_size);
    let total = directory.view(&view).total_pages;
    view.go_to_page(args.page, total);

    let page = directory.view(&view);
    info!(visible = page.visible_count, page = page.current_page, "Listing directory");

    println!(
        "{:<5} {:<14} {:<14} {:<34} {:<12} {}",
        "ID", "First Name", "Last Name", "Email", "Department", "Role"
    );
    for employee in &page.items {
        println!(
            "{:<5} {:<14} {:<14} {:<34} {:<12} {}",
            employee.id,
            employee.first_name,
            employee.last_name,
            employee.email,
            employee.department,
            employee.role
        );
    }
    if page.items.is_empty() {
        println!("No employees found");
    }
    println!("Page {} of {}", page.current_page, page.total_pages);
    Ok(())
}

/// Run the interactive directory
fn run_tui(directory: Directory, path: &str) -> Result<()> {
    let route = Route::resolve(path);
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(directory, route);
            app.run(&mut terminal).map_err(anyhow::Error::from)
        });

    // Always restore the terminal, even if the app failed
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);

    result
}
