use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::types::{PageSize, SortKey};

/// staffdir - A terminal employee directory
#[derive(Parser, Debug)]
#[command(name = "staffdir")]
#[command(about = "Search, filter, sort and edit an employee directory from the terminal")]
#[command(version)]
pub struct Cli {
    /// JSON seed file to load instead of the built-in sample staff
    #[arg(long, global = true)]
    pub seed: Option<PathBuf>,

    /// Write log output to this file instead of stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive directory (default)
    Browse {
        /// Start path; anything other than "/" shows the not-found view
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Print one page of the directory and exit
    List(ListArgs),
    /// Validate a seed file
    Validate {
        /// Path to the seed file to validate
        file: PathBuf,
    },
}

/// Options for the headless listing
#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Case-insensitive search over first name, last name and email
    #[arg(short, long, default_value = "")]
    pub search: String,

    /// Filter: first name contains (case-insensitive)
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Filter: department name, or "all"
    #[arg(long, default_value = "all")]
    pub department: String,

    /// Filter: role name, or "all"
    #[arg(long, default_value = "all")]
    pub role: String,

    /// Sort key (none, firstName, department)
    #[arg(long, default_value_t = SortKey::None)]
    pub sort: SortKey,

    /// Employees per page (10, 25, 50, 100)
    #[arg(long, default_value_t = PageSize::Ten)]
    pub page_size: PageSize,

    /// 1-based page number
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["staffdir"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.seed.is_none());
    }

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "staffdir",
            "list",
            "--search",
            "an",
            "--department",
            "IT",
            "--sort",
            "firstName",
            "--page-size",
            "25",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::List(args)) => {
                assert_eq!(args.search, "an");
                assert_eq!(args.department, "IT");
                assert_eq!(args.sort, SortKey::FirstName);
                assert_eq!(args.page_size, PageSize::TwentyFive);
                assert_eq!(args.page, 2);
            }
            other => panic!("expected list, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_page_size_rejected() {
        assert!(Cli::try_parse_from(["staffdir", "list", "--page-size", "30"]).is_err());
    }

    #[test]
    fn test_browse_path_and_global_seed() {
        let cli =
            Cli::try_parse_from(["staffdir", "browse", "--path", "/missing", "--seed", "s.json"])
                .unwrap();
        assert_eq!(cli.seed, Some(PathBuf::from("s.json")));
        assert!(matches!(cli.command, Some(Commands::Browse { path }) if path == "/missing"));
    }
}
