use crate::gh::api::RepoRef;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ghrv", version, about = "Inspect GitHub Actions workflow runs")]
pub struct Cli {
    /// Repository in owner/repo format (auto-detected from cwd)
    #[arg(short = 'R', long, global = true)]
    pub repo: Option<RepoRef>,

    /// Log gh calls and fetch steps to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// View a summary of a workflow run
    View(ViewArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ViewArgs {
    /// ID of the run to view; prompts for one when omitted
    pub run_id: Option<u64>,

    /// Exit with non-zero status if the run failed
    #[arg(short, long)]
    pub exit_status: bool,

    /// Show job steps and durations
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_args(argv: &[&str]) -> ViewArgs {
        let cli = Cli::try_parse_from(std::iter::once("ghrv").chain(argv.iter().copied()))
            .expect("arguments should parse");
        match cli.command {
            Command::View(args) => args,
        }
    }

    #[test]
    fn blank_view() {
        let args = view_args(&["view"]);
        assert_eq!(args.run_id, None);
        assert!(!args.exit_status);
        assert!(!args.verbose);
    }

    #[test]
    fn exit_status_with_id() {
        let args = view_args(&["view", "-e", "1234"]);
        assert_eq!(args.run_id, Some(1234));
        assert!(args.exit_status);
    }

    #[test]
    fn long_flags() {
        let args = view_args(&["view", "--verbose", "--exit-status"]);
        assert!(args.verbose);
        assert!(args.exit_status);
    }

    #[test]
    fn non_numeric_run_id_rejected() {
        assert!(Cli::try_parse_from(["ghrv", "view", "abc"]).is_err());
    }

    #[test]
    fn repo_flag_is_validated() {
        let cli = Cli::try_parse_from(["ghrv", "-R", "OWNER/REPO", "view", "1"]).unwrap();
        assert_eq!(cli.repo.map(|r| r.to_string()).as_deref(), Some("OWNER/REPO"));
        assert!(Cli::try_parse_from(["ghrv", "--repo", "nope", "view"]).is_err());
    }
}
