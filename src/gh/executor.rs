use async_trait::async_trait;
use color_eyre::eyre::{eyre, Result};
use std::time::Duration;
use tokio::process::Command;

const GH_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw access to the GitHub API. Responses are returned as unparsed JSON.
#[async_trait]
pub trait GhApi: Send + Sync {
    /// GET a REST path (`repos/o/r/...`) or an absolute API URL.
    async fn rest_get(&self, path: &str) -> Result<String>;

    /// Run a GraphQL query with string variables.
    async fn graphql(&self, query: &str, variables: &[(&str, &str)]) -> Result<String>;
}

/// Talks to GitHub through `gh api`, so auth and host config come from `gh`.
pub struct GhExecutor;

impl GhExecutor {
    pub async fn check_available(&self) -> Result<()> {
        run_gh(&["auth", "status"]).await.map(|_| ())
    }

    pub async fn detect_repo(&self) -> Result<String> {
        let output = run_gh(&[
            "repo",
            "view",
            "--json",
            "nameWithOwner",
            "-q",
            ".nameWithOwner",
        ])
        .await?;
        let repo = output.trim().to_string();
        if repo.is_empty() {
            return Err(eyre!("Could not detect repository. Use --repo flag."));
        }
        Ok(repo)
    }
}

#[async_trait]
impl GhApi for GhExecutor {
    async fn rest_get(&self, path: &str) -> Result<String> {
        run_gh(&["api", "--method", "GET", path]).await
    }

    async fn graphql(&self, query: &str, variables: &[(&str, &str)]) -> Result<String> {
        let query_arg = format!("query={query}");
        let var_args: Vec<String> = variables.iter().map(|(k, v)| format!("{k}={v}")).collect();
        let mut args = vec!["api", "graphql", "-f", query_arg.as_str()];
        for v in &var_args {
            args.push("-f");
            args.push(v.as_str());
        }
        run_gh(&args).await
    }
}

async fn run_gh(args: &[&str]) -> Result<String> {
    let started = std::time::Instant::now();
    let command = args
        .iter()
        .filter(|a| !a.starts_with("query="))
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let spawned = tokio::time::timeout(GH_TIMEOUT, Command::new("gh").args(args).output()).await;
    let output = match spawned {
        Ok(Ok(output)) => output,
        Ok(Err(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(eyre!("gh CLI not found. Install it from https://cli.github.com/"));
        }
        Ok(Err(e)) => return Err(eyre!("failed to run gh {command}: {e}")),
        Err(_) => {
            return Err(eyre!("gh {command} timed out after {}s", GH_TIMEOUT.as_secs()));
        }
    };
    let elapsed_ms = started.elapsed().as_millis();

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        tracing::debug!(%command, elapsed_ms, stderr = %stderr.trim(), "gh request failed");
        return Err(eyre!("{}", classify_gh_error(&stderr)));
    }

    tracing::debug!(%command, elapsed_ms, "gh request completed");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Turns `gh` stderr into a message the user can act on.
pub fn classify_gh_error(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.contains("not logged") || trimmed.contains("auth login") {
        "Not authenticated with gh. Run `gh auth login` first.".to_string()
    } else if trimmed.contains("not a git repository") || trimmed.contains("could not determine") {
        "Not in a GitHub repository. Use --repo flag or cd into a repo.".to_string()
    } else if trimmed.contains("HTTP 404") {
        format!("not found: {trimmed}")
    } else if trimmed.is_empty() {
        "gh command failed".to_string()
    } else {
        format!("gh command failed: {trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_out_host_asks_for_login() {
        let msg = classify_gh_error("You are not logged into any GitHub hosts. Run gh auth login to authenticate.\n");
        assert_eq!(msg, "Not authenticated with gh. Run `gh auth login` first.");
    }

    #[test]
    fn repo_detection_outside_a_checkout() {
        for stderr in [
            "fatal: not a git repository (or any of the parent directories): .git",
            "could not determine base repo: no git remotes found",
        ] {
            assert!(classify_gh_error(stderr).starts_with("Not in a GitHub repository"), "{stderr}");
        }
    }

    #[test]
    fn unknown_run_id_reports_not_found() {
        let msg = classify_gh_error("gh: Not Found (HTTP 404)\n");
        assert_eq!(msg, "not found: gh: Not Found (HTTP 404)");
    }

    #[test]
    fn server_errors_keep_gh_message() {
        assert_eq!(
            classify_gh_error("gh: Server Error (HTTP 502)"),
            "gh command failed: gh: Server Error (HTTP 502)"
        );
        assert_eq!(classify_gh_error("   \n  "), "gh command failed");
    }
}
