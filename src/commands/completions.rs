//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{Result, SitepatchError};

/// Generate shell completions
pub fn run(args: CompletionsArgs) -> Result<()> {
    let shell_name = args.shell.to_lowercase();
    let shell = match shell_name.as_str() {
        "bash" => clap_complete::Shell::Bash,
        "elvish" => clap_complete::Shell::Elvish,
        "fish" => clap_complete::Shell::Fish,
        "powershell" | "pwsh" => clap_complete::Shell::PowerShell,
        "zsh" => clap_complete::Shell::Zsh,
        _ => {
            return Err(SitepatchError::UnknownShell {
                shell: args.shell.clone(),
            });
        }
    };

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(shell, &mut cmd, "sitepatch", &mut std::io::stdout().lock());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_zsh() {
        let args = CompletionsArgs {
            shell: "zsh".to_string(),
        };
        assert!(run(args).is_ok());
    }

    #[test]
    fn test_completions_unknown_shell() {
        let args = CompletionsArgs {
            shell: "tcsh".to_string(),
        };
        let err = run(args).unwrap_err();
        assert!(matches!(err, SitepatchError::UnknownShell { .. }));
        assert!(err.to_string().contains("tcsh"));
    }

    #[test]
    fn test_completions_uppercase() {
        let args = CompletionsArgs {
            shell: "BASH".to_string(),
        };
        assert!(run(args).is_ok());
    }
}
