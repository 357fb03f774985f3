use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    sitepatch completions bash > ~/.bash_completion.d/sitepatch\n\n\
                  Generate zsh completions:\n    sitepatch completions zsh > ~/.zfunc/_sitepatch\n\n\
                  Generate fish completions:\n    sitepatch completions fish > ~/.config/fish/completions/sitepatch.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
