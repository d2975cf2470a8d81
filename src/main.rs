use clap::Parser;
use issue_import::cli::logging::{log_directive, setup_logging};
use issue_import::cli::{Cli, Commands};
use issue_import::core::Config;
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping to `head`, `jq`, etc. causes a panic on broken pipe.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    let config = Config::load();
    setup_logging(&log_directive(
        &global,
        std::env::var("RUST_LOG").ok(),
        &config,
    ));

    match cli.command {
        Commands::Import(args) => {
            issue_import::cli::commands::import::run(args, &global, &config).await
        }
        Commands::Importers(args) => issue_import::cli::commands::importers::run(args),
        Commands::Template(args) => issue_import::cli::commands::template::run(args),
        Commands::Completions(args) => issue_import::cli::commands::completions::run(args),
    }
}
