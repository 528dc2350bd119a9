use clap::Parser;
use miette::Result;
use upkeep::cli::commands;
use upkeep::cli::{logging, Cli, Commands};

fn main() -> Result<()> {
    // Reset SIGPIPE so piping into `head` ends quietly instead of panicking
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
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
    logging::init(global.verbose);

    match cli.command {
        Commands::Pages => commands::pages::run(&global),
        Commands::List(args) => commands::list::run(args, &global),
        Commands::Show(args) => commands::show::run(args, &global),
        Commands::New(args) => commands::new::run(args, &global),
        Commands::Edit(args) => commands::edit::run(args, &global),
        Commands::Delete(args) => commands::delete::run(args, &global),
        Commands::Schema(args) => commands::schema::run(args, &global),
        Commands::Shell(args) => commands::shell::run(args, &global),
        Commands::Config(cmd) => commands::config::run(cmd, &global),
        Commands::Completions(args) => commands::completions::run(args),
    }
}
