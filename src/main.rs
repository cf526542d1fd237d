use clap::Parser;

mod cli;
mod commands;
mod errors;
mod render;
mod services;
mod state;

use cli::{Cli, Commands};
use errors::{map_dataset_load_error, report_failure};
use services::SourceChain;
use state::Session;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let chain = SourceChain::for_data_arg(cli.data.as_deref());
    let bundle = match chain.load() {
        Ok(bundle) => bundle,
        Err(error) => {
            let source = cli.data.as_deref().unwrap_or("built-in snapshot");
            let (headline, message, details) = map_dataset_load_error(&error, source);
            report_failure(&headline, &message, &details);
            std::process::exit(1);
        }
    };

    let loaded_from = bundle.source;
    let mut session = Session::new();
    session.absorb(bundle.breeds, bundle.ratings);

    match &cli.command {
        Commands::Browse { filters, order, view } => {
            commands::handle_browse(&cli, &mut session, filters, order, *view)
        }
        Commands::Export { filters, order, out } => {
            commands::handle_export(&cli, &mut session, filters, order, out.as_deref())
        }
        Commands::Show { name } => commands::handle_show(&cli, &session, name),
        Commands::Ranges => commands::handle_ranges(&cli, &session),
        Commands::Add { name } => commands::handle_add(&cli, &chain, &mut session, name),
        Commands::Remove { name } => commands::handle_remove(&cli, &chain, &mut session, name),
        Commands::Validate => commands::handle_validate(&cli, &session),
        Commands::Score { write } => {
            commands::handle_score(&cli, &session, cli.data.as_deref(), &loaded_from, *write)
        }
    }
}
