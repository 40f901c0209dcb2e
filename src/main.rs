use clap::Parser;
use notecmd::cli::{
    run_add, run_clear, run_delete, run_edit, run_export, run_list, run_show, run_summary, Cli,
    Commands,
};
use notecmd::config::Config;
use notecmd::store::query::DEFAULT_LATEST_LIMIT;
use notecmd::{logging, Database, NoteStore};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.home.as_deref())?;
    let store = NoteStore::new(Database::open_at(&config.db_path())?);

    match cli.command {
        None => {
            // No subcommand provided - show the overview
            run_summary(&store, DEFAULT_LATEST_LIMIT)?;
        }
        Some(Commands::Add(args)) => {
            run_add(&store, args.category, args.content)?;
        }
        Some(Commands::List(args)) => {
            run_list(&store, args.category, args.limit)?;
        }
        Some(Commands::Show(args)) => {
            run_show(&store, &args.id)?;
        }
        Some(Commands::Edit(args)) => {
            run_edit(&store, &args.id, args.category, args.content)?;
        }
        Some(Commands::Delete(args)) => {
            run_delete(&store, &args.id, args.force)?;
        }
        Some(Commands::Clear(args)) => {
            run_clear(&store, args.force)?;
        }
        Some(Commands::Summary(args)) => {
            run_summary(&store, args.limit)?;
        }
        Some(Commands::Export(args)) => {
            run_export(&store, &config, args.share)?;
        }
    }

    Ok(())
}
