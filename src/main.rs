use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_buddy::cli::{
    handle_budget_command, handle_expense_command, handle_export_command, handle_history_command,
    handle_login, handle_logout, handle_need_command, handle_signup, handle_want_command,
    handle_whoami, BudgetCommands, CredentialArgs, ExpenseCommands, ExportArgs, NeedCommands,
    WantCommands,
};
use finance_buddy::config::BuddyPaths;
use finance_buddy::storage::{initialize_storage, Storage};

#[derive(Parser)]
#[command(
    name = "buddy",
    version,
    about = "Track needs, wants and expenses, and see when you can afford what you want",
    long_about = "finance-buddy records what you need and what you want, works out how \
                  much of your monthly income is left after needs, and projects how many \
                  months of saving each want takes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,
    },

    /// Create a user
    Signup(CredentialArgs),

    /// Start a session
    Login(CredentialArgs),

    /// End the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Manage needs
    #[command(subcommand)]
    Need(NeedCommands),

    /// Manage wants and their priorities
    #[command(subcommand)]
    Want(WantCommands),

    /// Income, remaining income and affordability
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Record and review expenses
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Export your data
    Export(ExportArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = BuddyPaths::new()?;
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing finance-buddy at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Run 'buddy signup <username>' to create your user.");
        }
        Some(Commands::Config) => {
            let settings = storage.settings();
            println!("finance-buddy Configuration");
            println!("===========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Audit log:        {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Min password length: {}", settings.min_password_length);
            println!("  Audit enabled:       {}", settings.audit_enabled);
        }
        Some(Commands::History { count }) => handle_history_command(&storage, count)?,
        Some(Commands::Signup(args)) => handle_signup(&storage, args)?,
        Some(Commands::Login(args)) => handle_login(&storage, args)?,
        Some(Commands::Logout) => handle_logout(&storage)?,
        Some(Commands::Whoami) => handle_whoami(&storage)?,
        Some(Commands::Need(cmd)) => handle_need_command(&storage, cmd)?,
        Some(Commands::Want(cmd)) => handle_want_command(&storage, cmd)?,
        Some(Commands::Budget(cmd)) => handle_budget_command(&storage, cmd)?,
        Some(Commands::Expense(cmd)) => handle_expense_command(&storage, cmd)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        None => {
            println!("finance-buddy - needs, wants and when you can afford them");
            println!();
            println!("Run 'buddy --help' for usage information.");
        }
    }

    Ok(())
}
