use clap::{Parser, Subcommand};
use dvm::{AppError, DriftState, InitOutcome, StorageOutcome};

#[derive(Parser)]
#[command(name = "dvm")]
#[command(version)]
#[command(
    about = "Version datasets with DVC and Git",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize DVC tracking and commit the tracking directory
    #[clap(visible_alias = "i")]
    Init,
    /// Configure the default remote storage for data snapshots
    #[clap(visible_alias = "r")]
    Remote {
        /// Remote name (falls back to storage.remote in dvm.toml)
        name: Option<String>,
        /// Remote URL (falls back to storage.url in dvm.toml)
        url: Option<String>,
    },
    /// Commit a new tagged data version if the folder drifted
    #[clap(visible_alias = "s")]
    Snapshot {
        /// Data folder to snapshot (falls back to data.folder in dvm.toml)
        folder: Option<String>,
        /// Remote to push the snapshot to
        #[arg(short, long)]
        remote: Option<String>,
    },
    /// Show the drift state of the data folder without committing
    Status {
        /// Data folder to check (falls back to data.folder in dvm.toml)
        folder: Option<String>,
    },
}

fn main() {
    dvm::logging::init();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Init => dvm::initialize_tracking().map(|outcome| match outcome {
            InitOutcome::Initialized => println!("Initialized DVC tracking"),
            InitOutcome::AlreadyInitialized => println!("DVC tracking already initialized"),
        }),
        Commands::Remote { name, url } => {
            dvm::initialize_storage(name.as_deref(), url.as_deref()).map(|outcome| match outcome {
                StorageOutcome::Configured => println!("Configured remote storage"),
                StorageOutcome::AlreadyConfigured => println!("Remote storage already configured"),
            })
        }
        Commands::Snapshot { folder, remote } => {
            dvm::make_new_version(folder.as_deref(), remote.as_deref()).map(|tag| match tag {
                Some(tag) => println!("Committed data version {tag}"),
                None => println!("Data is up to date; nothing to commit"),
            })
        }
        Commands::Status { folder } => dvm::status(folder.as_deref()).map(|state| match state {
            DriftState::Untracked => println!("untracked: no .dvc marker file yet"),
            DriftState::UpToDate => println!("up-to-date"),
            DriftState::Drifted { status } => println!("drifted:\n{}", status.trim()),
            DriftState::CheckFailed { details } => println!("check-failed: {details}"),
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
