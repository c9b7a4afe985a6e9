//! CLI entry and dispatch.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;

use elearn::api::ApiClient;
use elearn::config::Config;
use elearn::guard::{Guard, Navigator, NullNavigator};
use elearn::session::{FileSessionStore, SessionStore};

mod commands;

#[derive(Parser)]
#[command(name = "elearn")]
#[command(version)]
#[command(about = "Admin client for the e-learning attendance API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Log in and store the session
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,
    },

    /// Log out (clear the stored session)
    Logout,

    /// Show the current session
    Status,

    /// Show dashboard statistics
    Dashboard,

    /// Lecturer management
    Dosen {
        #[command(subcommand)]
        command: DosenCommands,
    },

    /// Lecturer course assignments
    Assign {
        #[command(subcommand)]
        command: AssignCommands,
    },

    /// List the authenticated lecturer's course schedule
    Jadwal,

    /// Course materials
    Materi {
        #[command(subcommand)]
        command: MateriCommands,
    },

    /// Attendance sessions
    Presensi {
        #[command(subcommand)]
        command: PresensiCommands,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum DosenCommands {
    /// Lists all lecturers
    List,
    /// Lists one lecturer's course assignments
    Assignments {
        #[arg(value_name = "ID_DOSEN")]
        id_dosen: i64,
    },
}

#[derive(clap::Subcommand)]
enum AssignCommands {
    /// Assigns a lecturer to a course class
    Add {
        /// Lecturer id
        #[arg(long)]
        dosen: i64,

        /// Course code
        #[arg(long = "kode-mk")]
        kode_mk: String,

        /// Class id
        #[arg(long)]
        kelas: i64,

        /// Academic year, e.g. 2024/2025
        #[arg(long = "tahun-ajaran")]
        tahun_ajaran: String,

        /// Active semester (Ganjil or Genap)
        #[arg(long, default_value = "Ganjil")]
        semester: String,
    },
    /// Removes an assignment
    Remove {
        #[arg(value_name = "ID_KELAS_MK")]
        id_kelas_mk: i64,
    },
}

#[derive(clap::Subcommand)]
enum MateriCommands {
    /// Lists materials for a course within a class
    List {
        /// Course code
        #[arg(long = "kode-mk")]
        kode_mk: String,

        /// Class id
        #[arg(long)]
        kelas: i64,
    },
    /// Uploads a new material, optionally with a PDF file
    Upload(commands::materi::UploadArgs),
}

#[derive(clap::Subcommand)]
enum PresensiCommands {
    /// Lists attendance sessions
    List,
    /// Shows per-student attendance for one session
    Detail {
        /// Course code
        #[arg(long = "kode-mk")]
        kode_mk: String,

        /// Session date (YYYY-MM-DD)
        #[arg(long)]
        tanggal: NaiveDate,

        /// Meeting number
        #[arg(long)]
        pertemuan: i32,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::load().context("load config")?;

    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::open_default());
    let navigator: Arc<dyn Navigator> = Arc::new(NullNavigator);
    let client = ApiClient::new(
        config.resolve_base_url(),
        Arc::clone(&store),
        Arc::clone(&navigator),
    );
    let guard = Guard::new(Arc::clone(&store), Arc::clone(&navigator));

    match cli.command {
        Commands::Login { username } => {
            commands::auth::login(&client, store.as_ref(), &username).await
        }
        Commands::Logout => commands::auth::logout(store.as_ref()),
        Commands::Status => commands::auth::status(store.as_ref()),

        Commands::Dashboard => commands::dashboard::summary(&guard, &client).await,

        Commands::Dosen { command } => match command {
            DosenCommands::List => commands::dosen::list(&guard, &client).await,
            DosenCommands::Assignments { id_dosen } => {
                commands::dosen::assignments(&guard, &client, id_dosen).await
            }
        },

        Commands::Assign { command } => match command {
            AssignCommands::Add {
                dosen,
                kode_mk,
                kelas,
                tahun_ajaran,
                semester,
            } => {
                commands::dosen::assign(&guard, &client, dosen, &kode_mk, kelas, &tahun_ajaran, &semester)
                    .await
            }
            AssignCommands::Remove { id_kelas_mk } => {
                commands::dosen::unassign(&guard, &client, id_kelas_mk).await
            }
        },

        Commands::Jadwal => commands::jadwal::list(&guard, &client).await,

        Commands::Materi { command } => match command {
            MateriCommands::List { kode_mk, kelas } => {
                commands::materi::list(&guard, &client, &kode_mk, kelas).await
            }
            MateriCommands::Upload(args) => commands::materi::upload(&guard, &client, args).await,
        },

        Commands::Presensi { command } => match command {
            PresensiCommands::List => commands::presensi::list(&guard, &client).await,
            PresensiCommands::Detail {
                kode_mk,
                tanggal,
                pertemuan,
            } => commands::presensi::detail(&guard, &client, &kode_mk, tanggal, pertemuan).await,
        },

        Commands::Config { command } => match command {
            ConfigCommands::Path => commands::config::path(),
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
