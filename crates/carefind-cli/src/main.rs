mod find;
mod provider;

use clap::{Parser, Subcommand};

use carefind_core::geo::format_distance;
use carefind_core::{SortMode, TypeFilter};

#[derive(Debug, Parser)]
#[command(name = "carefind")]
#[command(about = "Nearby hospital finder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Resolve a location and list nearby hospitals, ranked.
    Find {
        /// Restrict to one facility type (government, private, clinic,
        /// specialist) or "all".
        #[arg(long, default_value = "all")]
        hospital_type: TypeFilter,
        /// Keep only facilities with emergency services.
        #[arg(long)]
        emergency_only: bool,
        /// Case-insensitive substring match over name, city, and state.
        #[arg(long, default_value = "")]
        search: String,
        /// Ordering: distance, name, or rating.
        #[arg(long, default_value = "distance")]
        sort: SortMode,
        /// Forward a keyword to the external places search instead of
        /// filtering the aggregated set.
        #[arg(long)]
        keyword: Option<String>,
    },
    /// Print the seeded internal hospital directory.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = carefind_core::load_app_config_from_env()?;

    match cli.command {
        Commands::Find {
            hospital_type,
            emergency_only,
            search,
            sort,
            keyword,
        } => {
            find::run(
                &config,
                find::FindArgs {
                    hospital_type,
                    emergency_only,
                    search,
                    sort,
                    keyword,
                },
            )
            .await
        }
        Commands::Seed => {
            let records = carefind_finder::seed::seeded_hospitals();
            for r in &records {
                let distance = carefind_core::geo::haversine_distance_km(
                    carefind_core::DEFAULT_ORIGIN,
                    r.coordinate,
                );
                println!(
                    "{:<20} {:<36} {:<12} {:>9}",
                    r.id,
                    r.name,
                    r.hospital_type.label(),
                    format_distance(distance)
                );
            }
            Ok(())
        }
    }
}
