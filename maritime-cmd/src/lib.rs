//! Command implementations for the maritime measurements CLI.
//!
//! Provides subcommands for listing sites and fetching measurements from
//! the same API the map app talks to.

use clap::{Args, Subcommand};
use maritime_core::config::ApiConfig;
use maritime_core::query::{parse_date_filter, BoundingBox, MarkerQuery, SiteQuery};

pub mod client;
pub mod export;
pub mod measurements;

/// Bounding box corners; the sites endpoint ignores a partial box.
#[derive(Args, Debug, Clone, Default)]
pub struct BboxArgs {
    #[arg(long, allow_hyphen_values = true)]
    pub min_lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub min_lng: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub max_lat: Option<f64>,
    #[arg(long, allow_hyphen_values = true)]
    pub max_lng: Option<f64>,
}

impl From<&BboxArgs> for BoundingBox {
    fn from(args: &BboxArgs) -> Self {
        BoundingBox {
            min_lat: args.min_lat,
            min_lng: args.min_lng,
            max_lat: args.max_lat,
            max_lng: args.max_lng,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List sites with readings in the date range and bounding box
    Sites {
        /// Start date (YYYY-MM-DD)
        #[arg(short = 's', long, default_value = "")]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(short = 'e', long, default_value = "")]
        end: String,

        #[command(flatten)]
        bbox: BboxArgs,
    },

    /// Fetch readings and summarize them per site
    Measurements {
        /// Start date (YYYY-MM-DD)
        #[arg(short = 's', long, default_value = "")]
        start: String,

        /// End date (YYYY-MM-DD)
        #[arg(short = 'e', long, default_value = "")]
        end: String,

        /// Restrict to these sites (repeatable)
        #[arg(long = "site")]
        sites: Vec<String>,

        #[command(flatten)]
        bbox: BboxArgs,

        /// Reading type, e.g. aod_500nm, water_vapor_CM
        #[arg(short = 'r', long, default_value = "aod_500nm")]
        reading: String,

        /// Also write the readings with their marker colors to this CSV
        #[arg(long)]
        csv: Option<String>,

        /// CSRF token sent as header and cookie
        #[arg(long, env = "MARITIME_CSRF_TOKEN")]
        csrf_token: Option<String>,
    },
}

pub async fn run(config: ApiConfig, command: Command) -> anyhow::Result<()> {
    let client = client::ApiClient::new(config)?;
    match command {
        Command::Sites { start, end, bbox } => {
            parse_date_filter(&start)?;
            parse_date_filter(&end)?;
            let query = SiteQuery {
                start_date: start,
                end_date: end,
                bbox: BoundingBox::from(&bbox),
            };
            let sites = client.fetch_sites(&query).await?;
            for site in &sites {
                println!("{}", site.name);
            }
            log::info!("{} sites", sites.len());
            Ok(())
        }
        Command::Measurements {
            start,
            end,
            sites,
            bbox,
            reading,
            csv,
            csrf_token,
        } => {
            parse_date_filter(&start)?;
            parse_date_filter(&end)?;
            let query = MarkerQuery {
                start_date: start,
                end_date: end,
                sites: sites.into_iter().collect(),
                bbox: BoundingBox::from(&bbox),
                reading,
            };
            measurements::run_measurements(&client, &query, csv.as_deref(), csrf_token.as_deref())
                .await
        }
    }
}
