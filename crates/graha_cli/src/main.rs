use std::error::Error;

use clap::{Parser, Subcommand};
use serde_json::json;

use graha_core::AyanamsaSystem;
use graha_time::UtcInstant;
use graha_vedic::dasha::DashaLevel;
use graha_vedic::{
    build_level_nodes, build_mahadasha_list, build_period_tree, build_timeline, dasha_balance,
    deg_to_dms, lord_from_name, placidus_cusps, sub_lords,
};

#[derive(Parser)]
#[command(name = "graha", about = "KP/Vedic astrology computation CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Placidus cusps (tropical + sidereal) for a JD and location
    Cusps {
        /// Julian Date UT
        jd: f64,
        /// Latitude in degrees, north positive
        lat: f64,
        /// Longitude in degrees, east positive
        lon: f64,
        /// Ayanamsa: KP (default) or LAHIRI
        #[arg(long, default_value = "KP")]
        ayanamsa: String,
    },
    /// KP star/sub/sub-sub lords for a sidereal longitude
    Sublord {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Vimshottari entry lord and balance from the Moon's sidereal longitude
    Balance {
        /// Moon's sidereal longitude in degrees
        moon_lon: f64,
    },
    /// The 9 mahadashas from a start instant
    Maha {
        /// Start instant (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        start: String,
        /// Entry lord name (e.g. Ketu)
        #[arg(long)]
        lord: String,
        /// Remaining balance of the entry lord in years
        #[arg(long)]
        balance: Option<f64>,
    },
    /// One level's periods inside a window
    Level {
        /// Level label: mahadasha, bhukti, antara, sukshma, prana
        level: String,
        /// Window start (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        start: String,
        /// Window end (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        end: String,
        /// Lord the level starts from
        #[arg(long)]
        lord: String,
    },
    /// One mahadasha's full subtree
    Tree {
        /// Start instant (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        start: String,
        /// Entry lord name
        #[arg(long)]
        lord: String,
        /// Remaining balance of the entry lord in years
        #[arg(long)]
        balance: Option<f64>,
        /// Depth 1-5
        #[arg(long, default_value = "3")]
        depth: u8,
    },
    /// Mahadasha subtrees covering the 120-year horizon
    Timeline {
        /// Start instant (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        start: String,
        /// Entry lord name
        #[arg(long)]
        lord: String,
        /// Remaining balance of the entry lord in years
        #[arg(long)]
        balance: Option<f64>,
        /// Depth 1-5
        #[arg(long, default_value = "1")]
        depth: u8,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        deg: f64,
    },
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Cusps {
            jd,
            lat,
            lon,
            ayanamsa,
        } => {
            let system = AyanamsaSystem::from_name(&ayanamsa);
            let tropical = placidus_cusps(jd, lat, lon);
            let sidereal = tropical.sidereal(system.value_deg(jd));
            print_json(&json!({
                "ayanamsa": system.name(),
                "ayanamsaValueDeg": system.value_deg(jd),
                "cuspsTropical": tropical,
                "cuspsSidereal": sidereal,
            }))?;
        }
        Commands::Sublord { lon } => print_json(&sub_lords(lon))?,
        Commands::Balance { moon_lon } => print_json(&dasha_balance(moon_lon))?,
        Commands::Maha {
            start,
            lord,
            balance,
        } => {
            let start: UtcInstant = start.parse()?;
            let lord = lord_from_name(&lord)?;
            print_json(&build_mahadasha_list(start.to_jd(), lord, balance))?;
        }
        Commands::Level {
            level,
            start,
            end,
            lord,
        } => {
            let level = DashaLevel::from_label(&level)
                .ok_or_else(|| format!("unknown level: {level}"))?;
            let start: UtcInstant = start.parse()?;
            let end: UtcInstant = end.parse()?;
            let lord = lord_from_name(&lord)?;
            print_json(&build_level_nodes(level, start.to_jd(), end.to_jd(), lord))?;
        }
        Commands::Tree {
            start,
            lord,
            balance,
            depth,
        } => {
            let start: UtcInstant = start.parse()?;
            let lord = lord_from_name(&lord)?;
            print_json(&build_period_tree(start.to_jd(), lord, balance, depth))?;
        }
        Commands::Timeline {
            start,
            lord,
            balance,
            depth,
        } => {
            let start: UtcInstant = start.parse()?;
            let lord = lord_from_name(&lord)?;
            print_json(&build_timeline(start.to_jd(), lord, balance, depth))?;
        }
        Commands::Dms { deg } => print_json(&deg_to_dms(deg))?,
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
