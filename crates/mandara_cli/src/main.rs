use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use mandara_chart::{
    ChartBody, FixedPositions, IauSiderealTime, TropicalPosition, compute_chart,
};
use mandara_time::{UtcTime, gmst_hours};
use mandara_vedic::{
    format_sign_notation, lahiri_ayanamsa_deg, nakshatra_from_longitude, navamsa_rashi,
    rashi_from_longitude, sidereal_lagna_deg,
};
use mandara_vivaha::analyze;

#[derive(Parser)]
#[command(name = "mandara", about = "Mand\u{101}ra sidereal chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lahiri ayanamsa for a calendar year
    Ayanamsa {
        /// Calendar year, e.g. 1990
        year: i32,
    },
    /// Sidereal ascendant for a moment and place
    Lagna {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        date: String,
        /// Geographic latitude in degrees, north positive
        lat: f64,
        /// Geographic longitude in degrees, east positive
        lon: f64,
    },
    /// Sign, navamsa and nakshatra breakdown of a sidereal longitude
    Signs {
        /// Sidereal ecliptic longitude in degrees
        deg: f64,
    },
    /// Full 13-body chart from a positions file
    Chart {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        date: String,
        /// Geographic latitude in degrees, north positive
        lat: f64,
        /// Geographic longitude in degrees, east positive
        lon: f64,
        /// JSON file with tropical longitudes for all nine grahas
        #[arg(long)]
        positions: PathBuf,
        /// Emit the chart as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Marriage-compatibility report for a chart
    Analyze {
        /// UTC datetime (YYYY-MM-DDThh:mm[:ss]Z)
        date: String,
        /// Geographic latitude in degrees, north positive
        lat: f64,
        /// Geographic longitude in degrees, east positive
        lon: f64,
        /// JSON file with tropical longitudes for all nine grahas
        #[arg(long)]
        positions: PathBuf,
        /// Emit the report as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn parse_utc(s: &str) -> UtcTime {
    UtcTime::parse(s).unwrap_or_else(|e| {
        eprintln!("Invalid datetime: {e}");
        std::process::exit(1);
    })
}

fn load_positions(path: &Path) -> FixedPositions {
    let raw = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Failed to read {}: {e}", path.display());
        std::process::exit(1);
    });
    let positions: Vec<TropicalPosition> = serde_json::from_str(&raw).unwrap_or_else(|e| {
        eprintln!("Failed to parse {}: {e}", path.display());
        std::process::exit(1);
    });
    FixedPositions(positions)
}

fn build_chart(date: &str, lat: f64, lon: f64, positions: &Path) -> Vec<ChartBody> {
    let time = parse_utc(date);
    let source = load_positions(positions);
    compute_chart(&time, lat, lon, &source, &IauSiderealTime).unwrap_or_else(|e| {
        eprintln!("Chart failed: {e}");
        std::process::exit(1);
    })
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("JSON encoding failed: {e}");
            std::process::exit(1);
        }
    }
}

fn print_chart_table(chart: &[ChartBody]) {
    println!(
        "{:<28} {:>10}  {:<12} {:>9}  {:>5}  {:<16}",
        "Body", "Sidereal", "Rashi", "Degrees", "House", "Nakshatra"
    );
    for body in chart {
        let retro = if body.retrograde { " (R)" } else { "" };
        let dignity = body
            .dignity
            .map(|d| format!(" [{}]", d.name()))
            .unwrap_or_default();
        println!(
            "{:<28} {:>10.4}  {:<12} {:>9}  {:>5}  {:<16}{}{}",
            body.name,
            body.sidereal_deg,
            body.rashi.name(),
            body.deg_str,
            body.house,
            format!("{}-{}", body.nakshatra.name(), body.pada),
            retro,
            dignity,
        );
        if let Some(details) = &body.mandara {
            println!("  {} {}", details.icon, details.description);
            println!("  trace: {}", details.trace);
            if let Some(manager) = details.manager {
                println!("  manager: {}", manager.name());
            }
            if !details.triggers.is_empty() {
                let names: Vec<&str> = details.triggers.iter().map(|g| g.name()).collect();
                println!("  triggers: {}", names.join(", "));
            }
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ayanamsa { year } => {
            println!("{:.4} deg", lahiri_ayanamsa_deg(year));
        }

        Commands::Lagna { date, lat, lon } => {
            let time = parse_utc(&date);
            let jd = time.to_jd_utc();
            let aya = lahiri_ayanamsa_deg(time.year);
            let asc = sidereal_lagna_deg(gmst_hours(jd), jd, lat, lon, aya);
            let rashi = rashi_from_longitude(asc);
            println!("Ayanamsa: {aya:.4} deg");
            println!("Lagna: {asc:.4} deg ({} - {})", rashi.name(), format_sign_notation(asc));
        }

        Commands::Signs { deg } => {
            let rashi = rashi_from_longitude(deg);
            let (nakshatra, pada) = nakshatra_from_longitude(deg);
            println!("Rashi: {} ({})", rashi.name(), format_sign_notation(deg));
            println!("Navamsa: {}", navamsa_rashi(deg).name());
            println!("Nakshatra: {} Pada {}", nakshatra.name(), pada);
        }

        Commands::Chart {
            date,
            lat,
            lon,
            positions,
            json,
        } => {
            let chart = build_chart(&date, lat, lon, &positions);
            if json {
                print_json(&chart);
            } else {
                print_chart_table(&chart);
            }
        }

        Commands::Analyze {
            date,
            lat,
            lon,
            positions,
            json,
        } => {
            let chart = build_chart(&date, lat, lon, &positions);
            let report = analyze(&chart);
            if json {
                print_json(&report);
                return;
            }
            for step in &report.steps {
                match &step.check {
                    Some(check) => {
                        println!("[{}] {} ({}): {}", step.result.label(), step.label, check, step.impact)
                    }
                    None => println!("[{}] {}: {}", step.result.label(), step.label, step.impact),
                }
            }
            let conclusion = &report.conclusion;
            println!(
                "Verdict: {} (severity {}) - {}",
                conclusion.verdict.status(),
                conclusion.severity,
                conclusion.verdict.description(),
            );
            if let Some(remedy) = &report.remedy {
                println!("Remedy: {}", remedy.title);
                println!("  mantra: {}", remedy.mantra);
                println!("  action: {}", remedy.action);
            }
        }
    }
}
