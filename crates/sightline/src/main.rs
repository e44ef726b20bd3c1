//! `sightline` - CLI for the simulated person-search demo
//!
//! This binary runs demonstration search sessions in the terminal and
//! exposes the geocoding lookup and bundled reference datasets.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use clap::Parser;
use tokio::sync::mpsc;

use sightline::cli::{Cli, Command, ConfigCommand, DataCommand, GeocodeCommand, SearchCommand};
use sightline::session::{format_elapsed, LogKind, SessionEventKind};
use sightline::{init_logging, Config, Geocoder, MatchList, PhotoSet, SearchOrchestrator};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone())?;

    // Execute the command
    match cli.command {
        Command::Search(search_cmd) => handle_search(&config, search_cmd).await,
        Command::Geocode(geocode_cmd) => handle_geocode(&config, &geocode_cmd).await,
        Command::Data(data_cmd) => handle_data(&data_cmd),
        Command::Config(config_cmd) => handle_config(&config, config_cmd),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
async fn handle_search(config: &Config, cmd: SearchCommand) -> anyhow::Result<()> {
    let mut simulation = config.simulation.clone();
    if cmd.seed.is_some() {
        simulation.seed = cmd.seed;
    }

    let mut photos = PhotoSet::new();
    for path in cmd.photo {
        for advisory in photos.stage(path) {
            println!("note: {advisory}");
        }
    }
    if !photos.is_empty() {
        println!("Staged {} reference photo(s).", photos.count());
    }

    let (events_tx, mut events_rx) = mpsc::channel(256);
    let mut orchestrator = SearchOrchestrator::new(simulation, events_tx);
    orchestrator.set_photos_staged(photos.count());
    let handle = orchestrator.begin_search();

    println!("Starting worldwide search simulation...");

    // Print whole-percent milestones in 5% steps to keep output readable
    let mut last_milestone = 0u32;
    while let Some(event) = events_rx.recv().await {
        orchestrator.handle_event(&event);
        if event.generation != handle.generation() {
            continue;
        }
        match event.kind {
            SessionEventKind::Progress {
                percent,
                elapsed_secs,
            } => {
                let rounded = percent.round() as u32;
                if rounded >= last_milestone + 5 || (rounded == 100 && last_milestone < 100) {
                    println!("[{}] {rounded:>3}%", format_elapsed(elapsed_secs));
                    last_milestone = rounded;
                }
            }
            SessionEventKind::StatusChanged { message } => {
                println!("        {message}");
            }
            SessionEventKind::LogAppended(entry) => {
                if entry.kind == LogKind::Warning {
                    println!("        warning: {}", entry.message);
                }
            }
            SessionEventKind::SightingDiscovered(sighting) => {
                println!(
                    "        sighting #{} via {} (confidence {:.2})",
                    sighting.id + 1,
                    sighting.source,
                    sighting.confidence
                );
            }
            SessionEventKind::Completed => break,
        }
    }

    let snapshot = handle.snapshot();
    let stats = snapshot.stats();
    let results = MatchList::demo();

    if let Some(path) = &cmd.map {
        std::fs::write(path, sightline::map::render_svg(snapshot.sightings(), None, false))?;
        println!("Sighting map written to {}", path.display());
    }

    if cmd.json {
        let summary = serde_json::json!({
            "elapsed_secs": snapshot.elapsed_secs(),
            "percent": snapshot.progress().percent(),
            "stats": stats,
            "sightings": snapshot.sightings(),
            "matches": results.matches(),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("Search complete in {}", format_elapsed(snapshot.elapsed_secs()));
    println!("---------------------------------");
    println!("Social media platforms: {}", stats.social_platforms);
    println!("Public databases:       {}", stats.public_databases);
    println!("Camera networks:        {}", stats.camera_networks);
    println!("News sources:           {}", stats.news_sources);
    println!("Travel systems:         {}", stats.travel_systems);
    println!("Potential sightings:    {}", snapshot.sightings().len());
    println!();
    println!("Potential matches ({}):", results.len());
    for m in results.matches() {
        let band = sightline::ConfidenceBand::classify(m.confidence);
        println!(
            "  [{}] {} - {} ({}, {})",
            band.label(),
            m.location,
            m.source,
            m.date,
            format_args!("{:.0}%", m.confidence * 100.0),
        );
    }
    println!();
    println!("These results are potential leads that require verification.");

    Ok(())
}

async fn handle_geocode(config: &Config, cmd: &GeocodeCommand) -> anyhow::Result<()> {
    let geocoder = Geocoder::new(&config.geocoding)?;

    match geocoder.lookup(&cmd.place).await {
        Some(result) => {
            if cmd.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                println!("{}", result.display_name);
                println!("  latitude:  {:.4}", result.latitude);
                println!("  longitude: {:.4}", result.longitude);
            }
        }
        None => {
            if cmd.json {
                println!("null");
            } else {
                println!("no result");
            }
        }
    }
    Ok(())
}

fn handle_data(cmd: &DataCommand) -> anyhow::Result<()> {
    match cmd {
        DataCommand::Persons { json } => {
            let persons = sightline::data::sample_missing_persons();
            if *json {
                println!("{}", serde_json::to_string_pretty(&persons)?);
            } else {
                for p in &persons {
                    println!("{} - {} ({}, {})", p.id, p.name, p.age, p.location);
                    println!("    last seen {}: {}", p.last_seen, p.description);
                }
            }
        }
        DataCommand::Transit { json } => {
            let stops = sightline::data::sample_transport_stops();
            let routes = sightline::data::sample_transport_routes();
            if *json {
                let combined = serde_json::json!({ "stops": stops, "routes": routes });
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else {
                println!("Stops:");
                for s in &stops {
                    println!("  {} - {} ({:.4}, {:.4})", s.id, s.name, s.lat, s.lon);
                }
                println!("Routes:");
                for r in &routes {
                    println!("  {} - {} ({} stops)", r.id, r.name, r.stops.len());
                }
            }
        }
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Simulation]");
                println!("  Progress tick (ms):    {}", config.simulation.progress_tick_ms);
                println!("  Status tick (ms):      {}", config.simulation.status_tick_ms);
                println!("  Discovery tick (ms):   {}", config.simulation.discovery_tick_ms);
                println!("  Discovery probability: {}", config.simulation.discovery_probability);
                println!("  Warning probability:   {}", config.simulation.warning_probability);
                println!("  Log capacity:          {}", config.simulation.log_capacity);
                println!();
                println!("[Geocoding]");
                println!("  Endpoint:  {}", config.geocoding.endpoint);
                println!("  Timeout:   {}s", config.geocoding.timeout_secs);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            match Config::load_from(Some(path)) {
                Ok(_) => println!("Configuration is valid."),
                Err(e) => println!("Configuration error: {e}"),
            }
        }
    }
    Ok(())
}
