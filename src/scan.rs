use std::path::Path;

use tracing::{debug, info};

use crate::{
    classifier::Classifier,
    config::ScanConfig,
    data::{DetectedGame, ScanReport, SupportedSources},
    executables::ExecutableFinder,
    location::filter_by_drive,
    sources::{ProgramScanner, merge_programs},
};

/// Runs a full scan: reads all installed programs, keeps the likely games installed on the
/// configured drive and looks for a few executables in each of their install directories
#[tracing::instrument(level = "debug", skip_all, fields(drive = %config.drive_prefix))]
pub fn run_scan(scanner: &ProgramScanner, config: &ScanConfig) -> ScanReport {
    let programs_per_source = scanner.get_all_programs_per_source();

    let steam_programs = programs_per_source
        .iter()
        .filter(|(source, _)| *source == SupportedSources::Steam)
        .map(|(_, programs)| programs.len())
        .sum();

    let programs = merge_programs(programs_per_source);
    let total_programs = programs.len();
    info!("Found {total_programs} installed programs ({steam_programs} from Steam)");

    let classifier = Classifier::new(config.rules.clone());
    let likely_games: Vec<_> = programs
        .into_iter()
        .filter(|p| classifier.is_likely_game(p))
        .collect();
    let likely_games_count = likely_games.len();
    info!("Identified {likely_games_count} potential games");

    let finder = ExecutableFinder::new(&config.finder);
    let games: Vec<DetectedGame> = filter_by_drive(likely_games, &config.drive_prefix)
        .into_iter()
        .map(|record| {
            let executables = record
                .install_location
                .as_deref()
                .map(|location| finder.find(Path::new(location)))
                .unwrap_or_default();

            debug!(
                "Found {} executables for '{}'",
                executables.len(),
                record.name
            );

            DetectedGame {
                record,
                executables,
            }
        })
        .collect();

    info!("Found {} games on {}", games.len(), config.drive_prefix);

    ScanReport {
        drive_prefix: config.drive_prefix.clone(),
        steam_programs,
        total_programs,
        likely_games: likely_games_count,
        games,
    }
}
