//! Plain text rendering of a [`ScanReport`].

use std::io::{self, Write};

use crate::data::{DetectedGame, ScanReport};

const RULE_WIDTH: usize = 70;
/// Executables listed per game, any others are only counted
const SAMPLE_EXECUTABLES: usize = 3;

fn drive_name(drive_prefix: &str) -> String {
    if drive_prefix.is_empty() {
        "any drive".to_owned()
    } else {
        format!("{drive_prefix} drive")
    }
}

fn write_game(out: &mut impl Write, number: usize, game: &DetectedGame) -> io::Result<()> {
    let DetectedGame {
        record,
        executables,
    } = game;

    writeln!(out, "{number:2}. {}", record.name)?;
    if let Some(publisher) = &record.publisher {
        writeln!(out, "    Publisher: {publisher}")?;
    }
    writeln!(
        out,
        "    Install Location: {}",
        record.install_location.as_deref().unwrap_or_default()
    )?;

    if !executables.is_empty() {
        writeln!(out, "    Executables found:")?;
        for executable in executables.iter().take(SAMPLE_EXECUTABLES) {
            writeln!(out, "      - {}", executable.display())?;
        }
        if executables.len() > SAMPLE_EXECUTABLES {
            writeln!(
                out,
                "      ... and {} more",
                executables.len() - SAMPLE_EXECUTABLES
            )?;
        }
    }

    writeln!(out)
}

/// Writes the full human readable report
pub fn write_report(out: &mut impl Write, report: &ScanReport) -> io::Result<()> {
    let drive = drive_name(&report.drive_prefix);
    let rule = "=".repeat(RULE_WIDTH);

    writeln!(
        out,
        "Game Detector - Finding games on {drive} using Windows Registry\n"
    )?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Scanning Windows Registry for installed programs...")?;
    writeln!(
        out,
        "Found {} Steam games in registry.",
        report.steam_programs
    )?;
    writeln!(
        out,
        "Found {} total installed programs.",
        report.total_programs
    )?;
    writeln!(out, "Identified {} potential games.", report.likely_games)?;

    if report.games.is_empty() {
        writeln!(out, "\nNo games found on {drive}.")?;
        return Ok(());
    }

    writeln!(out, "\nFound {} games on {drive}:\n", report.games.len())?;
    for (i, game) in report.games.iter().enumerate() {
        write_game(out, i + 1, game)?;
    }

    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "Registry scan complete! Found {} games on {drive}.",
        report.games.len()
    )
}

/// Renders the report to a string, see [`write_report`]
pub fn render_report(report: &ScanReport) -> String {
    let mut buffer = Vec::new();
    let _ = write_report(&mut buffer, report);

    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data::{ProgramRecord, SupportedSources};

    fn game(name: &str, publisher: Option<&str>, executables: &[&str]) -> DetectedGame {
        DetectedGame {
            record: ProgramRecord {
                name: name.to_owned(),
                install_location: Some(format!(r"D:\Games\{name}")),
                publisher: publisher.map(String::from),
                source_tag: None,
                source: SupportedSources::UninstallMachine,
            },
            executables: executables.iter().map(PathBuf::from).collect(),
        }
    }

    fn report(games: Vec<DetectedGame>) -> ScanReport {
        ScanReport {
            drive_prefix: "D:".into(),
            steam_programs: 2,
            total_programs: 120,
            likely_games: 14,
            games,
        }
    }

    #[test]
    fn test_report_without_games() {
        let expected = "\
Game Detector - Finding games on D: drive using Windows Registry

======================================================================
Scanning Windows Registry for installed programs...
Found 2 Steam games in registry.
Found 120 total installed programs.
Identified 14 potential games.

No games found on D: drive.
";

        assert_eq!(render_report(&report(vec![])), expected);
    }

    #[test]
    fn test_report_with_games() {
        let games = vec![
            game(
                "Quest",
                Some("Valve"),
                &["a.exe", "b.exe", "c.exe", "d.exe", "e.exe"],
            ),
            game("Racer", None, &["racer.exe"]),
            game("Shooter", None, &[]),
        ];

        let expected = "\
Game Detector - Finding games on D: drive using Windows Registry

======================================================================
Scanning Windows Registry for installed programs...
Found 2 Steam games in registry.
Found 120 total installed programs.
Identified 14 potential games.

Found 3 games on D: drive:

 1. Quest
    Publisher: Valve
    Install Location: D:\\Games\\Quest
    Executables found:
      - a.exe
      - b.exe
      - c.exe
      ... and 2 more

 2. Racer
    Install Location: D:\\Games\\Racer
    Executables found:
      - racer.exe

 3. Shooter
    Install Location: D:\\Games\\Shooter

======================================================================
Registry scan complete! Found 3 games on D: drive.
";

        assert_eq!(render_report(&report(games)), expected);
    }

    #[test]
    fn test_report_numbering_width() {
        let games = (1..=10).map(|i| game(&format!("Game {i}"), None, &[])).collect();
        let rendered = render_report(&report(games));

        assert!(rendered.contains("\n 9. Game 9\n"));
        assert!(rendered.contains("\n10. Game 10\n"));
    }

    #[test]
    fn test_report_any_drive() {
        let mut report = report(vec![]);
        report.drive_prefix = String::new();

        assert!(render_report(&report).ends_with("No games found on any drive.\n"));
    }
}
