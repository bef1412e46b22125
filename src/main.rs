// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! File-based front-end for the draw engine.
//!
//! Reads a roster payload, runs the requested operation, prints the result.
//! All persistence, notification, and authorization concerns live with the
//! surrounding application; this binary exists for organizers who run their
//! draw from a terminal and for poking at rosters while editing exclusions.
//!
//! Roster payload shape:
//!
//! ```json
//! {
//!   "participants": ["ana", "bruno", "carla"],
//!   "exclusions": [["ana", "bruno"]]
//! }
//! ```

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs;
use std::io::Read;

use sorteo::{
    check_assignments, check_feasible, generate_assignments, generate_assignments_with,
    Assignment, ExclusionSet, Feasibility, ParticipantId,
};

mod cli;
use cli::{Cli, Commands};

/// Roster payload as stored/exported by the surrounding application.
#[derive(Deserialize)]
struct Roster {
    participants: Vec<ParticipantId>,
    #[serde(default)]
    exclusions: Vec<(ParticipantId, ParticipantId)>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Draw {
            file,
            retries,
            seed,
            json,
        } => run_draw(&file, retries, seed, json),
        Commands::Check { file } => run_check(&file),
        Commands::Verify {
            roster,
            assignments,
        } => run_verify(&roster, &assignments),
    };

    if let Err(e) = result {
        eprintln!("{} {}", painted(RED, "✗"), e);
        std::process::exit(1);
    }
}

fn run_draw(file: &str, retries: u32, seed: Option<u64>, json: bool) -> Result<(), String> {
    let (participants, exclusions) = load_roster(file)?;

    let draw = match seed {
        Some(seed) => {
            let mut rng = StdRng::seed_from_u64(seed);
            generate_assignments_with(&mut rng, &participants, &exclusions, retries)
        }
        None => generate_assignments(&participants, &exclusions, retries),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let payload =
            serde_json::to_string_pretty(&draw).map_err(|e| format!("encoding draw: {}", e))?;
        println!("{}", payload);
    } else {
        for assignment in &draw {
            println!("{}", assignment);
        }
        eprintln!(
            "{} drew {} assignments",
            painted(GREEN, "✓"),
            draw.len()
        );
    }
    Ok(())
}

fn run_check(file: &str) -> Result<(), String> {
    let (participants, exclusions) = load_roster(file)?;

    match check_feasible(&participants, &exclusions) {
        Feasibility::Feasible => {
            println!(
                "{} feasible: a valid draw exists for {} participants ({} exclusions)",
                painted(GREEN, "✓"),
                participants.len(),
                exclusions.len()
            );
            Ok(())
        }
        Feasibility::Infeasible(reason) => Err(reason.to_string()),
    }
}

fn run_verify(roster_file: &str, assignments_file: &str) -> Result<(), String> {
    let (participants, exclusions) = load_roster(roster_file)?;

    let raw = read_input(assignments_file)?;
    let draw: Vec<Assignment> = serde_json::from_str(&raw)
        .map_err(|e| format!("parsing {}: {}", assignments_file, e))?;

    check_assignments(&draw, &participants, &exclusions).map_err(|e| e.to_string())?;
    println!(
        "{} valid: {} assignments satisfy every constraint",
        painted(GREEN, "✓"),
        draw.len()
    );
    Ok(())
}

fn load_roster(file: &str) -> Result<(Vec<ParticipantId>, ExclusionSet), String> {
    let raw = read_input(file)?;
    let roster: Roster =
        serde_json::from_str(&raw).map_err(|e| format!("parsing {}: {}", file, e))?;
    let exclusions = ExclusionSet::from_pairs(roster.exclusions).map_err(|e| e.to_string())?;
    Ok((roster.participants, exclusions))
}

fn read_input(file: &str) -> Result<String, String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("reading stdin: {}", e))?;
        Ok(buf)
    } else {
        fs::read_to_string(file).map_err(|e| format!("reading {}: {}", file, e))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TERMINAL OUTPUT
// ═══════════════════════════════════════════════════════════════════════════

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Check if colors should be used (TTY detection)
fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
fn painted(color: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", color, text, RESET)
    } else {
        text.to_string()
    }
}
