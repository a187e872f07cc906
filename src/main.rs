use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::info;
use temperament::{
    cents_to_ratio, generate_tuning_table, populate, try_parse_ratio_string, Keyboard, NoteName,
    NoteRange, Ratio, TuningConfig, TuningSystem, DEFAULT_BASE_FREQUENCY, DEFAULT_DECAY_LENGTH,
};

mod scala;

/// Explore alternate tuning systems on a virtual piano keyboard
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(ClapArgs, Debug)]
struct TuningArgs {
    /// Tuning system (equal, just, pythagorean, quarterCommaMeantone,
    /// werckmeisterIII, kirnbergerIII, youngWellTuned, centaur)
    #[arg(long, short, default_value_t = TuningSystem::Equal)]
    system: TuningSystem,

    /// Frequency of A4 in Hz
    #[arg(long, short, default_value_t = DEFAULT_BASE_FREQUENCY)]
    base_frequency: f64,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the per-pitch-class tuning table of a system
    Table {
        #[command(flatten)]
        tuning: TuningArgs,
    },
    /// Print every note of the keyboard with its frequency
    Keyboard {
        #[command(flatten)]
        tuning: TuningArgs,

        /// Lowest note on the keyboard
        #[arg(long, default_value = "A2")]
        low: NoteName,

        /// Highest note on the keyboard
        #[arg(long, default_value = "C6")]
        high: NoteName,

        /// Ring time of a played note in seconds, stored with --json
        #[arg(long, default_value_t = DEFAULT_DECAY_LENGTH)]
        decay_length: f64,

        /// Emit a saveable JSON configuration instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the frequency of a single note
    Frequency {
        /// Note name, e.g. C#4
        note: NoteName,

        #[command(flatten)]
        tuning: TuningArgs,
    },
    /// Convert a ratio such as 3/2 to cents
    ToCents {
        /// Ratio written as n/d
        ratio: String,
    },
    /// Approximate a cents value by a ratio
    ToRatio {
        /// Interval in cents
        #[arg(allow_hyphen_values = true)]
        cents: f64,
    },
    /// Load a saved JSON configuration and print its keyboard
    Load {
        /// Path to the configuration file
        config_file: PathBuf,
    },
    /// Write a tuning system as a Scala .scl file to stdout
    Scala {
        #[command(flatten)]
        tuning: TuningArgs,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Table { tuning } => {
            let table = generate_tuning_table(tuning.system);
            println!("{}", tuning.system.description());
            for (pitch_class, parameter) in table.iter() {
                println!(
                    "{:<3}{:>10}{:>10.1}",
                    pitch_class.as_str(),
                    parameter.ratio.to_string(),
                    parameter.cents
                );
            }
        }
        Commands::Keyboard {
            tuning,
            low,
            high,
            decay_length,
            json,
        } => {
            let range = NoteRange::new(low, high)?;
            let keyboard = populate(tuning.base_frequency, tuning.system, range)?;
            if json {
                let config = TuningConfig::from_keyboard(tuning.system.as_str(), &keyboard, decay_length);
                config.validate()?;
                println!("{}", config.to_json()?);
            } else {
                print_keyboard(&keyboard)?;
            }
        }
        Commands::Frequency { note, tuning } => {
            let range = NoteRange::new(note, note)?;
            let keyboard = populate(tuning.base_frequency, tuning.system, range)?;
            let frequency = keyboard
                .frequency(&note)
                .with_context(|| format!("{} is not on the keyboard", note))?;
            println!("{:.2}", frequency);
        }
        Commands::ToCents { ratio } => {
            let parsed = try_parse_ratio_string(&ratio).unwrap_or_else(|| {
                log::warn!("could not parse {:?} as a ratio, using 1/1", ratio);
                Ratio::UNISON
            });
            println!("{:.2}", parsed.cents());
        }
        Commands::ToRatio { cents } => {
            let ratio = cents_to_ratio(cents);
            println!("{} (~{:.6})", ratio, ratio.value());
        }
        Commands::Load { config_file } => {
            let json = std::fs::read_to_string(&config_file)
                .with_context(|| format!("reading {}", config_file.display()))?;
            let config = TuningConfig::from_json(&json)
                .with_context(|| format!("parsing {}", config_file.display()))?;
            info!("loaded {:?} with {} notes", config.name, config.notes.len());
            let keyboard = config.to_keyboard()?;
            print_keyboard(&keyboard)?;
        }
        Commands::Scala { tuning } => {
            let table = generate_tuning_table(tuning.system);
            print!("{}", scala::format_scl(tuning.system, &table));
        }
    }

    Ok(())
}

fn print_keyboard(keyboard: &Keyboard) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (note, config) in keyboard.iter() {
        writeln!(
            out,
            "{:<4}{:>10}{:>10.1}{:>10.2}",
            note.to_string(),
            config.ratio,
            config.cents,
            config.frequency
        )?;
    }
    Ok(())
}
