use agestats::people::{self, RecordError};
use agestats::stats::{self, AvgError};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

const DEFAULT_AGES: [f64; 7] = [10.0, 40.0, 50.0, 99.0, 103.0, 2.0, 0.0];

#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Average a list of ages, each of which must be within 1-100.
    Average {
        #[arg(allow_negative_numbers = true, default_values_t = DEFAULT_AGES)]
        ages: Vec<f64>,
    },

    /// Generate a person with a random birth year and month.
    Person {
        #[arg(long)]
        name: String,

        #[arg(long)]
        fav_color: String,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Report how many days a person has been alive.
    DaysAlive {
        /// Inline TOML table with `name` and `age` keys.
        #[arg(long)]
        record: String,
    },
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::info!("{args:#?}");

    match args.command {
        Command::Average { ages } => report_average(&ages)?,
        Command::Person {
            name,
            fav_color,
            seed,
        } => report_person(&name, &fav_color, seed)?,
        Command::DaysAlive { record } => report_days_alive(&record)?,
    }

    Ok(())
}

fn report_average(ages: &[f64]) -> Result<()> {
    match stats::bounded_avg(ages) {
        Ok(avg) => println!("Average was {avg:?}"),
        Err(AvgError::OutOfBounds) => println!("Invalid age in list of ages"),
        Err(error) => return Err(error).context("failed to average ages"),
    }
    Ok(())
}

fn report_person(name: &str, fav_color: &str, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha12Rng::seed_from_u64(seed),
        None => ChaCha12Rng::try_from_os_rng().context("failed to seed rng")?,
    };

    let person = people::make_person(name, fav_color, &mut rng).context("failed to make person")?;
    log::debug!("{person:#?}");

    let person_str = toml::to_string(&person).context("failed to serialize person")?;
    print!("{person_str}");
    Ok(())
}

fn report_days_alive(record: &str) -> Result<()> {
    let table: toml::Table = toml::from_str(record).context("failed to parse record")?;
    log::debug!("{table:#?}");

    match people::days_alive(&toml::Value::Table(table)) {
        Ok(days) => println!("{days}"),
        Err(RecordError::MissingKey(key)) => println!("Missing key: '{key}'"),
        Err(RecordError::NotARecord) => println!("Expected person to be a dict"),
        Err(error) => return Err(error).context("failed to count days alive"),
    }
    Ok(())
}
