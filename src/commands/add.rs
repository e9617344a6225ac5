//! Entry logging command.
//!
//! One subcommand per entry kind. Values that need correcting are reported as
//! warnings; entries that cannot be stored are rejected with an error
//! message.

use super::open_tracker;
use crate::{
    libs::{
        activity::Activity,
        config::Config,
        entry::Entry,
        food::FoodIntake,
        formatter::parse_date_arg,
        measurement::Measurement,
        messages::Message,
        note::DailyNote,
        water::WaterIntake,
    },
    msg_bail_anyhow, msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct AddArgs {
    #[command(subcommand)]
    command: AddCommand,

    /// Entry date: `today` or YYYY-MM-DD
    #[arg(short, long, global = true, default_value = "today")]
    date: String,
}

#[derive(Debug, Subcommand)]
enum AddCommand {
    /// Body weight and height
    Measurement {
        /// Weight in kilograms
        weight: f64,
        /// Height in centimetres
        height: f64,
    },
    /// Physical activity
    Activity {
        /// Activity type, one of the configured categories
        activity_type: String,
        /// Duration in minutes
        duration: i64,
        /// Calories burned
        #[arg(short, long)]
        calories: Option<f64>,
        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Food intake
    Food {
        /// What was eaten
        description: String,
        /// Energy in kcal
        calories: f64,
        /// Protein in grams
        #[arg(long)]
        protein: Option<f64>,
        /// Carbohydrates in grams
        #[arg(long)]
        carbs: Option<f64>,
        /// Fat in grams
        #[arg(long)]
        fat: Option<f64>,
    },
    /// Water intake
    Water {
        /// Amount in millilitres
        amount: i64,
    },
    /// Daily mood and energy note
    Note {
        /// Mood from 1 to 5
        #[arg(short, long)]
        mood: Option<i64>,
        /// Energy from 1 to 5
        #[arg(short, long)]
        energy: Option<i64>,
        /// Free-text note
        #[arg(short, long)]
        text: Option<String>,
    },
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let date = parse_date_arg(&args.date)?;

    let mut entry: Entry = match args.command {
        AddCommand::Measurement { weight, height } => Measurement::new(date, weight, height).into(),
        AddCommand::Activity {
            activity_type,
            duration,
            calories,
            note,
        } => {
            let config = Config::read()?;
            let Some(category) = config.find_category(&activity_type) else {
                msg_bail_anyhow!(Message::UnknownActivityType(activity_type, config.activity_categories.join(", ")));
            };
            Activity::new(date, category, duration, calories, note.as_deref()).into()
        }
        AddCommand::Food {
            description,
            calories,
            protein,
            carbs,
            fat,
        } => FoodIntake::new(date, &description, calories, protein, carbs, fat).into(),
        AddCommand::Water { amount } => WaterIntake::new(date, amount).into(),
        AddCommand::Note { mood, energy, text } => DailyNote::new(date, mood, energy, text.as_deref()).into(),
    };

    for issue in entry.issues() {
        msg_warning!(Message::EntryIssue(issue.to_string()));
    }

    let kind = entry.kind().label().to_string();
    if !entry.is_storable() {
        msg_error!(Message::EntryRejected(kind));
        return Ok(());
    }

    let tracker = open_tracker()?;
    match (tracker.add(&mut entry), entry.id()) {
        (true, Some(id)) => msg_success!(Message::EntryAdded(kind, id)),
        _ => msg_error!(Message::EntryAddFailed(kind)),
    }
    Ok(())
}
