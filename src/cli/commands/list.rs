use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::report::{filter_by_day, total_worked};
use crate::core::session_logger::read_records;
use crate::errors::AppResult;
use crate::models::event_kind::EventKind;
use crate::models::record::LogRecord;
use crate::utils::date;
use crate::utils::duration::format_worked;
use ansi_term::Colour;
use serde::Serialize;

#[derive(Serialize)]
struct RecordView {
    day: String,
    time: String,
    event: EventKind,
    time_worked: String,
}

impl From<&LogRecord> for RecordView {
    fn from(r: &LogRecord) -> Self {
        Self {
            day: r.day_str(),
            time: r.time_str(),
            event: r.event,
            time_worked: r.worked_str(),
        }
    }
}

fn color_for_event(kind: EventKind) -> Colour {
    match kind {
        EventKind::TimeIn => Colour::Green,
        EventKind::TimeOut => Colour::Yellow,
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { day, today, json } = cmd {
        let filter = if *today {
            Some(date::today())
        } else {
            day.as_deref().map(date::parse_day).transpose()?
        };

        let store = open_store(cfg);
        let records = filter_by_day(read_records(&store)?, filter);

        if *json {
            let views: Vec<RecordView> = records.iter().map(RecordView::from).collect();
            println!("{}", serde_json::to_string_pretty(&views)?);
            return Ok(());
        }

        if records.is_empty() {
            println!("No records.");
            return Ok(());
        }

        print_table(&records)?;
    }

    Ok(())
}

fn print_table(records: &[LogRecord]) -> AppResult<()> {
    println!("{:<10}  {:<8}  {:<8}  TIME_WORKED", "DAY", "TIME", "EVENT");

    for r in records {
        // pad before painting so ANSI codes do not skew the columns
        let event = format!("{:<8}", r.event.as_str());
        println!(
            "{:<10}  {:<8}  {}  {}",
            r.day_str(),
            r.time_str(),
            color_for_event(r.event).paint(event),
            r.worked_str()
        );
    }

    println!("\nTotal worked: {}", format_worked(total_worked(records)?));
    Ok(())
}
