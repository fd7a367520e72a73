use crate::config::HeaderPolicy;
use crate::core::index::DayIndex;
use crate::errors::{AppError, AppResult};
use crate::models::record::{HEADER, LogRecord, is_header};
use crate::models::session::Session;
use crate::store::LogStore;
use crate::store::codec::{RawRow, decode_rows, encode_row, encode_rows};
use crate::ui::messages::{info, success, warning};
use crate::utils::clock::Clock;
use crate::utils::date::format_day;
use chrono::NaiveDateTime;

/// Outcome of [`ensure_header`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderStatus {
    /// The log was missing or empty and now holds just the header.
    Created,
    /// The header was already the canonical one.
    Valid,
    /// The header was rewritten; `kept_rows` data rows survived.
    Migrated { kept_rows: usize },
    /// Everything was replaced by a bare header.
    Overwritten,
}

/// Make sure the first row of the log is the canonical header.
pub fn ensure_header<S: LogStore>(store: &mut S, policy: HeaderPolicy) -> AppResult<HeaderStatus> {
    let rows = if store.exists()? {
        decode_rows(&store.read()?)?
    } else {
        Vec::new()
    };

    let Some(first) = rows.first() else {
        store.replace(&encode_row(HEADER)?)?;
        success(format!("Created log file {}", store.location()));
        return Ok(HeaderStatus::Created);
    };

    if is_header(&first.fields) {
        return Ok(HeaderStatus::Valid);
    }

    match policy {
        HeaderPolicy::Abort => Err(AppError::HeaderMismatch {
            found: first.fields.join(","),
        }),
        HeaderPolicy::Overwrite => {
            store.replace(&encode_row(HEADER)?)?;
            warning(format!(
                "Unexpected header in {}: file reset to a bare header ({} row(s) discarded)",
                store.location(),
                rows.len() - 1
            ));
            Ok(HeaderStatus::Overwritten)
        }
        HeaderPolicy::Migrate => {
            // A first row that is itself a valid record means the header was
            // simply missing.
            let skip = usize::from(LogRecord::from_row(first.line, &first.fields).is_err());
            let kept: Vec<&RawRow> = rows.iter().skip(skip).collect();

            let body = encode_rows(
                std::iter::once(HEADER.map(String::from).to_vec())
                    .chain(kept.iter().map(|r| r.fields.clone())),
            )?;
            store.replace(&body)?;

            warning(format!(
                "Unexpected header in {}: rewritten, {} row(s) kept",
                store.location(),
                kept.len()
            ));
            Ok(HeaderStatus::Migrated {
                kept_rows: kept.len(),
            })
        }
    }
}

/// Every data row of the log, in append order. A canonical header on the
/// first row is skipped; any other malformed row is an error.
pub fn read_records<S: LogStore>(store: &S) -> AppResult<Vec<LogRecord>> {
    let rows = decode_rows(&store.read()?)?;
    let skip = usize::from(rows.first().is_some_and(|r| is_header(&r.fields)));

    rows.iter()
        .skip(skip)
        .map(|r| LogRecord::from_row(r.line, &r.fields))
        .collect()
}

fn append_record<S: LogStore>(store: &mut S, record: &LogRecord) -> AppResult<()> {
    store.append(&encode_row(record.to_row())?)
}

/// Append the TIME_IN row of `session`.
pub fn record_time_in<S: LogStore>(store: &mut S, session: &Session) -> AppResult<LogRecord> {
    append_time_in(store, session.time_in)
}

/// Append the TIME_OUT row of `session`, paired with the matching TIME_IN
/// already in the log.
pub fn record_time_out<S: LogStore>(store: &mut S, session: &Session) -> AppResult<LogRecord> {
    append_time_out(store, session.time_out, false)
}

fn append_time_in<S: LogStore>(store: &mut S, at: NaiveDateTime) -> AppResult<LogRecord> {
    let record = LogRecord::time_in(at);
    append_record(store, &record)?;
    success(format!("TIME_IN  {} {}", record.day_str(), record.time_str()));
    Ok(record)
}

/// With `require_open`, only a TIME_IN not yet followed by any TIME_OUT is
/// accepted as the pair.
fn append_time_out<S: LogStore>(
    store: &mut S,
    at: NaiveDateTime,
    require_open: bool,
) -> AppResult<LogRecord> {
    let records = read_records(store)?;
    let index = DayIndex::build(&records);

    let time_in = index
        .match_time_out(at)
        .filter(|_| !require_open || index.open_time_in().is_some())
        .ok_or_else(|| AppError::NoTimeIn(format_day(&at.date())))?;

    let record = LogRecord::time_out(at, at - time_in.timestamp());
    append_record(store, &record)?;
    success(format!(
        "TIME_OUT {} {} (worked {})",
        record.day_str(),
        record.time_str(),
        record.worked_str()
    ));
    Ok(record)
}

/// Full single-invocation sequence: header check, TIME_IN now, TIME_OUT
/// two hours later.
pub fn run_session<S: LogStore, C: Clock>(
    store: &mut S,
    clock: &C,
    policy: HeaderPolicy,
) -> AppResult<Session> {
    ensure_header(store, policy)?;
    let session = Session::starting_at(clock.now());
    record_time_in(store, &session)?;
    record_time_out(store, &session)?;
    Ok(session)
}

/// Clock in now, as its own invocation.
pub fn clock_in<S: LogStore, C: Clock>(
    store: &mut S,
    clock: &C,
    policy: HeaderPolicy,
) -> AppResult<LogRecord> {
    ensure_header(store, policy)?;
    let now = clock.now();

    let records = read_records(store)?;
    if let Some(open) = DayIndex::build(&records).open_time_in()
        && open.day == now.date()
    {
        warning(format!(
            "Already clocked in at {} today; recording a new TIME_IN anyway",
            open.time_str()
        ));
    }

    append_time_in(store, now)
}

/// Clock out now, pairing with the TIME_IN recorded by an earlier invocation.
pub fn clock_out<S: LogStore, C: Clock>(
    store: &mut S,
    clock: &C,
    policy: HeaderPolicy,
) -> AppResult<LogRecord> {
    ensure_header(store, policy)?;
    append_time_out(store, clock.now(), true)
}

/// TIME_IN that is still waiting for its TIME_OUT, if any.
pub fn open_session<S: LogStore>(store: &S) -> AppResult<Option<LogRecord>> {
    if !store.exists()? {
        info(format!("No log file at {}", store.location()));
        return Ok(None);
    }
    let records = read_records(store)?;
    Ok(DayIndex::build(&records).open_time_in().cloned())
}
