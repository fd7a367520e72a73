use chrono::{NaiveDate, NaiveDateTime};
use timeactions::config::HeaderPolicy;
use timeactions::core::session_logger::{
    HeaderStatus, clock_in, clock_out, ensure_header, open_session, read_records, record_time_in,
    record_time_out, run_session,
};
use timeactions::errors::AppError;
use timeactions::models::event_kind::EventKind;
use timeactions::models::session::Session;
use timeactions::store::MemoryStore;
use timeactions::utils::clock::FixedClock;

const HEADER_LINE: &str = "day,time,event,time_worked\n";

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn test_fresh_run_writes_header_in_and_out() {
    let mut store = MemoryStore::new();
    let clock = FixedClock(at(2026, 10, 14, 9, 15, 0));

    let session = run_session(&mut store, &clock, HeaderPolicy::Migrate).expect("run session");

    assert_eq!(session.time_out, at(2026, 10, 14, 11, 15, 0));
    assert_eq!(
        store.text().unwrap(),
        "day,time,event,time_worked\n\
         14/10/2026,09:15:00,TIME_IN,N/A\n\
         14/10/2026,11:15:00,TIME_OUT,2:00:00\n"
    );
}

#[test]
fn test_run_across_midnight_pairs_with_previous_day() {
    let mut store = MemoryStore::new();
    let clock = FixedClock(at(2026, 10, 14, 23, 30, 0));

    run_session(&mut store, &clock, HeaderPolicy::Migrate).expect("run session");

    let records = read_records(&store).expect("read back");
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].day, NaiveDate::from_ymd_opt(2026, 10, 15).unwrap());
    assert_eq!(records[1].time_str(), "01:30:00");
    assert_eq!(records[1].worked_str(), "2:00:00");
}

#[test]
fn test_time_out_uses_existing_time_in_of_same_day() {
    let mut store =
        MemoryStore::with_contents(format!("{HEADER_LINE}14/10/2026,08:00:00,TIME_IN,N/A\n"));
    let session = Session::starting_at(at(2026, 10, 14, 9, 0, 0));

    let out = record_time_out(&mut store, &session).expect("time out");

    assert_eq!(out.event, EventKind::TimeOut);
    assert_eq!(out.worked_str(), "3:00:00");
}

#[test]
fn test_time_out_prefers_latest_time_in_of_the_day() {
    let mut store = MemoryStore::with_contents(format!(
        "{HEADER_LINE}\
         13/10/2026,07:00:00,TIME_IN,N/A\n\
         14/10/2026,07:00:00,TIME_IN,N/A\n\
         14/10/2026,08:00:00,TIME_OUT,1:00:00\n\
         14/10/2026,10:00:00,TIME_IN,N/A\n"
    ));
    let session = Session::starting_at(at(2026, 10, 14, 10, 30, 0));

    let out = record_time_out(&mut store, &session).expect("time out");

    assert_eq!(out.worked_str(), "2:30:00");
}

#[test]
fn test_time_out_without_time_in_fails_and_writes_nothing() {
    let before = format!("{HEADER_LINE}12/10/2026,08:00:00,TIME_IN,N/A\n");
    let mut store = MemoryStore::with_contents(before.clone());
    let session = Session::starting_at(at(2026, 10, 14, 9, 0, 0));

    let err = record_time_out(&mut store, &session).unwrap_err();

    assert!(matches!(err, AppError::NoTimeIn(ref d) if d == "14/10/2026"));
    assert_eq!(store.text().unwrap(), before);
}

#[test]
fn test_closed_session_of_previous_day_is_not_reused() {
    let mut store = MemoryStore::with_contents(format!(
        "{HEADER_LINE}\
         13/10/2026,22:00:00,TIME_IN,N/A\n\
         13/10/2026,23:00:00,TIME_OUT,1:00:00\n"
    ));

    let err = clock_out(
        &mut store,
        &FixedClock(at(2026, 10, 14, 1, 0, 0)),
        HeaderPolicy::Migrate,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::NoTimeIn(_)));
}

#[test]
fn test_clock_out_after_closed_session_fails() {
    let before = format!(
        "{HEADER_LINE}\
         14/10/2026,08:00:00,TIME_IN,N/A\n\
         14/10/2026,12:00:00,TIME_OUT,4:00:00\n"
    );
    let mut store = MemoryStore::with_contents(before.clone());
    assert!(open_session(&store).expect("status").is_none());

    let err = clock_out(
        &mut store,
        &FixedClock(at(2026, 10, 14, 17, 0, 0)),
        HeaderPolicy::Migrate,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::NoTimeIn(ref d) if d == "14/10/2026"));
    assert_eq!(store.text().unwrap(), before);
}

#[test]
fn test_header_created_when_missing() {
    let mut store = MemoryStore::new();

    let status = ensure_header(&mut store, HeaderPolicy::Abort).expect("header");

    assert_eq!(status, HeaderStatus::Created);
    assert_eq!(store.text().unwrap(), HEADER_LINE);
}

#[test]
fn test_valid_header_is_left_alone() {
    let contents = format!("{HEADER_LINE}14/10/2026,08:00:00,TIME_IN,N/A\n");
    let mut store = MemoryStore::with_contents(contents.clone());

    let status = ensure_header(&mut store, HeaderPolicy::Overwrite).expect("header");

    assert_eq!(status, HeaderStatus::Valid);
    assert_eq!(store.text().unwrap(), contents);
}

#[test]
fn test_overwrite_policy_discards_everything() {
    let mut store = MemoryStore::with_contents(
        "date,hour,kind,worked\n14/10/2026,08:00:00,TIME_IN,N/A\n",
    );

    let status = ensure_header(&mut store, HeaderPolicy::Overwrite).expect("header");

    assert_eq!(status, HeaderStatus::Overwritten);
    assert_eq!(store.text().unwrap(), HEADER_LINE);
}

#[test]
fn test_migrate_policy_keeps_data_rows() {
    let mut store = MemoryStore::with_contents(
        "date,hour,kind,worked\n14/10/2026,08:00:00,TIME_IN,N/A\n",
    );

    let status = ensure_header(&mut store, HeaderPolicy::Migrate).expect("header");

    assert_eq!(status, HeaderStatus::Migrated { kept_rows: 1 });
    assert_eq!(
        store.text().unwrap(),
        format!("{HEADER_LINE}14/10/2026,08:00:00,TIME_IN,N/A\n")
    );
}

#[test]
fn test_migrate_policy_keeps_first_row_when_header_is_missing() {
    let mut store = MemoryStore::with_contents(
        "14/10/2026,08:00:00,TIME_IN,N/A\n14/10/2026,09:00:00,TIME_OUT,1:00:00\n",
    );

    let status = ensure_header(&mut store, HeaderPolicy::Migrate).expect("header");

    assert_eq!(status, HeaderStatus::Migrated { kept_rows: 2 });
    assert_eq!(read_records(&store).unwrap().len(), 2);
}

#[test]
fn test_abort_policy_leaves_file_untouched() {
    let contents = "date,hour,kind,worked\n14/10/2026,08:00:00,TIME_IN,N/A\n";
    let mut store = MemoryStore::with_contents(contents);

    let err = ensure_header(&mut store, HeaderPolicy::Abort).unwrap_err();

    assert!(matches!(err, AppError::HeaderMismatch { ref found } if found == "date,hour,kind,worked"));
    assert_eq!(store.text().unwrap(), contents);
}

#[test]
fn test_clock_in_then_clock_out_in_separate_steps() {
    let mut store = MemoryStore::new();

    clock_in(
        &mut store,
        &FixedClock(at(2026, 10, 14, 8, 45, 0)),
        HeaderPolicy::Migrate,
    )
    .expect("clock in");

    let open = open_session(&store).expect("status").expect("open session");
    assert_eq!(open.time_str(), "08:45:00");

    let out = clock_out(
        &mut store,
        &FixedClock(at(2026, 10, 14, 17, 15, 30)),
        HeaderPolicy::Migrate,
    )
    .expect("clock out");

    assert_eq!(out.worked_str(), "8:30:30");
    assert!(open_session(&store).expect("status").is_none());
}

#[test]
fn test_time_in_record_reads_back_identically() {
    let mut store = MemoryStore::new();
    ensure_header(&mut store, HeaderPolicy::Migrate).unwrap();
    let session = Session::starting_at(at(2026, 2, 3, 4, 5, 6));

    let written = record_time_in(&mut store, &session).expect("time in");
    let read = read_records(&store).expect("read back");

    assert_eq!(read, vec![written]);
    assert_eq!(read[0].timestamp(), session.time_in);
}

#[test]
fn test_malformed_row_is_reported_with_its_line() {
    let store = MemoryStore::with_contents(format!(
        "{HEADER_LINE}14/10/2026,08:00:00,TIME_IN,N/A\n2026-10-14,09:00:00,TIME_OUT,1:00:00\n"
    ));

    let err = read_records(&store).unwrap_err();

    assert!(matches!(err, AppError::InvalidRecord { line: 3, .. }));
}

#[test]
fn test_reads_crlf_log_with_quoted_durations() {
    let store = MemoryStore::with_contents(
        "day,time,event,time_worked\r\n\
         13/10/2026,20:00:00,TIME_IN,N/A\r\n\
         14/10/2026,22:00:00,TIME_OUT,\"1 day, 2:00:00\"\r\n",
    );

    let records = read_records(&store).expect("read");

    assert_eq!(records.len(), 2);
    assert_eq!(records[1].worked_str(), "1 day, 2:00:00");
}

#[test]
fn test_read_missing_log_is_io_error() {
    let store = MemoryStore::new();

    let err = read_records(&store).unwrap_err();

    assert!(matches!(err, AppError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}
