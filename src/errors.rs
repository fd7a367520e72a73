//! Unified application error type.
//! Every module (store, core, cli, utils) returns AppError so that the
//! binary has a single place where failures are reported.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / codec
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM:SS)")]
    InvalidTime(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid event tag: {0}")]
    InvalidEvent(String),

    #[error("Invalid record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    // ---------------------------
    // Log file errors
    // ---------------------------
    #[error("Unexpected log header: '{found}' (expected 'day,time,event,time_worked')")]
    HeaderMismatch { found: String },

    #[error("No TIME_IN found for {0}")]
    NoTimeIn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
