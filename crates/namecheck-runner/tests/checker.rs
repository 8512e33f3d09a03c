#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use namecheck_core::error::{FATAL_MESSAGE, NOT_FOUND_MESSAGE};
use namecheck_core::{AllowList, LookupOutcome, NameCheckError};
use namecheck_runner::checker::{Checker, FOUND_BANNER};
use namecheck_runner::config::{self, RunnerConfig};
use namecheck_runner::directory::{NameDirectory, StaticDirectory};
use namecheck_runner::runner;

fn default_checker() -> Checker {
    Checker::new(Arc::new(StaticDirectory::default()))
}

async fn check(name: &str) -> (Result<(), NameCheckError>, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = default_checker().check(name, &mut out, &mut err).await;
    (res, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
}

#[tokio::test]
async fn found_name_prints_two_lines() {
    let (res, out, err) = check("colin").await;
    assert_eq!(res, Ok(()));
    assert_eq!(out, "It was found.\nfound\n");
    assert_eq!(out.lines().next(), Some(FOUND_BANNER));
    assert!(err.is_empty());
}

#[tokio::test]
async fn missing_name_is_fatal() {
    let (res, out, err) = check("nobody").await;
    let e = res.expect_err("must fail");
    assert_eq!(e, NameCheckError::Fatal);
    assert_eq!(e.to_string(), FATAL_MESSAGE);
    assert_eq!(err, format!("{NOT_FOUND_MESSAGE}\n"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn capitalized_name_is_not_found() {
    let (res, out, _) = check("Colin").await;
    assert_eq!(res, Err(NameCheckError::Fatal));
    assert!(out.is_empty());
}

/// Counts resolutions before delegating to the wrapped directory.
struct CountingDirectory {
    inner: StaticDirectory,
    calls: AtomicUsize,
}

#[async_trait]
impl NameDirectory for CountingDirectory {
    async fn lookup(&self, name: &str) -> LookupOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.lookup(name).await
    }
}

#[tokio::test]
async fn static_directory_outcomes() {
    let dir = StaticDirectory::default();
    assert_eq!(dir.lookup("bob").await, Ok("found"));
    assert_eq!(dir.lookup("nobody").await, Err(NameCheckError::NameNotFound));
}

#[tokio::test]
async fn check_resolves_directory_once_per_call() {
    let dir = Arc::new(CountingDirectory {
        inner: StaticDirectory::default(),
        calls: AtomicUsize::new(0),
    });
    let checker = Checker::new(dir.clone());
    let mut out = Vec::new();
    let mut err = Vec::new();

    checker.check("colin", &mut out, &mut err).await.unwrap();
    assert_eq!(dir.calls.load(Ordering::SeqCst), 1);

    checker.check("nobody", &mut out, &mut err).await.expect_err("must fail");
    assert_eq!(dir.calls.load(Ordering::SeqCst), 2);
}

#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn every_lookup_emits_debug_event() {
    let logs = LogBuf::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    check("colin").await.0.unwrap();
    check("nobody").await.0.expect_err("must fail");

    let text = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
    assert_eq!(text.matches("lookup resolved").count(), 2);
    assert!(text.contains("found=true"));
    assert!(text.contains("found=false"));
}

#[tokio::test]
async fn default_run_stops_at_first_failure() {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = runner::run(&RunnerConfig::default(), &mut out, &mut err).await;

    assert_eq!(res, Err(NameCheckError::Fatal));
    assert_eq!(String::from_utf8(out).unwrap(), "It was found.\nfound\n");
    assert_eq!(String::from_utf8(err).unwrap(), "name not found\n");
}

#[tokio::test]
async fn run_skips_names_after_failure() {
    let cfg = config::load_from_str("version: 1\nchecks: [\"nobody\", \"colin\"]\n").unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = runner::run(&cfg, &mut out, &mut err).await;

    assert_eq!(res, Err(NameCheckError::Fatal));
    assert!(out.is_empty());
    assert_eq!(String::from_utf8(err).unwrap(), "name not found\n");
}

#[tokio::test]
async fn run_all_found_succeeds() {
    let cfg = config::load_from_str(
        "version: 1\nnames: [\"alice\"]\nchecks: [\"alice\", \"alice\"]\n",
    )
    .unwrap();
    let mut out = Vec::new();
    let mut err = Vec::new();
    runner::run(&cfg, &mut out, &mut err).await.unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "It was found.\nfound\n".repeat(2));
    assert!(err.is_empty());
}

#[tokio::test]
async fn custom_list_replaces_default() {
    let list = AllowList::new(vec!["alice".into()]).unwrap();
    let checker = Checker::new(Arc::new(StaticDirectory::new(list)));
    let mut out = Vec::new();
    let mut err = Vec::new();
    let res = checker.check("colin", &mut out, &mut err).await;
    assert_eq!(res, Err(NameCheckError::Fatal));
}
