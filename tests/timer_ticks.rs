use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};

use quizline::model::{Question, QuestionBank};
use quizline::session::{Phase, Session};
use quizline::timer::{format_elapsed, round_seconds, Clock, Ticker};

fn one_question_bank() -> QuestionBank {
    QuestionBank::new(vec![Question {
        question: "Pick b".to_string(),
        options: vec!["a".to_string(), "b".to_string()],
        correct: 1,
    }])
    .unwrap()
}

fn epoch() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap()
}

#[test]
fn test_ticker_delivers_and_cancels() {
    let mut ticker = Ticker::spawn(Duration::from_millis(5));
    thread::sleep(Duration::from_millis(100));
    assert!(ticker.drain() > 0);

    ticker.cancel();
    assert!(ticker.is_cancelled());
    thread::sleep(Duration::from_millis(30));
    assert_eq!(ticker.drain(), 0);

    // Cancelling twice is harmless.
    ticker.cancel();
}

#[test]
fn test_background_ticks_stop_at_finish() {
    let mut s = Session::new(one_question_bank())
        .with_clock(Clock::fixed(epoch()))
        .with_tick_interval(Duration::from_millis(5));
    s.start().unwrap();

    thread::sleep(Duration::from_millis(100));
    assert!(s.poll_ticks() > 0);
    assert!(s.elapsed_seconds() > 0);

    s.clock_mut().advance(chrono::Duration::seconds(3));
    let summary = s.finish().unwrap();
    assert_eq!(summary.elapsed_seconds, 3);
    assert!(!s.is_timer_running());

    thread::sleep(Duration::from_millis(50));
    assert_eq!(s.poll_ticks(), 0);
    assert_eq!(s.elapsed_seconds(), 3);
    assert!(s.tick().is_none());
}

#[test]
fn test_restart_replaces_timer_and_resets_clock() {
    let mut s = Session::new(one_question_bank())
        .with_tick_interval(Duration::from_millis(5));
    s.start().unwrap();
    thread::sleep(Duration::from_millis(60));
    s.poll_ticks();
    assert!(s.elapsed_seconds() > 0);

    s.restart().unwrap();
    assert_eq!(s.elapsed_seconds(), 0);
    assert!(s.is_timer_running());
    assert_eq!(s.phase(), Phase::InProgress);
}

#[test]
fn test_tick_count_matches_wall_clock() {
    let mut s = Session::new(one_question_bank()).with_clock(Clock::fixed(epoch()));
    s.start().unwrap();

    for _ in 0..7 {
        s.tick();
        s.clock_mut().advance(chrono::Duration::seconds(1));
    }
    assert_eq!(s.elapsed_seconds(), 7);

    let summary = s.finish().unwrap();
    assert_eq!(summary.elapsed_seconds, 7);
}

#[test]
fn test_round_seconds() {
    let start = epoch();
    let at = |ms: i64| start + chrono::Duration::milliseconds(ms);
    assert_eq!(round_seconds(start, at(0)), 0);
    assert_eq!(round_seconds(start, at(499)), 0);
    assert_eq!(round_seconds(start, at(500)), 1);
    assert_eq!(round_seconds(start, at(2_400)), 2);
    assert_eq!(round_seconds(start, at(2_600)), 3);
    assert_eq!(round_seconds(at(1_000), start), 0);
}

#[test]
fn test_format_elapsed() {
    assert_eq!(format_elapsed(0), "0:00");
    assert_eq!(format_elapsed(65), "1:05");
    assert_eq!(format_elapsed(3_725), "1:02:05");
}

#[test]
fn test_fixed_clock_advances() {
    let mut clock = Clock::fixed(epoch());
    clock.advance(chrono::Duration::seconds(10));
    assert_eq!(clock.now(), epoch() + chrono::Duration::seconds(10));
}
