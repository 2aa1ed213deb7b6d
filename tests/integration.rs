//! Integration tests for the kingdoms engine binary.
//!
//! Tests full protocol sessions by spawning the engine process, sending
//! commands via stdin, and verifying stdout responses.

use std::io::{BufRead, Write};
use std::process::{Command, Stdio};

/// Sends a sequence of commands to the engine and collects stdout lines.
fn run_engine(commands: &[&str]) -> Vec<String> {
    let exe = env!("CARGO_BIN_EXE_kingdoms");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to start kingdoms");

    let mut stdin = child.stdin.take().unwrap();
    let stdout = child.stdout.take().unwrap();
    let reader = std::io::BufReader::new(stdout);

    for cmd in commands {
        writeln!(stdin, "{}", cmd).unwrap();
    }
    stdin.flush().unwrap();
    drop(stdin);

    let lines: Vec<String> = reader.lines().map(|l| l.unwrap()).collect();
    let status = child.wait().expect("failed to wait on child");
    assert!(status.success());
    lines
}

/// Red rank-2 castle collecting +6; a mountain walls it off from the blue
/// castle, whose segment holds a hazard doubled by a gold mine.
const SAMPLE_KFEN: &str = "r2,+6,M,-2,b1,G/6/6/6/6";

#[test]
fn isready_response() {
    let lines = run_engine(&["isready", "quit"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}

#[test]
fn empty_game_scores_zero() {
    let lines = run_engine(&["scores", "total", "quit"]);
    assert_eq!(lines[0], "scores red 0 blue 0 green 0 yellow 0");
    assert_eq!(lines[1], "total red 0 blue 0 green 0 yellow 0");
}

#[test]
fn position_then_scores() {
    let position = format!("position {}", SAMPLE_KFEN);
    let lines = run_engine(&[&position, "board", "scores", "quit"]);
    assert_eq!(lines[0], format!("board {}", SAMPLE_KFEN));
    // Red: 6 * 2. Blue: -2 doubled by the gold mine.
    assert_eq!(lines[1], "scores red 12 blue -4 green 0 yellow 0");
}

#[test]
fn place_and_erase_session() {
    let lines = run_engine(&[
        "place 0 0 g1",
        "place 0 3 +4",
        "scores",
        "place 2 3 D",
        "scores",
        "erase 2 3",
        "scores",
        "board",
        "quit",
    ]);
    assert_eq!(lines[0], "scores red 0 blue 0 green 4 yellow 0");
    assert_eq!(lines[1], "scores red 0 blue 0 green 0 yellow 0");
    assert_eq!(lines[2], "scores red 0 blue 0 green 4 yellow 0");
    assert_eq!(lines[3], "board g1,2,+4,2/6/6/6/6");
}

#[test]
fn analyze_emits_json() {
    let position = format!("position {}", SAMPLE_KFEN);
    let lines = run_engine(&[&position, "analyze", "quit"]);
    assert_eq!(lines.len(), 1);
    let json = lines[0].strip_prefix("analysis ").unwrap();
    let value: serde_json::Value = serde_json::from_str(json).unwrap();
    assert_eq!(value["scores"]["red"], 12);
    assert_eq!(value["scores"]["blue"], -4);
    assert_eq!(value["tiles"]["0,3"]["effective_value"], -4);
    assert_eq!(value["tiles"]["0,3"]["modifiers"][0], "Gold Mine");
    assert_eq!(value["castles"]["0,0"]["effective_rank"], 2);
}

#[test]
fn rounds_accumulate_into_total() {
    let position = format!("position {}", SAMPLE_KFEN);
    let lines = run_engine(&[
        &position,
        "round 2",
        "scores",
        &position,
        "round 3",
        "place 4 5 y4",
        "place 4 4 +1",
        "total",
        "quit",
    ]);
    assert_eq!(lines[0], "scores red 0 blue 0 green 0 yellow 0");
    assert_eq!(lines[1], "total red 24 blue -8 green 0 yellow 4");
}

#[test]
fn newgame_applies_board_options() {
    let lines = run_engine(&[
        "place 0 0 r1",
        "setoption name Rows value 2",
        "setoption name Cols value 3",
        "newgame",
        "board",
        "quit",
    ]);
    assert_eq!(lines, vec!["board 3/3".to_string()]);
}

#[test]
fn malformed_commands_are_ignored() {
    let lines = run_engine(&[
        "foobar",
        "position r1,+5/6",
        "place 9 9 D",
        "place 0 0 Q",
        "round 7",
        "erase",
        "isready",
        "board",
        "quit",
    ]);
    assert_eq!(lines[0], "readyok");
    assert_eq!(lines[1], "board 6/6/6/6/6");
}

#[test]
fn oversized_face_values_are_rejected() {
    let lines = run_engine(&[
        "position r1,+1073741824,G,3/6",
        "place 0 1 +2147483647",
        "place 0 1 +999",
        "place 0 0 r4",
        "place 0 2 G",
        "scores",
        "quit",
    ]);
    assert_eq!(lines, vec!["scores red 7992 blue 0 green 0 yellow 0".to_string()]);
}

#[test]
fn eof_without_quit_exits_cleanly() {
    let lines = run_engine(&["isready"]);
    assert_eq!(lines, vec!["readyok".to_string()]);
}
