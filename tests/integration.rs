use std::{path::PathBuf, process::Command};

fn run_bin(args: &[&str]) -> (bool, String) {
    let bin = PathBuf::from(env!("CARGO_BIN_EXE_agestats"));

    let output = Command::new(bin)
        .args(args)
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to execute command");

    let stdout_str =
        String::from_utf8(output.stdout).expect("failed to convert stdout to string");
    (output.status.success(), stdout_str)
}

fn run_bin_ok(args: &[&str]) -> String {
    let (success, stdout_str) = run_bin(args);
    assert!(
        success,
        "failed to run binary with {args:?}\nstdout:\n{stdout_str}\n"
    );
    stdout_str
}

#[test]
fn average_of_default_ages_is_invalid() {
    let stdout_str = run_bin_ok(&["average"]);
    assert_eq!(stdout_str, "Invalid age in list of ages\n");
}

#[test]
fn average_of_given_ages() {
    assert_eq!(run_bin_ok(&["average", "2", "4", "6"]), "Average was 4.0\n");
    assert_eq!(run_bin_ok(&["average", "1", "100"]), "Average was 50.5\n");
    assert_eq!(run_bin_ok(&["average", "50"]), "Average was 50.0\n");
}

#[test]
fn average_rejects_out_of_bounds_ages() {
    assert_eq!(
        run_bin_ok(&["average", "10", "-5", "30"]),
        "Invalid age in list of ages\n"
    );
    assert_eq!(
        run_bin_ok(&["average", "100.5"]),
        "Invalid age in list of ages\n"
    );
}

#[test]
fn seeded_person_is_reproducible() {
    let args = ["person", "--name", "fluffy", "--fav-color", "blue", "--seed", "3"];
    let first = run_bin_ok(&args);
    let second = run_bin_ok(&args);
    assert_eq!(first, second);

    let table: toml::Table = toml::from_str(&first).expect("failed to parse person");
    assert_eq!(table.get("name").and_then(|v| v.as_str()), Some("fluffy"));
    assert_eq!(table.get("favColor").and_then(|v| v.as_str()), Some("blue"));

    let year = table
        .get("birthYear")
        .and_then(|v| v.as_integer())
        .expect("missing birth year");
    assert!((1900..=2020).contains(&year));
    let month = table
        .get("birthMonth")
        .and_then(|v| v.as_integer())
        .expect("missing birth month");
    assert!((1..=12).contains(&month));
}

#[test]
fn unseeded_person_is_generated() {
    let stdout_str = run_bin_ok(&["person", "--name", "whiskey", "--fav-color", "orange"]);
    assert!(stdout_str.contains("name = \"whiskey\""));
}

#[test]
fn days_alive_reports_known_failures() {
    assert_eq!(
        run_bin_ok(&["days-alive", "--record", "name = 'princess kitty'\nage = 10"]),
        "princess kitty has been alive for 3650 days\n"
    );
    assert_eq!(
        run_bin_ok(&["days-alive", "--record", "name = 'princess kitty'\nage = 10.5"]),
        "princess kitty has been alive for 3832.5 days\n"
    );
    assert_eq!(
        run_bin_ok(&["days-alive", "--record", "name = 7\nage = 10"]),
        "7 has been alive for 3650 days\n"
    );
    assert_eq!(
        run_bin_ok(&["days-alive", "--record", "name = 'princess kitty'"]),
        "Missing key: 'age'\n"
    );
    assert_eq!(
        run_bin_ok(&["days-alive", "--record", "age = 10"]),
        "Missing key: 'name'\n"
    );
}

#[test]
fn days_alive_propagates_other_failures() {
    let (success, _) = run_bin(&["days-alive", "--record", "name = 'fluffy'\nage = 'ten'"]);
    assert!(!success);

    let (success, _) = run_bin(&["days-alive", "--record", "not toml at all"]);
    assert!(!success);
}
