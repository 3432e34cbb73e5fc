use assert_cmd::Command;

fn bin() -> Command {
    let mut cmd = Command::cargo_bin("sokoban-puzzle").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn replay_json_pushes() {
    let output = r"Playing levels/level1.json...
#######
#@ $ .#
#######

#######
# @$ .#
#######

#######
#  @$.#
#######

#######
#   @*#
#######

rRR
Moves: 3
Pushes: 2
LEVEL COMPLETE!
";

    bin()
        .arg("--moves")
        .arg("rrrr")
        .arg("levels/level1.json")
        .assert()
        .success()
        .stdout(output)
        .stderr("");
}

#[test]
fn replay_stops_when_blocked() {
    let output = r"Playing levels/one-way.txt...
###
#.#
# #
# #
#$#
#@#
###

###
#.#
# #
#$#
#@#
# #
###

Blocked: l
U
Moves: 1
Pushes: 1
Not solved
";

    bin()
        .arg("-m")
        .arg("ulu")
        .arg("levels/one-way.txt")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn interactive_play() {
    let output = r"Level 1/2
#######
#@ $ .#
#######

Level 1/2
#######
#   @*#
#######

rRR
Moves: 3
Pushes: 2
LEVEL COMPLETE!
Press n for level 2
Level 2/2
###
#.#
# #
# #
#$#
#@#
###

Bye!
";

    bin()
        .arg("levels/level1.json")
        .arg("levels/one-way.txt")
        .write_stdin("ddd\nn\nq\n")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn interactive_complete_and_move_on() {
    let output = r"Level 1/2
#######
#@ $ .#
#######

Level 1/2
#######
#   @*#
#######

rRR
Moves: 3
Pushes: 2
LEVEL COMPLETE!
Press n for level 2
Level 2/2
###
#.#
# #
# #
#$#
#@#
###

";

    bin()
        .arg("levels/level1.json")
        .arg("levels/one-way.txt")
        .write_stdin("dddn\n")
        .assert()
        .success()
        .stdout(output);

    let restarted = r"Level 1/1
#######
#@ $ .#
#######

Level 1/1
#######
#   @*#
#######

rRR
Moves: 3
Pushes: 2
LEVEL COMPLETE!
Level 1/1
#######
#@ $ .#
#######

";

    bin()
        .arg("levels/level1.json")
        .write_stdin("dddr\n")
        .assert()
        .success()
        .stdout(restarted);
}

#[test]
fn interactive_restart() {
    let output = r"Level 1/1
###
#.#
# #
# #
#$#
#@#
###

Level 1/1
###
#.#
# #
#$#
#@#
# #
###

Level 1/1
###
#.#
# #
# #
#$#
#@#
###

";

    bin()
        .arg("levels/one-way.txt")
        .write_stdin("w\nr\n")
        .assert()
        .success()
        .stdout(output);
}

#[test]
fn listing_levels() {
    let output = bin()
        .arg("--list")
        .arg("levels/level1.json")
        .arg("levels/two-rooms.codes")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("levels/level1.json"));
    assert!(stdout.contains("7x3"));
    assert!(stdout.contains("levels/two-rooms.codes"));
    assert!(stdout.contains("8x6"));
    assert!(stdout.contains("Solved"));
    assert!(stdout.contains("no"));
    assert!(!stdout.contains("yes"));
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr, only that it fails without printing to stdout
    bin()
        .arg("--codes")
        .arg("--xsb")
        .arg("levels/one-way.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_moves() {
    bin()
        .arg("--moves")
        .arg("uxu")
        .arg("levels/one-way.txt")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_invalid_level() {
    bin()
        .arg("--json")
        .arg("levels/one-way.txt")
        .assert()
        .failure()
        .stdout("");

    bin()
        .arg("levels/does-not-exist.txt")
        .assert()
        .failure()
        .stdout("");
}
