use assert_cmd::Command;

#[test]
fn run_bundled_level_to_solved() {
    Command::cargo_bin("sokoban")
        .unwrap()
        .args(["--level", "1", "--moves", "r"])
        .assert()
        .success()
        .stdout("level 1/10\n#####\n# @*#\n#####\napplied 1 of 1 moves, solved\n")
        .stderr("");
}

#[test]
fn run_bundled_level_without_moves() {
    Command::cargo_bin("sokoban")
        .unwrap()
        .args(["--level", "2"])
        .assert()
        .success()
        .stdout("level 2/10\n######\n#@ OX#\n######\napplied 0 of 0 moves, not solved\n")
        .stderr("");
}

#[test]
fn run_level_file() {
    Command::cargo_bin("sokoban")
        .unwrap()
        .args(["--file", "levels/simplest.txt", "--moves", "R"])
        .assert()
        .success()
        .stdout("#####\n# @*#\n#####\napplied 1 of 1 moves, solved\n")
        .stderr("");
}

#[test]
fn run_level_out_of_range() {
    Command::cargo_bin("sokoban")
        .unwrap()
        .args(["--level", "99"])
        .assert()
        .failure()
        .stdout("")
        .stderr("level out of range (1-10)\n");
}

#[test]
fn run_level_not_a_number() {
    Command::cargo_bin("sokoban")
        .unwrap()
        .args(["--level", "abc"])
        .assert()
        .failure()
        .stdout("")
        .stderr("invalid number\n");
}

#[test]
fn run_bad_move_char() {
    Command::cargo_bin("sokoban")
        .unwrap()
        .args(["--moves", "rux"])
        .assert()
        .failure()
        .stdout("")
        .stderr("invalid move 'x', expected u, d, l or r\n");
}
