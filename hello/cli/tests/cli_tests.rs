use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the hello binary command
fn hello_cmd() -> Command {
    let mut cmd = Command::cargo_bin("hello").unwrap();
    cmd.env_remove("COMPLETE").env_remove("RUST_LOG");
    cmd
}

mod positional_counts {
    use super::*;

    #[test]
    fn greets_single_count() {
        hello_cmd()
            .arg("42")
            .assert()
            .success()
            .stdout("Hello, there are 42worlds\n");
    }

    #[test]
    fn greets_zero() {
        hello_cmd()
            .arg("0")
            .assert()
            .success()
            .stdout("Hello, there are 0worlds\n");
    }

    #[test]
    fn greets_negative_count() {
        hello_cmd()
            .arg("-5")
            .assert()
            .success()
            .stdout("Hello, there are -5worlds\n");
    }

    #[test]
    fn greets_each_count_in_order() {
        hello_cmd()
            .args(["1", "-2", "300"])
            .assert()
            .success()
            .stdout(
                "Hello, there are 1worlds\n\
                 Hello, there are -2worlds\n\
                 Hello, there are 300worlds\n",
            );
    }

    #[test]
    fn same_count_produces_same_output() {
        let output1 = hello_cmd().arg("17").output().expect("Failed to execute");
        let output2 = hello_cmd().arg("17").output().expect("Failed to execute");

        assert_eq!(output1.stdout, output2.stdout);
    }
}

mod stdin_mode {
    use super::*;

    #[test]
    fn reads_piped_counts() {
        hello_cmd()
            .write_stdin("3\n4\n")
            .assert()
            .success()
            .stdout("Hello, there are 3worlds\nHello, there are 4worlds\n");
    }

    #[test]
    fn dash_reads_stdin() {
        hello_cmd()
            .arg("-")
            .write_stdin("8")
            .assert()
            .success()
            .stdout("Hello, there are 8worlds\n");
    }

    #[test]
    fn skips_blank_lines_and_trims() {
        hello_cmd()
            .arg("-")
            .write_stdin("\n  5  \n\n")
            .assert()
            .success()
            .stdout("Hello, there are 5worlds\n");
    }

    #[test]
    fn empty_stdin_fails() {
        hello_cmd()
            .arg("-")
            .write_stdin("")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("no world counts"));
    }
}

mod errors {
    use super::*;

    #[test]
    fn rejects_non_numeric_count() {
        hello_cmd()
            .arg("seven")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Error: invalid world count 'seven'"));
    }

    #[test]
    fn rejects_out_of_range_count() {
        hello_cmd()
            .arg("99999999999")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid world count"));
    }

    #[test]
    fn prints_greetings_before_first_invalid_count() {
        hello_cmd()
            .args(["1", "nope", "3"])
            .assert()
            .failure()
            .code(1)
            .stdout("Hello, there are 1worlds\n")
            .stderr(predicate::str::contains("'nope'"));
    }
}

mod logging {
    use super::*;

    #[test]
    fn verbose_logs_stay_off_stdout() {
        hello_cmd()
            .args(["-vv", "2"])
            .assert()
            .success()
            .stdout("Hello, there are 2worlds\n")
            .stderr(predicate::str::contains("formatting greeting"));
    }

    #[test]
    fn quiet_by_default() {
        hello_cmd()
            .arg("2")
            .assert()
            .success()
            .stderr(predicate::str::is_empty());
    }
}

mod help_and_completions {
    use super::*;

    #[test]
    fn shows_help() {
        hello_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("Print a greeting for each world count"))
            .stdout(predicate::str::contains("--verbose"))
            .stdout(predicate::str::contains("SHELL COMPLETIONS"));
    }

    #[test]
    fn shows_version() {
        hello_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("hello 0.1.0"));
    }

    #[test]
    fn generates_bash_completions() {
        Command::cargo_bin("hello")
            .unwrap()
            .env("COMPLETE", "bash")
            .assert()
            .success()
            .stdout(predicate::str::contains("hello"));
    }

    #[test]
    fn unknown_shell_fails() {
        Command::cargo_bin("hello")
            .unwrap()
            .env("COMPLETE", "tcsh")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("unknown shell: tcsh"));
    }
}
