use assert_cmd::Command;

/// The `azex` binary in script mode with plain output, isolated from the
/// caller's configuration.
pub fn azex() -> Command {
    let mut cmd = Command::cargo_bin("azex").expect("azex binary is built");
    cmd.env("AZEX_CLI_SCRIPT", "1")
        .env("AZEX_PLAIN", "1")
        .env("NO_COLOR", "1")
        .env_remove("AZEX_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

/// Joins answers into newline-terminated script input.
pub fn script(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
