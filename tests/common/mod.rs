use assert_cmd::Command;

pub fn leech_cmd() -> Command {
    let mut cmd = Command::cargo_bin("leech").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}
