#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a configured `docnav` command suitable for integration tests.
///
/// The config directory points at a fresh empty directory so a developer's own
/// config never leaks in.
#[allow(dead_code)]
pub fn docnav_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("docnav"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("DOCNAV_CONFIG_DIR", config_dir);
    cmd.env_remove("DOCNAV_CONFIG");
    cmd.env_remove("DOCNAV_DOCS_DIR");
    cmd.env_remove("DOCNAV_OUTPUT_FORMAT");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// A documents directory plus an isolated config directory.
#[allow(dead_code)]
pub struct Fixture {
    pub docs: TempDir,
    pub config: TempDir,
}

#[allow(dead_code)]
impl Fixture {
    pub fn new(docs: &[(&str, &str)]) -> Self {
        let fixture = Self {
            docs: tempfile::tempdir().expect("docs dir"),
            config: tempfile::tempdir().expect("config dir"),
        };
        for (id, text) in docs {
            std::fs::write(fixture.docs.path().join(format!("{id}.md")), text).expect("write doc");
        }
        fixture
    }

    /// `docnav --docs-dir <docs>` with the isolated config directory.
    pub fn cmd(&self) -> Command {
        let mut cmd = docnav_cmd(self.config.path());
        cmd.arg("--docs-dir").arg(self.docs.path());
        cmd
    }

    pub fn write_config(&self, toml: &str) {
        std::fs::write(self.config.path().join("config.toml"), toml).expect("write config");
    }
}
