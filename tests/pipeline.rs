// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Result;
use cliquefinder::config::{Config, OutputFormat};
use cliquefinder::pipeline;
use tempfile::TempDir;

const NAMES: &str = "alex\nbob\nalice\neve\ngrunt\nsly";

// alex, alice and grunt share organization 1; mallory is not one of the names.
const ORGANIZATIONS: &str = r#"{
    "alex":    [{ "id": 1, "login": "acme" }],
    "alice":   [{ "id": 1, "login": "acme" }],
    "grunt":   [{ "id": "1" }],
    "bob":     [{ "id": 5 }],
    "eve":     [],
    "sly":     [{ "id": 9 }],
    "mallory": [{ "id": 5 }]
}"#;

// Mutual: alice-bob, bob-eve, eve-grunt, eve-sly. sly follows alex one way.
const FOLLOWERS: &str = r#"{
    "ids": {
        "alex": 10, "bob": 20, "alice": 30, "eve": 40, "grunt": 50, "sly": 60
    },
    "followers": {
        "alex":  [60],
        "alice": [20],
        "bob":   [30, 40],
        "eve":   [20, 50, 60],
        "grunt": [40],
        "sly":   [40, 777]
    }
}"#;

const EDGES: &str = "# people outside the name list never show up\nalex mallory\n";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(names: &str) -> Result<Self> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("names.txt"), names)?;
        fs::write(dir.path().join("orgs.json"), ORGANIZATIONS)?;
        fs::write(dir.path().join("followers.json"), FOLLOWERS)?;
        fs::write(dir.path().join("edges.txt"), EDGES)?;
        Ok(Fixture { dir })
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    fn config(&self, output: &str) -> Config {
        let mut config = Config::new();
        config.names = Some(self.path("names.txt"));
        config.output = Some(self.path(output));
        config.sources.edge_lists = vec![self.path("edges.txt")];
        config.sources.organizations = Some(self.path("orgs.json"));
        config.sources.followers = Some(self.path("followers.json"));
        config
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    Ok(fs::read_to_string(path)?.lines().map(str::to_owned).collect())
}

#[test]
fn computes_correct_cliques() -> Result<()> {
    let fixture = Fixture::new(NAMES)?;
    let config = fixture.config("out.txt");

    let summary = pipeline::run(&config)?;

    let output = read_lines(&fixture.path("out.txt"))?;
    assert_eq!(
        output,
        [
            "alex alice grunt",
            "alice bob",
            "bob eve",
            "eve grunt",
            "eve sly"
        ]
    );
    assert_eq!(summary.names, 6);
    assert_eq!(summary.cliques_found, 5);
    assert_eq!(summary.cliques_written, 5);
    // 3 organization edges, 4 mutual follows and alex-mallory
    assert_eq!(summary.edges, 8);
    Ok(())
}

#[test]
fn overwrites_existing_output() -> Result<()> {
    let fixture = Fixture::new(NAMES)?;
    fs::write(fixture.path("out.txt"), "stale\ncontent\n")?;

    pipeline::run(&fixture.config("out.txt"))?;

    let output = read_lines(&fixture.path("out.txt"))?;
    assert_eq!(output.len(), 5);
    assert!(!output.iter().any(|line| line == "stale"));
    Ok(())
}

#[test]
fn json_with_singletons_in_parallel() -> Result<()> {
    let fixture = Fixture::new(&format!("{NAMES}\nzed\n"))?;
    let mut config = fixture.config("out.json");
    config.format = OutputFormat::Json;
    config.min_size = 1;
    config.parallel = true;

    let summary = pipeline::run(&config)?;

    let parsed: Vec<Vec<String>> =
        serde_json::from_str(&fs::read_to_string(fixture.path("out.json"))?)?;
    assert_eq!(
        parsed,
        [
            vec!["alex", "alice", "grunt"],
            vec!["alice", "bob"],
            vec!["bob", "eve"],
            vec!["eve", "grunt"],
            vec!["eve", "sly"],
            vec!["zed"],
        ]
    );
    assert_eq!(summary.cliques_written, 6);
    Ok(())
}

#[test]
fn missing_sources_leave_names_isolated() -> Result<()> {
    let fixture = Fixture::new(NAMES)?;
    let mut config = fixture.config("out.txt");
    config.sources = Default::default();
    config.min_size = 1;

    let summary = pipeline::run(&config)?;

    assert_eq!(summary.edges, 0);
    assert_eq!(
        read_lines(&fixture.path("out.txt"))?,
        ["alex", "alice", "bob", "eve", "grunt", "sly"]
    );
    Ok(())
}

#[test]
fn missing_names_file_is_an_error() -> Result<()> {
    let fixture = Fixture::new(NAMES)?;
    let mut config = fixture.config("out.txt");
    config.names = Some(fixture.path("nope.txt"));

    let err = pipeline::run(&config).unwrap_err();
    assert!(err.to_string().contains("input file does not exist"));
    assert!(!fixture.path("out.txt").exists());
    Ok(())
}

#[test]
fn binary_reads_config_file() -> Result<()> {
    let fixture = Fixture::new(NAMES)?;
    let config = format!(
        "names = {:?}\nformat = \"text\"\n\n[sources]\norganizations = {:?}\nfollowers = {:?}\n",
        fixture.path("names.txt"),
        fixture.path("orgs.json"),
        fixture.path("followers.json"),
    );
    fs::write(fixture.path("cliquefinder.toml"), config)?;

    let output = Command::new(env!("CARGO_BIN_EXE_cliquefinder"))
        .arg("--config")
        .arg(fixture.path("cliquefinder.toml"))
        .arg("--min-size")
        .arg("3")
        .env_remove("RUST_LOG")
        .output()?;
    // no output path anywhere
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("no output file given"));

    let output = Command::new(env!("CARGO_BIN_EXE_cliquefinder"))
        .arg(fixture.path("names.txt"))
        .arg(fixture.path("out.txt"))
        .arg("--config")
        .arg(fixture.path("cliquefinder.toml"))
        .arg("--min-size")
        .arg("3")
        .output()?;
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(read_lines(&fixture.path("out.txt"))?, ["alex alice grunt"]);
    Ok(())
}

#[test]
fn binary_fails_on_missing_input() -> Result<()> {
    let fixture = Fixture::new(NAMES)?;
    let output = Command::new(env!("CARGO_BIN_EXE_cliquefinder"))
        .arg(fixture.path("missing.txt"))
        .arg(fixture.path("out.txt"))
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error: input file does not exist"), "{stderr}");
    Ok(())
}
