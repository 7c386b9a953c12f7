use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for supergraph
pub fn supergraph() -> Command {
    cargo_bin_cmd!("supergraph")
}

/// 1 -> 2 -> 3, one path
pub const CHAIN: &str = r#"
[[nodes]]
value = "first"

[[nodes]]
value = "second"

[[nodes]]
value = "third"

[[edges]]
from = 1
to = 2
value = "a"

[[edges]]
from = 2
to = 3
value = "b"
"#;

/// Two isolated nodes, no paths
#[allow(dead_code)]
pub const PAIR: &str = r#"
[[nodes]]
value = "left"

[[nodes]]
value = "right"
"#;

/// Write a graph document into `dir` and return its path
pub fn write_graph(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
