#![allow(dead_code)]

use std::path::{Path, PathBuf};

use protobuf::Message;
use scip::types::symbol_information::Kind;
use scip::types::{Document, Index, Occurrence, SymbolInformation, SymbolRole};
use tempfile::TempDir;

pub const DEFINITION: i32 = SymbolRole::Definition as i32;

pub const GREETER_GO: &str = r#"package greet

// Greeter says hello.
type Greeter struct {
	Name string
}

func (g Greeter) Hello() string {
	return "hello " + g.Name
}

const Version = "1.0"
"#;

pub fn go_symbol(descriptor: &str) -> String {
    format!("scip-go gomod example.com/greet v1.0.0 `example.com/greet`/{descriptor}")
}

pub fn symbol(
    id: &str,
    kind: Kind,
) -> SymbolInformation {
    SymbolInformation {
        symbol: id.to_string(),
        kind: kind.into(),
        ..Default::default()
    }
}

pub fn occurrence(
    id: &str,
    roles: i32,
    range: Vec<i32>,
) -> Occurrence {
    Occurrence {
        symbol: id.to_string(),
        symbol_roles: roles,
        range,
        ..Default::default()
    }
}

/// Index with one on-disk Go document covering the common kinds and edge cases.
pub fn greeter_index() -> Index {
    let greeter = go_symbol("Greeter#");
    let field = go_symbol("Greeter#Name.");
    let hello = go_symbol("Greeter#Hello().");
    let version = go_symbol("Version.");
    let undefined = go_symbol("Missing().");

    let mut greeter_info = symbol(&greeter, Kind::Struct);
    greeter_info.documentation = vec!["Greeter says hello.".to_string()];
    let mut hello_info = symbol(&hello, Kind::Method);
    hello_info.signature_documentation = Some(Document {
        text: "func (g Greeter) Hello() string".to_string(),
        ..Default::default()
    })
    .into();

    let document = Document {
        relative_path: "greet/greeter.go".to_string(),
        symbols: vec![
            greeter_info,
            symbol(&field, Kind::Field),
            hello_info,
            symbol(&version, Kind::Constant),
            symbol(&undefined, Kind::Function),
        ],
        occurrences: vec![
            occurrence(&greeter, DEFINITION, vec![4, 5, 12]),
            occurrence(&field, DEFINITION, vec![5, 1, 5]),
            occurrence(&hello, 0, vec![20, 3, 8]),
            occurrence(&hello, DEFINITION, vec![8, 17, 22]),
            occurrence(&version, DEFINITION, vec![12, 6, 13]),
            occurrence(&undefined, 0, vec![9, 1, 6]),
        ],
        ..Default::default()
    };

    Index {
        documents: vec![document],
        ..Default::default()
    }
}

/// Scratch workspace holding an encoded index and its source tree.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new(index: &Index) -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let bytes = index.write_to_bytes().expect("encode index");
        std::fs::write(dir.path().join("index.scip"), bytes).expect("write index");
        Self {
            dir,
        }
    }

    pub fn with_source(
        self,
        relative_path: &str,
        text: &str,
    ) -> Self {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create source dir");
        }
        std::fs::write(path, text).expect("write source");
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(
        &self,
        name: &str,
    ) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn read_output(
        &self,
        name: &str,
    ) -> serde_json::Value {
        let text = std::fs::read_to_string(self.path(name)).expect("output exists");
        serde_json::from_str(&text).expect("output is JSON")
    }
}
