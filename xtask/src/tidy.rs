use std::{fs, path::Path};

#[test]
fn no_debug_leftovers() {
    let src = workspace_root().join("crates/termflags/src");
    let mut offenders = Vec::new();
    for entry in fs::read_dir(&src).unwrap() {
        let path = entry.unwrap().path();
        let text = fs::read_to_string(&path).unwrap();
        for (i, line) in text.lines().enumerate() {
            if line.contains("dbg!(") || line.contains("todo!(") || line.trim_end() != line {
                offenders.push(format!("{}:{}", path.display(), i + 1));
            }
        }
    }
    assert!(offenders.is_empty(), "tidy check failed:\n{}", offenders.join("\n"));
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap()
}
