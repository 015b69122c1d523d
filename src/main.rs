use std::{env, error::Error, path::Path, path::PathBuf};

use planevec::components::{distance, AngleUnit, Vec2};
use planevec::sheet::{get_yaml_filenames, VectorSheet, DEFAULT_SHEET};
use planevec::util::log_lines;
use planevec::{veprintln, vprintln};

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().skip(1).collect();

    // Walk through the classic session instead of reading sheets.
    if args.contains(&String::from("--demo")) {
        return demo();
    }

    let mut paths: Vec<&str> = args.iter().map(String::as_str).collect();
    if paths.is_empty() {
        paths.push(DEFAULT_SHEET);
    }

    let mut loaded = 0;
    for path in paths {
        for file_path in sheet_files(Path::new(path)) {
            match VectorSheet::load(&file_path) {
                Ok(sheet) => {
                    loaded += 1;
                    for entry in sheet.report() {
                        log_lines(&entry);
                    }
                }
                Err(why) => veprintln!("Error while loading {}: {}", file_path.display(), why),
            }
        }
    }

    if loaded == 0 {
        return Err("no vector sheets loaded".into());
    }

    Ok(())
}

/// Expands a directory into its YAML files.
fn sheet_files(path: &Path) -> Vec<PathBuf> {
    if !path.is_dir() {
        return vec![path.to_path_buf()];
    }

    match get_yaml_filenames(path) {
        Ok(files) => files,
        Err(why) => {
            veprintln!("Unable to read {}: {}", path.display(), why);
            Vec::new()
        }
    }
}

fn demo() -> Result<(), Box<dyn Error>> {
    let v1 = Vec2::from_num(2, 10)?;
    vprintln!("{}", v1);
    vprintln!("{:.6}", v1.length());
    vprintln!("{:.6}", v1.angle(AngleUnit::Radians)?);
    log_lines(&v1.describe());

    let v2 = Vec2::from_num(-5, 2)?;
    vprintln!("{}", v1 + v2);
    vprintln!("{:.6}", v1.distance(&v2));
    vprintln!("{:.6}", distance(&v1, &v2));

    // On the y-axis the angle is +/-90 degrees, at the origin it has none.
    let up = Vec2::from_num(0, 5)?;
    log_lines(&up.describe());
    log_lines(&Vec2::ORIGIN.describe());

    Ok(())
}
