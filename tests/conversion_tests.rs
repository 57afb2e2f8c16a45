//! End-to-end conversion tests against real directories.

use std::fs;
use std::path::Path;

use arff_sniff::{Converter, ConverterConfig, ProgressEvent};
use tempfile::TempDir;

fn data_section(arff: &str) -> Vec<&str> {
    arff.lines()
        .skip_while(|line| *line != "@data")
        .skip(1)
        .collect()
}

fn convert_dir(dir: &Path) -> Vec<ProgressEvent> {
    let mut events = Vec::new();
    Converter::default()
        .convert_directory(dir, |event| events.push(event.clone()))
        .unwrap();
    events
}

#[test]
fn test_data_section_is_verbatim() {
    let temp_dir = TempDir::new().unwrap();
    let input = "  1 , 2.50,red \n3,4e2,  blue\n?,,\n-0,+1,red \n";
    fs::write(temp_dir.path().join("spacing.csv"), input).unwrap();

    convert_dir(temp_dir.path());

    let arff = fs::read_to_string(temp_dir.path().join("spacing.arff")).unwrap();
    assert_eq!(data_section(&arff), input.lines().collect::<Vec<_>>());
    assert!(arff.contains("@attribute ATT_0\tNUMERIC\n"));
    assert!(arff.contains("@attribute ATT_1\tNUMERIC\n"));
    assert!(arff.contains("@attribute ATT_2\t{red ,  blue}\n"));
}

#[test]
fn test_dotted_name_maps_to_first_segment() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.weird.csv"), "x\n").unwrap();

    convert_dir(temp_dir.path());

    assert!(temp_dir.path().join("a.arff").exists());
    assert!(!temp_dir.path().join("a.weird.arff").exists());
}

#[test]
fn test_colliding_names_share_one_output() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.csv"), "1\n").unwrap();
    fs::write(temp_dir.path().join("a.weird.csv"), "z\n").unwrap();

    let events = convert_dir(temp_dir.path());

    let outputs: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            ProgressEvent::Converting { output, .. } => Some(output.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(outputs.len(), 2);
    assert!(outputs.iter().all(|o| o == &temp_dir.path().join("a.arff")));

    // Whichever input was listed last owns the file; nothing is appended.
    let arff = fs::read_to_string(temp_dir.path().join("a.arff")).unwrap();
    assert_eq!(data_section(&arff).len(), 1);
    assert_eq!(arff.matches("@Relation").count(), 1);
}

#[test]
fn test_rerun_is_identical() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("iris.csv"), "5.1,3.5,setosa\n6.2,2.9,virginica\n").unwrap();

    convert_dir(temp_dir.path());
    let first = fs::read(temp_dir.path().join("iris.arff")).unwrap();
    convert_dir(temp_dir.path());
    let second = fs::read(temp_dir.path().join("iris.arff")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_file_gets_bare_header() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("empty.csv"), "").unwrap();

    convert_dir(temp_dir.path());

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("empty.arff")).unwrap(),
        "@Relation FVS\n@data\n"
    );
}

#[test]
fn test_ragged_rows_use_last_row_width() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("ragged.csv"), "1,2,3,4\nx,y\n").unwrap();

    convert_dir(temp_dir.path());

    let arff = fs::read_to_string(temp_dir.path().join("ragged.arff")).unwrap();
    assert_eq!(
        arff,
        "@Relation FVS\n@attribute ATT_0\t{x}\n@attribute ATT_1\t{y}\n@data\n1,2,3,4\nx,y\n"
    );
}

#[test]
fn test_large_file_crosses_flush_threshold() {
    let temp_dir = TempDir::new().unwrap();
    let rows = 25_000;
    let mut input = String::new();
    for i in 0..rows {
        input.push_str(&format!("{i},{}\n", if i % 2 == 0 { "even" } else { "odd" }));
    }
    fs::write(temp_dir.path().join("big.csv"), &input).unwrap();

    let mut reports = Vec::new();
    Converter::default()
        .convert_directory(temp_dir.path(), |event| {
            if let ProgressEvent::Converted(report) = event {
                reports.push(report.clone());
            }
        })
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].rows, rows);
    assert!(reports[0].flushes >= 3);

    let arff = fs::read_to_string(temp_dir.path().join("big.arff")).unwrap();
    let data = data_section(&arff);
    assert_eq!(data.len(), rows);
    assert_eq!(data, input.lines().collect::<Vec<_>>());
    assert!(arff.contains("@attribute ATT_1\t{even,odd}\n"));
}

#[test]
fn test_custom_threshold_does_not_change_bytes() {
    let temp_dir = TempDir::new().unwrap();
    let input = "a,1\nb,2\nc,3\nd,4\ne,5\n";
    let small = temp_dir.path().join("small");
    let large = temp_dir.path().join("large");
    fs::create_dir(&small).unwrap();
    fs::create_dir(&large).unwrap();
    fs::write(small.join("t.csv"), input).unwrap();
    fs::write(large.join("t.csv"), input).unwrap();

    Converter::new(ConverterConfig::default().with_flush_threshold(1))
        .unwrap()
        .convert_directory(&small, |_| {})
        .unwrap();
    Converter::default().convert_directory(&large, |_| {}).unwrap();

    assert_eq!(
        fs::read(small.join("t.arff")).unwrap(),
        fs::read(large.join("t.arff")).unwrap()
    );
}
