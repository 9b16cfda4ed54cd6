//! BoM CSV import and result export tests

use circmap::config::OutputConfig;
use circmap::io::output::CsvWriter;
use circmap::io::{load_bom, read_bom};
use circmap::{assess, sanitize_components, Component, OutputWriter, ProductParams};
use indoc::indoc;
use pretty_assertions::assert_eq;

const BOM: &str = indoc! {"
    id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp
    c1,Casing,steel,stamping,2.5,0.3,0.95,0.9,0.5,0.5,0.8,0.85
    c2,Board,fr4,smt,0.4,,0.9,0.85,0,0,0.5,0.6
"};

#[test]
fn loads_component_records() {
    let components = read_bom(BOM.as_bytes(), false).unwrap();
    assert_eq!(components.len(), 2);

    let casing = &components[0];
    assert_eq!(casing.id, "c1");
    assert_eq!(casing.name, "Casing");
    assert_eq!(casing.material, "steel");
    assert_eq!(casing.process, "stamping");
    assert_eq!(casing.mass_kg, 2.5);
    assert_eq!(casing.fr, 0.3);
    assert_eq!(casing.erfp, 0.85);
}

#[test]
fn empty_factor_cell_becomes_nan_then_clamps_to_zero() {
    let components = read_bom(BOM.as_bytes(), false).unwrap();
    assert!(components[1].fr.is_nan());

    let sanitized = sanitize_components(&components).unwrap();
    assert_eq!(sanitized[1].fr, 0.0);
}

#[test]
fn percent_mode_scales_factor_columns_only() {
    let data = indoc! {"
        id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp
        c1,Casing,steel,stamping,2.5,30,95,90,50,50,80,85
    "};
    let components = read_bom(data.as_bytes(), true).unwrap();
    let casing = &components[0];
    assert_eq!(casing.mass_kg, 2.5);
    assert_eq!(casing.fr, 0.3);
    assert_eq!(casing.efp, 0.95);
    assert_eq!(casing.ems, 0.8);
}

#[test]
fn duplicate_component_ids_are_rejected() {
    let data = indoc! {"
        id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp
        c1,Casing,steel,stamping,2.5,0,1,1,0,0,0,0
        c1,Casing copy,steel,stamping,1.0,0,1,1,0,0,0,0
    "};
    let err = read_bom(data.as_bytes(), false).unwrap_err().to_string();
    assert!(err.contains("duplicate"), "unexpected message: {}", err);
    assert!(err.contains("c1"));
}

#[test]
fn unparsable_mass_is_a_hard_error_naming_the_record() {
    let data = indoc! {"
        id,name,material,process,mass_kg,fr,efp,ecp,cfp,ccp,ems,erfp
        c1,Casing,steel,stamping,heavy,0,1,1,0,0,0,0
    "};
    let err = read_bom(data.as_bytes(), false).unwrap_err().to_string();
    assert!(err.contains("c1"));
    assert!(err.contains("mass"));
    assert!(err.contains("record 2"));
}

#[test]
fn load_bom_round_trips_through_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bom.csv");
    std::fs::write(&path, BOM).unwrap();

    let components = load_bom(&path, false).unwrap();
    assert_eq!(components.len(), 2);
    assert_eq!(components[1].id, "c2");
}

#[test]
fn missing_file_reports_the_path() {
    let err = load_bom(std::path::Path::new("does-not-exist.csv"), false)
        .unwrap_err()
        .to_string();
    assert!(err.contains("does-not-exist.csv"));
}

fn sample_results() -> circmap::AssessmentResults {
    let components = vec![Component {
        fr: 0.5,
        ..Component::new("c1", "Casing", 2.0)
    }];
    let params = ProductParams {
        lifetime: 2.0,
        ..ProductParams::default()
    };
    assess(&components, &params).unwrap()
}

#[test]
fn csv_export_uses_two_decimal_columns() {
    let results = sample_results();
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer).write_results(&results).unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let mut lines = text.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,name,mass_kg,cci,cii,lfi,v,w,r_in,r_out,abs_r,c"
    );

    let fields: Vec<&str> = lines.next().unwrap().split(',').collect();
    assert_eq!(fields[0], "c1");
    assert_eq!(fields[1], "Casing");
    assert_eq!(fields[2], "2.00");
    // Every numeric column renders with exactly two decimals.
    for field in &fields[2..] {
        let decimals = field.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 2, "field '{}' is not 2-decimal", field);
    }
}

#[test]
fn csv_export_honours_delimiter_and_decimal_comma() {
    let results = sample_results();
    let config = OutputConfig {
        delimiter: ';',
        decimal_comma: true,
    };
    let mut buffer = Vec::new();
    CsvWriter::with_options(&mut buffer, &config)
        .write_results(&results)
        .unwrap();

    let text = String::from_utf8(buffer).unwrap();
    let data_line = text.lines().nth(1).unwrap();
    assert!(data_line.starts_with("c1;Casing;2,00;"));
    assert!(!data_line.contains('.'));
}
