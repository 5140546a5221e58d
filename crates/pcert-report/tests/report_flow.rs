//! End-to-end tests: certificate text in, tables and files out

use chrono::NaiveDate;
use pcert_extractor::{DocumentExtraction, Extractor, ExtractorConfig};
use pcert_report::{
    consolidate, output_file_name, write_report, CsvSink, ReportError, SheetNaming, Table,
    XlsxSink,
};
use std::fs;
use tempfile::TempDir;

fn certificate(project_id: &str, agency: &str, name: &str, details: &[&str]) -> String {
    format!(
        "연구과제 참여확인서\n\
         ■ 과제정보\n\
         과제번호\t{project_id}\t연구기간\t2024-01-01 ~ 2024-12-31\n\
         과 제 명\t{project_id} research\n\
         지원기관\t{agency}\n\
         ■ 연구원정보\n\
         성명: {name}\t주민번호: 800101-1******\n\
         연구원구분\t과정구분\t소속\t참여기간\n\
         {}\n\
         -- 이하 여백 --\n\
         2024년 12월 31일\n",
        details.join("\n")
    )
}

fn extract_all(documents: &[String]) -> DocumentExtraction {
    let extractor = Extractor::new(ExtractorConfig::default()).unwrap();
    let mut all = DocumentExtraction::default();
    for document in documents {
        all.append(extractor.extract_text(document));
    }
    all
}

#[test]
fn test_contiguous_periods_across_documents_merge() {
    let documents = vec![
        certificate("P001", "Agency A", "Kim", &["참여연구원\t석사과정\tLab\t2024-01-01 ~ 2024-01-10"]),
        certificate("P001", "Agency A", "Kim", &["참여연구원\t석사과정\tLab\t2024-01-11 ~ 2024-01-20"]),
    ];
    let extraction = extract_all(&documents);

    let consolidated = consolidate(&extraction.projects, &extraction.researchers).unwrap();

    // Both documents carry the same project row.
    assert_eq!(consolidated.registry.len(), 1);

    let kim = consolidated.person("Kim").unwrap();
    assert_eq!(kim.rows.len(), 2);
    assert_eq!(kim.merged_rows.len(), 1);
    assert_eq!(kim.merged_rows[0].record.participation_period, "2024-01-01 ~ 2024-01-20");
    assert_eq!(kim.merged_rows[0].funding_agency.as_deref(), Some("Agency A"));
}

#[test]
fn test_two_day_gap_stays_split() {
    let documents = vec![certificate(
        "P001",
        "Agency A",
        "Kim",
        &[
            "참여연구원\t석사과정\tLab\t2024-01-01 ~ 2024-01-10",
            "참여연구원\t석사과정\tLab\t2024-01-12 ~ 2024-01-20",
        ],
    )];
    let extraction = extract_all(&documents);

    let consolidated = consolidate(&extraction.projects, &extraction.researchers).unwrap();
    let merged: Vec<&str> = consolidated
        .all_merged_rows()
        .map(|row| row.record.participation_period.as_str())
        .collect();

    assert_eq!(merged, vec!["2024-01-01 ~ 2024-01-10", "2024-01-12 ~ 2024-01-20"]);
}

#[test]
fn test_unparseable_period_is_reported() {
    let documents = vec![certificate("P001", "Agency A", "Kim", &["참여연구원\t석사과정\tLab\t2024.01.01 ~ 2024.01.10"])];
    let extraction = extract_all(&documents);

    let err = consolidate(&extraction.projects, &extraction.researchers).unwrap_err();
    assert!(matches!(err, ReportError::Merge { .. }));
    assert!(err.to_string().contains("Kim"));
}

#[test]
fn test_xlsx_sink_writes_workbook() {
    let documents = vec![
        certificate("P001", "Agency A", "Kim", &["참여연구원\t석사과정\tLab\t2024-01-01 ~ 2024-01-10"]),
        certificate("P002", "Agency B", "Lee", &["연구보조원\t학사과정\tLab\t2024-03-01 ~ 2024-03-31"]),
    ];
    let extraction = extract_all(&documents);
    let consolidated = consolidate(&extraction.projects, &extraction.researchers).unwrap();
    let naming = SheetNaming::default();

    let temp = TempDir::new().unwrap();
    let now = NaiveDate::from_ymd_opt(2025, 1, 2)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();
    let path = temp
        .path()
        .join(output_file_name(&naming.output_prefix, now, "xlsx"));

    let mut sink = XlsxSink::new(&path);
    write_report(&mut sink, &consolidated.tables(&naming)).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
    assert!(path.ends_with("연구과제_참여이력_통합_20250102_0930.xlsx"));
}

#[test]
fn test_xlsx_sink_accepts_names_cut_at_an_apostrophe() {
    let name = format!("{}'", "a".repeat(30));
    let naming = SheetNaming::default();
    let tables = vec![
        Table::new(naming.person_sheet(&name), &["성명"]),
        Table::new(naming.merged_sheet(&name), &["성명"]),
    ];

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("names.xlsx");
    let mut sink = XlsxSink::new(&path);

    write_report(&mut sink, &tables).unwrap();
    assert!(path.is_file());
}

#[test]
fn test_csv_sink_writes_one_file_per_table() {
    let documents = vec![certificate(
        "P001",
        "Agency A",
        "Kim",
        &["참여연구원\t석사과정\tLab\t2024-01-01 ~ 2024-01-10"],
    )];
    let extraction = extract_all(&documents);
    let consolidated = consolidate(&extraction.projects, &extraction.researchers).unwrap();

    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("out");
    let mut sink = CsvSink::new(&dir).with_bom(true);
    write_report(&mut sink, &consolidated.tables(&SheetNaming::default())).unwrap();

    let names: Vec<String> = sink
        .written()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["과제정보.csv", "Kim.csv", "Kim(통합).csv"]);

    let content = fs::read(dir.join("Kim.csv")).unwrap();
    assert!(content.starts_with(b"\xEF\xBB\xBF"));

    let mut reader = csv::Reader::from_reader(&content[3..]);
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[2], "지원기관");

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(&rows[0][2], "Agency A");
    assert_eq!(&rows[0][8], "2024-01-01 ~ 2024-01-10");
}

#[test]
fn test_colliding_names_get_distinct_files() {
    let documents = vec![
        certificate("P001", "Agency A", "Kim/Lee", &["A\tB\tC\t2024-01-01 ~ 2024-01-10"]),
        certificate("P002", "Agency B", "Kim_Lee", &["A\tB\tC\t2024-02-01 ~ 2024-02-10"]),
    ];
    let extraction = extract_all(&documents);
    let consolidated = consolidate(&extraction.projects, &extraction.researchers).unwrap();

    let temp = TempDir::new().unwrap();
    let mut sink = CsvSink::new(temp.path());
    write_report(&mut sink, &consolidated.tables(&SheetNaming::default())).unwrap();

    assert_eq!(sink.written().len(), 5);
    assert!(temp.path().join("Kim_Lee.csv").exists());
    assert!(temp.path().join("Kim_Lee (2).csv").exists());
}

#[test]
fn test_sheet_naming_from_toml() {
    let naming: SheetNaming = toml::from_str(
        r#"
        merged_suffix = "_merged"
        "#,
    )
    .unwrap();

    assert_eq!(naming.merged_sheet("Kim"), "Kim_merged");
    assert_eq!(naming.registry_sheet, "과제정보");
}
