use std::io::Write as _;

use operations_report::{
    config::{InvalidRecordPolicy, ReportConfig},
    entities::Operation,
    util::{
        format_operation, last_n_operations, print_last_n_operations, read_operations,
        read_operations_from_str, OperationsReportUtil,
    },
};

const OPERATIONS_JSON: &str = r#"[
  {
    "id": 441945886,
    "state": "EXECUTED",
    "date": "2019-08-26T10:50:58.294041",
    "operationAmount": {"amount": "31957.58", "currency": {"name": "руб.", "code": "RUB"}},
    "description": "Перевод организации",
    "from": "Maestro 1596837868705199",
    "to": "Счет 64686473678894779589"
  },
  {
    "id": 41428829,
    "state": "EXECUTED",
    "date": "2019-07-03T18:35:29.512364",
    "operationAmount": {"amount": 8221.37, "currency": {"name": "USD", "code": "USD"}},
    "description": "Перевод организации",
    "from": "MasterCard 7158300734726758",
    "to": "Счет 35383033474447895560"
  },
  {
    "id": 939719570,
    "state": "CANCELED",
    "date": "2019-12-08T22:46:21.935582",
    "operationAmount": {"amount": "9824.07", "currency": {"name": "USD", "code": "USD"}},
    "description": "Перевод организации",
    "from": "Счет 75106830613657916952",
    "to": "Счет 11776614605963066702"
  },
  {}
]"#;

fn write_fixture(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create fixture");
    file.write_all(contents.as_bytes()).expect("write fixture");
    file
}

fn ids(ops: &[&Operation]) -> Vec<u64> {
    ops.iter().filter_map(|op| op.id).collect()
}

#[test]
fn read_then_select_newest_executed() {
    let file = write_fixture(OPERATIONS_JSON);
    let operations = read_operations(file.path()).expect("read operations");
    assert_eq!(operations.len(), 4);

    let five = last_n_operations(&operations, 5, "EXECUTED").expect("select");
    assert_eq!(ids(&five), vec![441945886, 41428829]);

    let one = last_n_operations(&operations, 1, "EXECUTED").expect("select");
    assert_eq!(ids(&one), vec![441945886]);

    assert!(last_n_operations(&operations, 5, "PENDING")
        .expect("select")
        .is_empty());
}

#[test]
fn format_numeric_amount() {
    let file = write_fixture(OPERATIONS_JSON);
    let operations = read_operations(file.path()).expect("read operations");
    assert_eq!(
        format_operation(&operations[1]).expect("format"),
        "03.07.2019 Перевод организации:\n\
         MasterCard 7158 30** **** 6758 -> Счет **5560\n\
         8221.37 USD"
    );
}

#[test]
fn read_errors() {
    assert!(read_operations("/nonexistent/operations.json").is_err());
    let file = write_fixture("not json");
    assert!(read_operations(file.path()).is_err());
}

#[test]
fn util_renders_configured_report() {
    let file = write_fixture(OPERATIONS_JSON);
    let util = OperationsReportUtil::new(
        ReportConfig::default()
            .with_operations_path(file.path())
            .with_count(5),
    );
    let operations = util.load().expect("load");
    let report = util.render(&operations).expect("render");
    assert_eq!(
        report,
        "26.08.2019 Перевод организации:\n\
         Maestro 1596 83** **** 5199 -> Счет **9589\n\
         31957.58 руб.\n\
         \n\
         03.07.2019 Перевод организации:\n\
         MasterCard 7158 30** **** 6758 -> Счет **5560\n\
         8221.37 USD\n\
         \n"
    );
}

#[test]
fn util_with_canceled_state_and_ron_config() {
    let file = write_fixture(OPERATIONS_JSON);
    let config = ReportConfig::from_ron(&format!(
        "(operations_path: {:?}, count: 3, state: \"CANCELED\")",
        file.path().display().to_string()
    ))
    .expect("parse config");
    let util = OperationsReportUtil::new(config);
    let operations = util.load().expect("load");

    let mut out = Vec::new();
    let written = util.report_to(&operations, &mut out).expect("report");
    assert_eq!(written, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "08.12.2019 Перевод организации:\n\
         Счет **6952 -> Счет **6702\n\
         9824.07 USD\n\
         \n"
    );
}

#[test]
fn skip_policy_reports_remaining_operations() {
    let json = r#"[
      {"id": 1, "state": "EXECUTED", "date": "2020-01-01T00:00:00.000001",
       "description": "Открытие вклада", "to": "Счет 41421565395219882431"},
      {"id": 2, "state": "EXECUTED", "date": "2019-01-01T00:00:00.000001",
       "operationAmount": {"amount": "1234.5", "currency": {"name": "USD"}},
       "description": "Открытие вклада", "to": "12345"}
    ]"#;
    let _ = env_logger::builder().is_test(true).try_init();
    let abort = OperationsReportUtil::default();
    let operations = abort.load_from_string(json).expect("load");
    assert_eq!(read_operations_from_str(json).expect("load"), operations);
    assert!(abort.render(&operations).is_err());

    let skip = OperationsReportUtil::new(
        ReportConfig::default().with_invalid_record_policy(InvalidRecordPolicy::Skip),
    );
    assert_eq!(
        skip.render(&operations).expect("render"),
        "01.01.2019 Открытие вклада:\nNone -> 12345\n1234.50 USD\n\n"
    );
}

#[test]
fn print_to_stdout() {
    let file = write_fixture(OPERATIONS_JSON);
    let operations = read_operations(file.path()).expect("read operations");
    print_last_n_operations(&operations, 5, "EXECUTED").expect("print");
    print_last_n_operations(&operations, 5, "PENDING").expect("print nothing");
}

#[test]
fn wrong_typed_fields_only_fail_the_record_that_needs_them() {
    let json = r#"[
      {"id": 1, "state": "EXECUTED", "date": "2019-08-26T10:50:58.294041",
       "operationAmount": {"amount": "31957.58", "currency": {"name": "руб.", "code": "RUB"}},
       "description": "Перевод организации", "to": "Счет 64686473678894779589"},
      {"id": 2, "state": "CANCELED", "date": 20190101, "description": 7}
    ]"#;
    let operations = read_operations_from_str(json).expect("load");
    assert_eq!(operations.len(), 2);

    let util = OperationsReportUtil::default();
    assert_eq!(
        util.render(&operations).expect("render"),
        "26.08.2019 Перевод организации:\nNone -> Счет **9589\n31957.58 руб.\n\n"
    );

    // Selecting the record with the numeric date is what fails.
    assert!(last_n_operations(&operations, 5, "CANCELED").is_err());
}
