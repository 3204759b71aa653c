//! Unit tests for the document-template catalog and rendering.

use std::collections::BTreeMap;

use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use rstest::rstest;

use crate::document::{
    DepartmentCode, FieldKind, TemplateAvailability, export_submission, render_submission,
    template_for,
};

#[rstest]
#[case("01", DepartmentCode::BusinessDevelopment)]
#[case("02", DepartmentCode::Operations)]
#[case("03", DepartmentCode::Finance)]
#[case("04", DepartmentCode::Production)]
#[case("05", DepartmentCode::Inventory)]
#[case("06", DepartmentCode::QualityControl)]
#[case("07", DepartmentCode::Warehousing)]
#[case("08", DepartmentCode::FieldActivity)]
fn department_codes_round_trip(#[case] code: &str, #[case] expected: DepartmentCode) {
    let department = DepartmentCode::from_code(code).expect("known code should resolve");

    assert_eq!(department, expected);
    assert_eq!(department.code(), code);
}

#[rstest]
#[case("09")]
#[case("00")]
#[case("finance")]
#[case("")]
fn unknown_department_codes_do_not_resolve(#[case] code: &str) {
    assert!(DepartmentCode::from_code(code).is_none());
}

#[rstest]
#[case(DepartmentCode::BusinessDevelopment, 4)]
#[case(DepartmentCode::Operations, 2)]
#[case(DepartmentCode::Finance, 3)]
#[case(DepartmentCode::Production, 4)]
#[case(DepartmentCode::Inventory, 3)]
#[case(DepartmentCode::QualityControl, 5)]
#[case(DepartmentCode::Warehousing, 1)]
#[case(DepartmentCode::FieldActivity, 2)]
fn each_department_lists_its_document_types(
    #[case] department: DepartmentCode,
    #[case] expected: usize,
) {
    assert_eq!(department.document_types().len(), expected);
}

#[rstest]
fn finance_invoice_template_is_available_in_field_order() {
    let TemplateAvailability::Available(template) = template_for("03", "Invoice") else {
        panic!("invoice template should be available");
    };

    let labels: Vec<_> = template
        .fields
        .iter()
        .map(|descriptor| descriptor.label)
        .collect();
    assert_eq!(
        labels,
        vec![
            "Invoice Number",
            "Client Name",
            "Invoice Date",
            "Due Date",
            "Line Items",
            "Subtotal",
            "Tax",
            "Total Amount",
        ]
    );
}

#[rstest]
fn invoice_dates_use_date_inputs() {
    let TemplateAvailability::Available(template) = template_for("03", "Invoice") else {
        panic!("invoice template should be available");
    };

    for descriptor in template.fields {
        let expected = matches!(descriptor.label, "Invoice Date" | "Due Date");
        assert_eq!(descriptor.kind == FieldKind::Date, expected);
    }
}

#[rstest]
#[case("09", "Invoice")]
#[case("03", "Warranty Card")]
#[case("03", "")]
fn missing_combinations_resolve_to_not_available(
    #[case] department: &str,
    #[case] document_type: &str,
) {
    assert_eq!(
        template_for(department, document_type),
        TemplateAvailability::NotAvailable
    );
}

#[rstest]
fn submission_renders_label_value_lines_in_template_order() {
    let TemplateAvailability::Available(template) = template_for("03", "Contract") else {
        panic!("contract template should be available");
    };
    let mut values = BTreeMap::new();
    values.insert("Contract Number".to_owned(), "C-100".to_owned());
    values.insert("Party A".to_owned(), "Acme Ltd".to_owned());
    values.insert("Party B".to_owned(), "Example Co".to_owned());
    values.insert("Effective Date".to_owned(), "2025-06-01".to_owned());
    values.insert("Terms and Conditions".to_owned(), "Net 30".to_owned());
    values.insert("Contract Value".to_owned(), "10000".to_owned());

    let rendered = render_submission(&template, &values);

    assert_eq!(
        rendered,
        "Contract Number: C-100\n\
         Party A: Acme Ltd\n\
         Party B: Example Co\n\
         Effective Date: 2025-06-01\n\
         Terms and Conditions: Net 30\n\
         Contract Value: 10000"
    );
}

#[rstest]
fn missing_values_render_empty_and_extras_are_ignored() {
    let TemplateAvailability::Available(template) = template_for("05", "Suppliers List") else {
        panic!("suppliers template should be available");
    };
    let mut values = BTreeMap::new();
    values.insert("Suppliers".to_owned(), "Acme Ltd".to_owned());
    values.insert("Unrelated".to_owned(), "ignored".to_owned());

    let rendered = render_submission(&template, &values);

    assert_eq!(rendered, "Suppliers: Acme Ltd\nLast Updated: ");
}

#[rstest]
fn export_writes_document_type_named_file() {
    let workdir = tempfile::tempdir().expect("temp dir should be created");
    let path = workdir.path().to_str().expect("temp path should be UTF-8");
    let dir = Dir::open_ambient_dir(path, ambient_authority()).expect("dir should open");

    export_submission(&dir, "Invoice", "Invoice Number: I-1").expect("export should succeed");

    let contents = dir
        .read_to_string("Invoice.txt")
        .expect("exported file should exist");
    assert_eq!(contents, "Invoice Number: I-1");
}

#[rstest]
fn export_overwrites_existing_file() {
    let workdir = tempfile::tempdir().expect("temp dir should be created");
    let path = workdir.path().to_str().expect("temp path should be UTF-8");
    let dir = Dir::open_ambient_dir(path, ambient_authority()).expect("dir should open");

    export_submission(&dir, "Invoice", "first").expect("export should succeed");
    export_submission(&dir, "Invoice", "second").expect("export should succeed");

    let contents = dir
        .read_to_string("Invoice.txt")
        .expect("exported file should exist");
    assert_eq!(contents, "second");
}
