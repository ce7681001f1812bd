//! End-to-end tests: build a workbook, write it, parse the output back with quick-xml

use chrono::NaiveDate;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use sheetml_core::{Cell, Column, Data, Row, Style, Workbook};
use sheetml_xml::{SpreadsheetMlWriter, XmlResult};

/// What a parsed cell looks like: (ss:Type, decoded text, ss:StyleID, ss:HRef)
type ParsedCell = (String, String, Option<String>, Option<String>);

#[derive(Debug, Default)]
struct ParsedSheet {
    name: String,
    columns: usize,
    rows: Vec<(Option<String>, Vec<ParsedCell>)>,
}

fn attr(e: &quick_xml::events::BytesStart<'_>, name: &str) -> Option<String> {
    e.try_get_attribute(name)
        .unwrap()
        .map(|a| a.unescape_value().unwrap().into_owned())
}

/// Parse an emitted document; panics if it is not well-formed
fn parse(xml: &str) -> (Vec<String>, Vec<ParsedSheet>) {
    let mut reader = Reader::from_str(xml);
    let mut styles = Vec::new();
    let mut sheets: Vec<ParsedSheet> = Vec::new();
    let mut in_data = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"Style" => styles.push(attr(&e, "ss:ID").unwrap()),
                b"Worksheet" => sheets.push(ParsedSheet {
                    name: attr(&e, "ss:Name").unwrap(),
                    ..Default::default()
                }),
                b"Row" => sheets
                    .last_mut()
                    .unwrap()
                    .rows
                    .push((attr(&e, "ss:StyleID"), Vec::new())),
                b"Cell" => {
                    let row = sheets.last_mut().unwrap().rows.last_mut().unwrap();
                    row.1.push((
                        String::new(),
                        String::new(),
                        attr(&e, "ss:StyleID"),
                        attr(&e, "ss:HRef"),
                    ));
                }
                b"Data" => {
                    let cell = sheets
                        .last_mut()
                        .unwrap()
                        .rows
                        .last_mut()
                        .unwrap()
                        .1
                        .last_mut()
                        .unwrap();
                    cell.0 = attr(&e, "ss:Type").unwrap();
                    in_data = true;
                }
                _ => {}
            },
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"Column" {
                    sheets.last_mut().unwrap().columns += 1;
                }
            }
            Ok(Event::Text(t)) if in_data => {
                let cell = sheets
                    .last_mut()
                    .unwrap()
                    .rows
                    .last_mut()
                    .unwrap()
                    .1
                    .last_mut()
                    .unwrap();
                cell.1.push_str(&t.unescape().unwrap());
            }
            Ok(Event::End(e)) => {
                if e.name().as_ref() == b"Data" {
                    in_data = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("malformed output at {}: {e}", reader.buffer_position()),
            _ => {}
        }
    }

    (styles, sheets)
}

#[test]
fn test_populated_row_end_to_end() -> XmlResult<()> {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0)
        .unwrap()
        .append_row(Row::from_values(["x", "y", "z"]));

    let xml = SpreadsheetMlWriter::to_string(&wb)?;
    let (styles, sheets) = parse(&xml);

    assert_eq!(styles, ["Default", "Title", "Hyperlink"]);
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].name, "Sheet1");
    assert_eq!(sheets[0].rows.len(), 1);

    let (row_style, cells) = &sheets[0].rows[0];
    assert_eq!(row_style, &None);
    let texts: Vec<_> = cells.iter().map(|c| (c.0.as_str(), c.1.as_str())).collect();
    assert_eq!(
        texts,
        [("String", "x"), ("String", "y"), ("String", "z")]
    );

    assert_eq!(xml.matches("<Row>").count(), 1);
    assert_eq!(xml.matches("<Cell>").count(), 3);
    Ok(())
}

#[test]
fn test_report_with_styles_links_and_types() -> XmlResult<()> {
    let mut wb = Workbook::new();
    wb.add_style(Style::new("Money", "Money").number_format("#,##0.00"))?;
    wb.add_worksheet_with_name("Q1 & Q2")?;

    let sheet = wb.worksheet_by_name_mut("Q1 & Q2").unwrap();
    sheet.append_column(Column::new().with_width(120.0));
    sheet.append_column(Column::new().with_width(60.0).with_style("Money"));
    sheet.add_title_row(["Item", "Amount", "Paid", "Due", "Link"]);

    let due = NaiveDate::from_ymd_opt(2024, 1, 31)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();
    let mut row = Row::new();
    row.push_cell("Widgets <large>");
    row.push_cell(Cell::from_data(Data::number(1234.5)).with_style("Money"));
    row.push_cell(Data::boolean(true));
    row.push_cell(Data::date_time(due));
    row.push_cell(Cell::hyperlink("docs", "https://example.com/a?b=1&c='2'"));
    sheet.append_row(row);

    wb.set_active_sheet(1)?;

    let xml = SpreadsheetMlWriter::to_string(&wb)?;
    assert!(xml.contains("<ActiveSheet>1</ActiveSheet>"));

    let (styles, sheets) = parse(&xml);
    assert_eq!(styles, ["Default", "Title", "Hyperlink", "Money"]);
    assert_eq!(sheets.len(), 2);

    let q = &sheets[1];
    assert_eq!(q.name, "Q1 & Q2");
    assert_eq!(q.columns, 2);
    assert_eq!(q.rows.len(), 2);
    assert_eq!(q.rows[0].0.as_deref(), Some("Title"));

    let data = &q.rows[1].1;
    assert_eq!(data[0].0, "String");
    assert_eq!(data[0].1, "Widgets <large>");
    assert_eq!(data[1].0, "Number");
    assert_eq!(data[1].1, "1234.5");
    assert_eq!(data[1].2.as_deref(), Some("Money"));
    assert_eq!((data[2].0.as_str(), data[2].1.as_str()), ("Boolean", "1"));
    assert_eq!(
        (data[3].0.as_str(), data[3].1.as_str()),
        ("DateTime", "2024-01-31T00:00:00.000")
    );
    assert_eq!(data[4].2.as_deref(), Some("Hyperlink"));
    assert_eq!(data[4].3.as_deref(), Some("https://example.com/a?b=1&c='2'"));
    Ok(())
}

#[test]
fn test_empty_string_cell() -> XmlResult<()> {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0)
        .unwrap()
        .append_row(Row::from_values(["", "&<>\"'"]));

    let xml = SpreadsheetMlWriter::to_string(&wb)?;
    assert!(xml.contains(r#"<Data ss:Type="String"></Data>"#));

    let (_, sheets) = parse(&xml);
    let cells = &sheets[0].rows[0].1;
    assert_eq!(cells[0].1, "");
    assert_eq!(cells[1].1, "&<>\"'");
    Ok(())
}

#[test]
fn test_write_file() -> XmlResult<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("book.xml");

    let mut wb = Workbook::new();
    wb.worksheet_mut(0)
        .unwrap()
        .add_title_row(["Only"]);
    SpreadsheetMlWriter::write_file(&wb, &path)?;

    let written = std::fs::read_to_string(&path)?;
    assert_eq!(written, SpreadsheetMlWriter::to_string(&wb)?);
    Ok(())
}

#[test]
fn test_write_to_buffer() -> XmlResult<()> {
    let wb = Workbook::new();
    let mut buf = Vec::new();
    SpreadsheetMlWriter::write(&wb, &mut buf)?;

    assert_eq!(String::from_utf8(buf).unwrap(), SpreadsheetMlWriter::to_string(&wb)?);
    Ok(())
}

#[test]
fn test_concurrent_emission_matches() {
    let mut wb = Workbook::new();
    wb.worksheet_mut(0)
        .unwrap()
        .append_row(Row::from_values(["shared"]));
    let expected = SpreadsheetMlWriter::to_string(&wb).unwrap();

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| SpreadsheetMlWriter::to_string(&wb).unwrap()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
}
