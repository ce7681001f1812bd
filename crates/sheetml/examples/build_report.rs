//! Example: build a small report and write it as SpreadsheetML

use sheetml::prelude::*;

fn main() -> Result<()> {
    let mut workbook = Workbook::new();
    workbook.add_style(Style::new("Money", "Money").number_format("#,##0.00"))?;

    let sheet = workbook
        .worksheet_mut(0)
        .ok_or_else(|| Error::other("missing default sheet"))?;

    sheet.append_column(Column::new().with_width(140.0));
    sheet.append_column(Column::new().with_width(80.0).with_style("Money"));
    sheet.append_column(Column::new().with_width(200.0));

    // Title first: add_title_row replaces any rows already present
    sheet.add_title_row(["Item", "Price", "Source"]);

    for (item, price, url) in [
        ("Coffee", 3.5, "https://example.com/coffee"),
        ("Bagel", 2.25, "https://example.com/bagel"),
    ] {
        let mut row = Row::from_values([item]);
        row.push_cell(Data::number(price));
        row.push_cell(Cell::hyperlink(url, url));
        sheet.append_row(row);
    }

    let rows = sheet.row_count();
    workbook.save("/tmp/report.xml")?;
    println!("Wrote {} rows to /tmp/report.xml", rows);
    Ok(())
}
