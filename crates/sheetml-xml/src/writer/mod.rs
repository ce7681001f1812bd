//! SpreadsheetML writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::XmlResult;
use crate::escape::push_escaped;
use crate::options::XmlWriteOptions;
use sheetml_core::{Cell, Column, Error, Row, Style, StyleId, Workbook, Worksheet};

const HEADER: &str = r#"<?xml version="1.0"?>
<?mso-application progid="Excel.Sheet"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:x="urn:schemas-microsoft-com:office:excel"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:html="http://www.w3.org/TR/REC-html40">
"#;

/// SpreadsheetML file writer
///
/// Serialization is a single read-only walk over the workbook: styles in
/// registration order, then every worksheet's columns and rows.
pub struct SpreadsheetMlWriter;

impl SpreadsheetMlWriter {
    /// Serialize a workbook with default options
    pub fn to_string(workbook: &Workbook) -> XmlResult<String> {
        Self::to_string_with_options(workbook, &XmlWriteOptions::default())
    }

    /// Serialize a workbook
    pub fn to_string_with_options(
        workbook: &Workbook,
        options: &XmlWriteOptions,
    ) -> XmlResult<String> {
        if options.validate {
            workbook.validate()?;
        }
        if workbook.is_empty() {
            if !options.allow_empty_workbook {
                return Err(Error::EmptyWorkbook.into());
            }
            log::warn!("Writing SpreadsheetML for a workbook with no worksheets");
        }

        log::debug!(
            "Writing SpreadsheetML: {} styles, {} sheets",
            workbook.styles().len(),
            workbook.sheet_count()
        );

        let mut content = String::with_capacity(4096);
        content.push_str(HEADER);
        content.push_str(&format!(
            r#"  <ExcelWorkbook xmlns="urn:schemas-microsoft-com:office:excel">
    <ActiveSheet>{}</ActiveSheet>
  </ExcelWorkbook>
"#,
            workbook.active_sheet()
        ));

        content.push_str("  <Styles>\n");
        for style in workbook.styles() {
            Self::write_style(&mut content, style);
        }
        content.push_str("  </Styles>\n");

        for sheet in workbook.worksheets() {
            Self::write_worksheet(&mut content, sheet);
        }

        content.push_str("</Workbook>\n");
        Ok(content)
    }

    /// Write a workbook to a writer
    pub fn write<W: Write>(workbook: &Workbook, mut writer: W) -> XmlResult<()> {
        let content = Self::to_string(workbook)?;
        writer.write_all(content.as_bytes())?;
        writer.flush()?;
        Ok(())
    }

    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XmlResult<()> {
        // Nothing is created on disk unless serialization succeeds
        let content = Self::to_string(workbook)?;
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn write_style(content: &mut String, style: &Style) {
        let options = style.options();

        content.push_str("    <Style ss:ID=\"");
        push_escaped(content, style.id().as_str());
        content.push_str("\" ss:Name=\"");
        push_escaped(content, style.name());
        content.push_str("\">\n      <Alignment ss:Vertical=\"Bottom\"/>\n      <Borders/>\n");

        content.push_str("      <Font ss:FontName=\"");
        push_escaped(content, &options.font_name);
        content.push_str("\" x:Family=\"");
        push_escaped(content, &options.font_family);
        content.push_str(&format!("\" ss:Size=\"{}\" ss:Color=\"", options.font_size));
        push_escaped(content, &options.font_color);
        content.push('"');
        if options.bold {
            content.push_str(" ss:Bold=\"1\"");
        }
        if let Some(underline) = options.underline {
            content.push_str(&format!(" ss:Underline=\"{}\"", underline.as_str()));
        }
        content.push_str("/>\n");

        content.push_str("      <Interior");
        if let Some(color) = &options.background_color {
            content.push_str(" ss:Color=\"");
            push_escaped(content, color);
            content.push_str("\" ss:Pattern=\"Solid\"");
        }
        content.push_str("/>\n");

        content.push_str("      <NumberFormat");
        if let Some(format) = &options.number_format {
            content.push_str(" ss:Format=\"");
            push_escaped(content, format);
            content.push('"');
        }
        content.push_str("/>\n      <Protection/>\n    </Style>\n");
    }

    fn write_worksheet(content: &mut String, sheet: &Worksheet) {
        content.push_str("  <Worksheet ss:Name=\"");
        push_escaped(content, sheet.name());
        content.push_str("\">\n    <Table>\n");

        for column in sheet.columns() {
            Self::write_column(content, column);
        }
        for row in sheet.rows() {
            Self::write_row(content, row);
        }

        content.push_str("    </Table>\n  </Worksheet>\n");
    }

    fn write_column(content: &mut String, column: &Column) {
        content.push_str("      <Column ss:AutoFitWidth=\"0\"");
        if let Some(width) = column.width() {
            content.push_str(&format!(" ss:Width=\"{}\"", width));
        }
        Self::write_style_id(content, column.style());
        content.push_str("/>\n");
    }

    fn write_row(content: &mut String, row: &Row) {
        content.push_str("      <Row");
        Self::write_style_id(content, row.style());
        content.push_str(">\n");

        for cell in row.cells() {
            Self::write_cell(content, cell);
        }

        content.push_str("      </Row>\n");
    }

    fn write_cell(content: &mut String, cell: &Cell) {
        content.push_str("        <Cell");
        Self::write_style_id(content, cell.style());
        if let Some(href) = cell.href() {
            content.push_str(" ss:HRef=\"");
            push_escaped(content, href);
            content.push('"');
        }
        content.push_str(">\n");

        let data = cell.data();
        content.push_str(&format!(
            "          <Data ss:Type=\"{}\">",
            data.data_type().as_str()
        ));
        push_escaped(content, data.content());
        content.push_str("</Data>\n        </Cell>\n");
    }

    /// ` ss:StyleID="…"` for anything but the default style
    fn write_style_id(content: &mut String, style: Option<&StyleId>) {
        if let Some(style) = style.filter(|s| !s.is_default()) {
            content.push_str(" ss:StyleID=\"");
            push_escaped(content, style.as_str());
            content.push('"');
        }
    }
}
