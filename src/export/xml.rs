use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{ensure_parent_dir, log_outcome};
use crate::data_models::ProfileRecord;
use crate::error::ExportError;

pub(crate) type XmlWriter = Writer<BufWriter<File>>;

pub(crate) fn create_xml_writer(path: &Path) -> Result<XmlWriter, ExportError> {
    let mut writer = Writer::new_with_indent(BufWriter::new(File::create(path)?), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    Ok(writer)
}

pub(crate) fn finish_xml_writer(writer: XmlWriter) -> Result<(), ExportError> {
    let mut out = writer.into_inner();
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}

pub(crate) fn start(writer: &mut XmlWriter, tag: BytesStart<'_>) -> Result<(), ExportError> {
    writer.write_event(Event::Start(tag))?;
    Ok(())
}

pub(crate) fn end(writer: &mut XmlWriter, name: &str) -> Result<(), ExportError> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// `<name>text</name>`, or `<name/>` when there is no text.
pub(crate) fn text_element(
    writer: &mut XmlWriter,
    name: &str,
    text: Option<&str>,
) -> Result<(), ExportError> {
    match text.filter(|t| !t.is_empty()) {
        Some(text) => {
            start(writer, BytesStart::new(name))?;
            writer.write_event(Event::Text(BytesText::new(text)))?;
            end(writer, name)
        }
        None => {
            writer.write_event(Event::Empty(BytesStart::new(name)))?;
            Ok(())
        }
    }
}

/// `<companies>` with one `<company>` per record and one child per field.
pub fn write_xml(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;
    log_outcome("XML", path, records.len(), render(records, path))
}

fn render(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    let mut writer = create_xml_writer(path)?;

    start(&mut writer, BytesStart::new("companies"))?;
    for record in records {
        start(&mut writer, BytesStart::new("company"))?;
        for (key, value) in record.fields() {
            text_element(&mut writer, key, value)?;
        }
        end(&mut writer, "company")?;
    }
    end(&mut writer, "companies")?;

    finish_xml_writer(writer)
}
