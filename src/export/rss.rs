use std::path::Path;

use quick_xml::events::BytesStart;

use super::xml::{create_xml_writer, end, finish_xml_writer, start, text_element};
use super::{ensure_parent_dir, log_outcome};
use crate::data_models::ProfileRecord;
use crate::error::ExportError;

pub const FEED_TITLE: &str = "LinkedIn Company URL Results";
pub const FEED_LINK: &str = "https://example.com/linkedin-company-url-feed";
pub const FEED_DESCRIPTION: &str =
    "Feed containing LinkedIn company profile URLs discovered by the scraper.";
pub const UNKNOWN_COMPANY: &str = "Unknown Company";
pub const LINKEDIN_ROOT: &str = "https://www.linkedin.com/";

pub fn item_description(record: &ProfileRecord) -> String {
    format!(
        "Status: {}. Query: {}",
        record.info_status(),
        record.search_query()
    )
}

/// RSS 2.0 feed with one `<item>` per company.
pub fn write_rss(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    ensure_parent_dir(path)?;
    log_outcome("RSS", path, records.len(), render(records, path))
}

fn render(records: &[ProfileRecord], path: &Path) -> Result<(), ExportError> {
    let mut writer = create_xml_writer(path)?;

    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", "2.0"));
    start(&mut writer, rss)?;
    start(&mut writer, BytesStart::new("channel"))?;
    text_element(&mut writer, "title", Some(FEED_TITLE))?;
    text_element(&mut writer, "link", Some(FEED_LINK))?;
    text_element(&mut writer, "description", Some(FEED_DESCRIPTION))?;

    for record in records {
        let title = Some(record.company_name())
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_COMPANY);
        let link = record
            .linkedin_url()
            .filter(|url| !url.is_empty())
            .unwrap_or(LINKEDIN_ROOT);

        start(&mut writer, BytesStart::new("item"))?;
        text_element(&mut writer, "title", Some(title))?;
        text_element(&mut writer, "link", Some(link))?;
        text_element(&mut writer, "description", Some(item_description(record).as_str()))?;
        end(&mut writer, "item")?;
    }

    end(&mut writer, "channel")?;
    end(&mut writer, "rss")?;
    finish_xml_writer(writer)
}
