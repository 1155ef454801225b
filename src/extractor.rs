use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::record::ProfileRecord;

// Labels and section headers as they appear on the detail pages.
pub const LABEL_AGE: &str = "Yaşı:";
pub const LABEL_GENDER: &str = "Cinsi:";
pub const LABEL_MARITAL: &str = "Ailə vəziyyəti:";
pub const LABEL_CATEGORY: &str = "Kateqoriya:";
pub const LABEL_POSITION: &str = "Vəzifə:";
pub const LABEL_MIN_SALARY: &str = "Minimum əmək haqqı";
pub const SECTION_EDUCATION: &str = "Təhsil";
pub const SECTION_EXPERIENCE: &str = "İş Təcrübəsi";
pub const SECTION_SKILLS: &str = "Bilik və bacarıqlar";

pub struct DetailExtractor {
    bold: Selector,
    heading: Selector,
    contact_cell: Selector,
    city_re: Regex,
    phone_re: Regex,
    email_re: Regex,
}

impl DetailExtractor {
    pub fn new() -> Self {
        DetailExtractor {
            bold: Selector::parse("b").unwrap(),
            heading: Selector::parse("h2").unwrap(),
            contact_cell: Selector::parse(r#"td[align="right"]"#).unwrap(),
            city_re: Regex::new(r"Şəhər:\s*(.+)").unwrap(),
            phone_re: Regex::new(r"Tel\.:\s*(.+)").unwrap(),
            email_re: Regex::new(r"E-mail:\s*(.+)").unwrap(),
        }
    }

    // Every sub-extraction maps absence to an empty string, so the returned
    // record always carries the requested id no matter what the document
    // looks like.
    pub fn extract(&self, document: &Html, id: &str, url: &str) -> ProfileRecord {
        let mut record = ProfileRecord::with_id(id, url);

        if let Some(cell) = document.select(&self.contact_cell).next() {
            let text: String = cell.text().collect();
            record.city = first_capture(&self.city_re, &text);
            record.phone = first_capture(&self.phone_re, &text);
            record.email = first_capture(&self.email_re, &text);
        }

        if let Some(heading) = document.select(&self.heading).next() {
            let text: String = heading.text().collect();
            record.name = text.replace('—', "").trim().to_string();
        }

        record.age = first_token(&self.text_by_label(document, LABEL_AGE));
        record.gender = first_token(&self.text_by_label(document, LABEL_GENDER));
        record.marital_status = first_token(&self.text_by_label(document, LABEL_MARITAL));

        record.category = self.text_by_label(document, LABEL_CATEGORY);
        record.position = self.text_by_label(document, LABEL_POSITION);
        record.min_salary = self.text_by_label(document, LABEL_MIN_SALARY);

        record.education = self.section_content(document, SECTION_EDUCATION);
        record.experience = self.section_content(document, SECTION_EXPERIENCE);
        record.skills = self.section_content(document, SECTION_SKILLS);

        record
    }

    // Finds the first <b> whose text contains the label and returns the
    // enclosing block's text after the label, whitespace-normalized.
    pub fn text_by_label(&self, document: &Html, label: &str) -> String {
        for bold in document.select(&self.bold) {
            let bold_text: String = bold.text().collect();
            if !bold_text.contains(label) {
                continue;
            }
            let parent = match bold.parent().and_then(ElementRef::wrap) {
                Some(p) => p,
                None => continue,
            };
            let parent_text: String = parent.text().collect();
            if let Some((_, after)) = parent_text.split_once(label) {
                return normalize_ws(after);
            }
        }
        String::new()
    }

    // Finds the first <h2> containing the header (case-insensitive), walks up
    // to the enclosing table cell and returns the cell text with every line
    // up to and including the header line stripped. If the header text
    // recurs in the body the strip point is still the first occurrence.
    pub fn section_content(&self, document: &Html, header: &str) -> String {
        let needle = header.to_lowercase();
        for heading in document.select(&self.heading) {
            let heading_text: String = heading.text().collect();
            if !heading_text.to_lowercase().contains(&needle) {
                continue;
            }
            let cell = heading
                .ancestors()
                .filter_map(ElementRef::wrap)
                .find(|el| el.value().name() == "td");
            let cell = match cell {
                Some(c) => c,
                None => continue,
            };
            let cell_text: String = cell.text().collect();
            let lines: Vec<&str> = cell_text.lines().collect();
            return match lines.iter().position(|l| l.to_lowercase().contains(&needle)) {
                Some(idx) => normalize_ws(&lines[idx + 1..].join("\n")),
                None => normalize_ws(&cell_text),
            };
        }
        String::new()
    }
}

impl Default for DetailExtractor {
    fn default() -> Self {
        DetailExtractor::new()
    }
}

fn first_capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

// First whitespace-delimited token; safe on empty input.
fn first_token(text: &str) -> String {
    text.split_whitespace().next().unwrap_or("").to_string()
}

fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
