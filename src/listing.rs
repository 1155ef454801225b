use std::collections::HashSet;

use regex::Regex;
use scraper::{Html, Selector};

pub struct ListingExtractor {
    anchor: Selector,
    id_re: Regex,
}

impl ListingExtractor {
    pub fn new() -> Self {
        ListingExtractor {
            anchor: Selector::parse("a[href]").unwrap(),
            id_re: Regex::new(r"cv\.php\?id=(\d+)").unwrap(),
        }
    }

    // Collects the set of CV ids linked from a single listing document.
    // Duplicate anchors collapse; order is irrelevant.
    pub fn extract_ids(&self, document: &Html) -> HashSet<String> {
        document
            .select(&self.anchor)
            .filter_map(|a| a.value().attr("href"))
            .filter_map(|href| self.id_re.captures(href))
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

impl Default for ListingExtractor {
    fn default() -> Self {
        ListingExtractor::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_anchors_collapse() {
        let html = Html::parse_document(
            r#"<html><body>
            <a href="cv.php?id=5">Profile</a>
            <a href="cv.php?id=5">Profile again</a>
            </body></html>"#,
        );
        let ids = ListingExtractor::new().extract_ids(&html);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("5"));
    }

    #[test]
    fn ignores_unrelated_links() {
        let html = Html::parse_document(
            r#"<html><body>
            <a href="cv.php?id=12">A</a>
            <a href="index.php?id=99">B</a>
            <a href="cv.php">C</a>
            <a name="no-href">D</a>
            </body></html>"#,
        );
        let ids = ListingExtractor::new().extract_ids(&html);
        assert_eq!(ids.len(), 1);
        assert!(ids.contains("12"));
    }

    #[test]
    fn id_is_extracted_from_longer_query_strings() {
        let html = Html::parse_document(r#"<a href="/cv.php?id=1234&lang=az">X</a>"#);
        let ids = ListingExtractor::new().extract_ids(&html);
        assert!(ids.contains("1234"));
    }

    #[test]
    fn empty_document_yields_empty_set() {
        let html = Html::parse_document("<html><body></body></html>");
        assert!(ListingExtractor::new().extract_ids(&html).is_empty());
    }
}
