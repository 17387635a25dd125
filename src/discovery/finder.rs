use grep::regex::RegexMatcher;
use grep::searcher::Searcher;
use grep::searcher::sinks::UTF8;
use once_cell::sync::Lazy;

use crate::core::constants::scan;
use crate::core::types::UrlOccurrence;

use std::{io, path::Path};

// Candidate lines start with the prefix after optional leading whitespace.
// The sink re-checks against the trimmed line so the prefix match is exact.
const URL_LINE_PATTERN: &str = r"^[ \t]*url:";

static LINE_MATCHER: Lazy<RegexMatcher> = Lazy::new(|| {
    RegexMatcher::new(URL_LINE_PATTERN).expect("Failed to compile url line pattern")
});

pub trait UrlLineFinder {
    fn find_url_lines(&self, paths: Vec<&Path>) -> io::Result<Vec<UrlOccurrence>>;
}

#[derive(Default, Debug)]
pub struct Finder {}

impl UrlLineFinder for Finder {
    /// Extract every `url:` front-matter line from the given files.
    ///
    /// Files are read sequentially in the given order. Any unreadable file
    /// aborts the scan; a partially scanned directory is never reported.
    fn find_url_lines(&self, paths: Vec<&Path>) -> io::Result<Vec<UrlOccurrence>> {
        let mut result = Vec::new();

        for path in paths {
            let occurrences = Self::scan_file(path)?;
            result.extend(occurrences);
        }

        Ok(result)
    }
}

impl Finder {
    /// Scan a single file for lines whose trimmed text starts with `url:`.
    ///
    /// The trimmed whole line (prefix included) becomes the occurrence value.
    /// The value is not normalized in any way: comparison downstream is exact
    /// string equality post-trim.
    fn scan_file(path: &Path) -> io::Result<Vec<UrlOccurrence>> {
        let mut occurrences = Vec::with_capacity(scan::DEFAULT_LINE_CAPACITY_PER_FILE);
        let file_name = path.display().to_string();

        Searcher::new().search_path(
            &*LINE_MATCHER,
            path,
            UTF8(|line_number, line| {
                let trimmed = line.trim();
                if trimmed.starts_with(scan::URL_PREFIX) {
                    occurrences.push(UrlOccurrence::new_unchecked(
                        trimmed.to_string(),
                        line_number,
                        file_name.clone(),
                    ));
                }
                Ok(true)
            }),
        )?;

        Ok(occurrences)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::io::Write;

    type TestResult = std::result::Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn test_scan_file__extracts_url_lines() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        let file_name = file.path().display().to_string();
        file.write_all(
            "title: Some post\n\
             url: /posts/1\n\
             date: 2021-03-14\n"
                .as_bytes(),
        )?;

        let actual = Finder::scan_file(file.path())?;

        assert_eq!(
            actual,
            vec![UrlOccurrence::new_unchecked(
                "url: /posts/1".to_string(),
                2,
                file_name
            )]
        );
        Ok(())
    }

    #[test]
    fn test_scan_file__trims_surrounding_whitespace() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all("  url: /posts/1  \n\turl: /posts/2\n".as_bytes())?;

        let actual = Finder::scan_file(file.path())?;

        assert_eq!(actual.len(), 2);
        assert_eq!(actual[0].text(), "url: /posts/1");
        assert_eq!(actual[1].text(), "url: /posts/2");
        Ok(())
    }

    #[test]
    fn test_scan_file__prefix_must_be_at_position_zero() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(
            "seeurl: /posts/1\n\
             canonical-url: /posts/2\n\
             the url: is mentioned here\n"
                .as_bytes(),
        )?;

        let actual = Finder::scan_file(file.path())?;

        assert_eq!(actual.len(), 0);
        Ok(())
    }

    #[test]
    fn test_scan_file__prefix_is_case_sensitive() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all("URL: /posts/1\nUrl: /posts/2\nurl: /posts/3\n".as_bytes())?;

        let actual = Finder::scan_file(file.path())?;

        assert_eq!(actual.len(), 1);
        assert_eq!(actual[0].text(), "url: /posts/3");
        Ok(())
    }

    #[test]
    fn test_scan_file__value_is_not_normalized() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all("url: /Posts/1/\nurl: /posts/1\n".as_bytes())?;

        let actual = Finder::scan_file(file.path())?;

        // No case-folding, no trailing-slash normalization
        assert_eq!(actual[0].text(), "url: /Posts/1/");
        assert_eq!(actual[1].text(), "url: /posts/1");
        Ok(())
    }

    #[test]
    fn test_scan_file__line_numbers_are_one_indexed() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all("url: /posts/1\n\n\nurl: /posts/2\n".as_bytes())?;

        let actual = Finder::scan_file(file.path())?;

        assert_eq!(actual[0].line(), 1);
        assert_eq!(actual[1].line(), 4);
        Ok(())
    }

    #[test]
    fn test_scan_file__empty_file() -> TestResult {
        let file = tempfile::NamedTempFile::new()?;

        let actual = Finder::scan_file(file.path())?;

        assert_eq!(actual.len(), 0);
        Ok(())
    }

    #[test]
    fn test_scan_file__non_existing_file() {
        let non_existing_file = "non_existing_file.txt";
        let is_err = Finder::scan_file(non_existing_file.as_ref()).is_err();

        assert!(is_err);
    }

    #[test]
    fn test_find_url_lines__multiple_files() -> TestResult {
        let mut file1 = tempfile::NamedTempFile::new()?;
        let mut file2 = tempfile::NamedTempFile::new()?;

        file1.write_all("url: /posts/1\n".as_bytes())?;
        file2.write_all("url: /posts/1\nurl: /posts/2\n".as_bytes())?;

        let finder = Finder::default();
        let paths = vec![file1.path(), file2.path()];
        let result = finder.find_url_lines(paths)?;

        assert_eq!(result.len(), 3);

        let texts: Vec<&str> = result.iter().map(|occ| occ.text()).collect();
        assert_eq!(texts, vec!["url: /posts/1", "url: /posts/1", "url: /posts/2"]);

        Ok(())
    }

    #[test]
    fn test_find_url_lines__preserves_file_order() -> TestResult {
        let mut file1 = tempfile::NamedTempFile::new()?;
        let mut file2 = tempfile::NamedTempFile::new()?;

        file1.write_all("url: /a\n".as_bytes())?;
        file2.write_all("url: /b\n".as_bytes())?;

        let finder = Finder::default();
        let result = finder.find_url_lines(vec![file1.path(), file2.path()])?;

        assert_eq!(result[0].file_name(), file1.path().display().to_string());
        assert_eq!(result[1].file_name(), file2.path().display().to_string());
        Ok(())
    }

    #[test]
    fn test_find_url_lines__unreadable_file_aborts_scan() -> TestResult {
        let mut file1 = tempfile::NamedTempFile::new()?;
        file1.write_all("url: /a\n".as_bytes())?;
        let non_existing = Path::new("definitely_not_here.md");

        let finder = Finder::default();
        let result = finder.find_url_lines(vec![file1.path(), non_existing]);

        assert!(result.is_err());
        Ok(())
    }
}
