use crate::dependency_analysis::domain::BeanName;
use crate::dependency_analysis::graph::FlatDependencyMap;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// BeanFilter - Removes beans matching exclusion patterns
///
/// Patterns match the whole bean name; `*` stands for zero or more
/// characters. Matching is case-sensitive.
#[derive(Debug)]
pub struct BeanFilter {
    patterns: Vec<ExcludePattern>,
}

impl BeanFilter {
    /// Creates a new BeanFilter from raw pattern strings
    ///
    /// # Arguments
    /// * `patterns` - Pattern strings (e.g., "org.springframework.*", "*Properties")
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Removes excluded beans from both the map keys and the dependency sets
    pub fn filter_dependency_map(
        &self,
        dependency_map: FlatDependencyMap<BeanName>,
    ) -> FlatDependencyMap<BeanName> {
        if self.patterns.is_empty() {
            return dependency_map;
        }
        dependency_map.retain(|bean| !self.matches(bean.as_str()))
    }

    /// Checks every pattern so each one records whether it ever matched
    fn matches(&self, bean_name: &str) -> bool {
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(bean_name) || hit)
    }

    /// Returns the patterns that did not match any bean so far
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

/// A single exclusion pattern split at its wildcards
#[derive(Debug)]
struct ExcludePattern {
    original: String,
    segments: Vec<String>,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        Ok(Self {
            segments: pattern.split('*').map(str::to_string).collect(),
            original: pattern,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, bean_name: &str) -> bool {
        let is_match = glob_match(&self.segments, bean_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

/// Anchored wildcard match over the pieces of a pattern split at `*`
///
/// The first piece must be a prefix and the last a suffix; pieces in
/// between are found left to right.
fn glob_match(segments: &[String], text: &str) -> bool {
    let (first, rest) = match segments.split_first() {
        Some(split) => split,
        None => return text.is_empty(),
    };
    let Some(last) = rest.last() else {
        return text == first;
    };

    if text.len() < first.len() + last.len() || !text.starts_with(first.as_str()) || !text.ends_with(last.as_str()) {
        return false;
    }

    let mut remaining = &text[first.len()..text.len() - last.len()];
    for middle in &rest[..rest.len() - 1] {
        match remaining.find(middle.as_str()) {
            Some(pos) => remaining = &remaining[pos + middle.len()..],
            None => return false,
        }
    }
    true
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    if let Some(ch) = pattern.chars().find(|&c| !is_valid_pattern_char(c)) {
        anyhow::bail!(
            "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
             Only characters allowed in bean names and asterisks (*) are allowed.",
            ch,
            pattern
        );
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '#' | '$' | '*')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(patterns: &[&str]) -> BeanFilter {
        BeanFilter::new(patterns.iter().map(|p| p.to_string()).collect()).unwrap()
    }

    fn bean(name: &str) -> BeanName {
        BeanName::new(name).unwrap()
    }

    #[test]
    fn test_exact_match() {
        let filter = filter(&["dataSource"]);
        assert!(filter.matches("dataSource"));
        assert!(!filter.matches("dataSourceProperties"));
        assert!(!filter.matches("myDataSource"));
    }

    #[test]
    fn test_leading_wildcard() {
        let filter = filter(&["*Properties"]);
        assert!(filter.matches("serverProperties"));
        assert!(filter.matches("Properties"));
        assert!(!filter.matches("propertiesLoader"));
        assert!(!filter.matches("serverPropertiesX"));
    }

    #[test]
    fn test_trailing_wildcard() {
        let filter = filter(&["org.springframework.*"]);
        assert!(filter.matches("org.springframework.context.internalProcessor"));
        assert!(!filter.matches("com.org.springframework.x"));
    }

    #[test]
    fn test_inner_wildcards_are_anchored() {
        let filter = filter(&["order*Service"]);
        assert!(filter.matches("orderService"));
        assert!(filter.matches("orderPaymentService"));
        assert!(!filter.matches("orderServiceImpl"));
        assert!(!filter.matches("myorderService"));

        let filter = self::filter(&["a*b*c"]);
        assert!(filter.matches("abc"));
        assert!(filter.matches("axxbyyc"));
        assert!(!filter.matches("acb"));
        // Prefix and suffix may not overlap
        let filter = self::filter(&["ab*ba"]);
        assert!(!filter.matches("aba"));
    }

    #[test]
    fn test_contains_wildcard() {
        let filter = filter(&["*Repository*"]);
        assert!(filter.matches("orderRepositoryImpl"));
        assert!(filter.matches("Repository"));
        assert!(!filter.matches("repo"));
    }

    #[test]
    fn test_pattern_validation() {
        let too_long = BeanFilter::new(vec!["a".repeat(256)]);
        assert!(too_long.unwrap_err().to_string().contains("too long"));
        assert!(BeanFilter::new(vec!["a".repeat(255)]).is_ok());

        let invalid = BeanFilter::new(vec!["bean@name".to_string()]);
        assert!(invalid.unwrap_err().to_string().contains("invalid character"));

        let empty = BeanFilter::new(vec![String::new()]);
        assert!(empty.unwrap_err().to_string().contains("cannot be empty"));

        let wildcards = BeanFilter::new(vec!["**".to_string()]);
        assert!(wildcards
            .unwrap_err()
            .to_string()
            .contains("cannot contain only wildcards"));
    }

    #[test]
    fn test_pattern_count_boundary() {
        let patterns: Vec<String> = (0..64).map(|i| format!("bean{}", i)).collect();
        assert!(BeanFilter::new(patterns).is_ok());

        let patterns: Vec<String> = (0..65).map(|i| format!("bean{}", i)).collect();
        assert!(BeanFilter::new(patterns)
            .unwrap_err()
            .to_string()
            .contains("Too many"));
    }

    #[test]
    fn test_filter_dependency_map() {
        let map: FlatDependencyMap<BeanName> = [
            (bean("app"), vec![bean("repo"), bean("metricsExporter")]),
            (bean("metricsExporter"), vec![bean("registry")]),
            (bean("repo"), vec![]),
        ]
        .into_iter()
        .collect();

        let filter = filter(&["metrics*"]);
        let filtered = filter.filter_dependency_map(map);

        assert!(!filtered.contains(&bean("metricsExporter")));
        let app: Vec<&str> = filtered
            .dependencies_of(&bean("app"))
            .unwrap()
            .iter()
            .map(BeanName::as_str)
            .collect();
        assert_eq!(app, vec!["repo"]);
        assert!(filtered.contains(&bean("repo")));
    }

    #[test]
    fn test_unmatched_patterns() {
        let map: FlatDependencyMap<BeanName> = [
            (bean("app"), vec![bean("repo")]),
            (bean("repo"), vec![]),
        ]
        .into_iter()
        .collect();

        let filter = filter(&["repo", "*Cache", "ap*"]);
        let _filtered = filter.filter_dependency_map(map);

        assert_eq!(filter.get_unmatched_patterns(), vec!["*Cache".to_string()]);
    }

    #[test]
    fn test_every_matching_pattern_is_marked() {
        let filter = filter(&["repo", "re*"]);
        assert!(filter.matches("repo"));
        assert!(filter.get_unmatched_patterns().is_empty());
    }

    #[test]
    fn test_empty_pattern_list() {
        let filter = BeanFilter::new(vec![]).unwrap();
        assert!(filter.is_empty());
        assert!(!filter.matches("anything"));
    }
}
