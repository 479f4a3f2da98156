use crate::shared::error::AnalyzerError;
use crate::shared::Result;

/// Maximum length for bean and class names (security limit)
const MAX_NAME_LENGTH: usize = 255;

/// NewType wrapper for a bean name with validation
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BeanName(String);

impl BeanName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name("Bean name", &name, |c| {
            c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '#' | '$')
        })?;
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier usable as a Cypher variable
    pub fn cypher_identifier(&self) -> String {
        self.0.replace('.', "_").replace('-', "__")
    }
}

impl std::fmt::Display for BeanName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fully qualified name of a configuration class
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassName(String);

impl ClassName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name("Class name", &name, |c| {
            c.is_alphanumeric() || matches!(c, '_' | '.' | '$')
        })?;
        if name.starts_with('.') || name.ends_with('.') || name.contains("..") {
            return Err(AnalyzerError::Validation {
                message: format!("Class name '{}' has an empty package segment", name),
            }
            .into());
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Class name without its package, nested classes reduced to the innermost name
    pub fn simple_name(&self) -> &str {
        let unqualified = self.0.rsplit('.').next().unwrap_or(&self.0);
        unqualified.rsplit('$').next().unwrap_or(unqualified)
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn validate_name<F>(kind: &str, name: &str, allowed: F) -> Result<()>
where
    F: Fn(char) -> bool,
{
    if name.is_empty() {
        return Err(AnalyzerError::Validation {
            message: format!("{} cannot be empty", kind),
        }
        .into());
    }

    // Security: Length limit to prevent DoS
    if name.len() > MAX_NAME_LENGTH {
        return Err(AnalyzerError::Validation {
            message: format!(
                "{} is too long ({} bytes). Maximum allowed: {} bytes",
                kind,
                name.len(),
                MAX_NAME_LENGTH
            ),
        }
        .into());
    }

    if let Some(invalid) = name.chars().find(|&c| !allowed(c)) {
        return Err(AnalyzerError::Validation {
            message: format!("{} '{}' contains invalid character '{}'", kind, name, invalid),
        }
        .into());
    }

    Ok(())
}
