use bean_depend::application::dto::OutputFormat;
use bean_depend::config::ConfigFile;
use bean_depend::dependency_analysis::graph::DEFAULT_MAX_DEPTH;
use bean_depend::shared::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

/// Analyze the coupling between beans of a dependency-injection container
#[derive(Parser, Debug)]
#[command(name = "bean-depend")]
#[command(version)]
#[command(
    about = "Report dependency layers and circular dependencies of a bean container",
    long_about = None
)]
pub struct Args {
    /// Path to the bean container manifest (TOML)
    #[arg(short, long, default_value = "beans.toml")]
    pub manifest: PathBuf,

    /// Output format: text, json or cypher [default: text]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Root configuration class whose import layers are reported
    #[arg(short, long, value_name = "CLASS")]
    pub root: Option<String>,

    /// Maximum number of steps searched for circular dependencies [default: 4]
    #[arg(short = 'd', long)]
    pub max_depth: Option<usize>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Exclude beans matching patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "dataSource" -e "*Controller"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to a config file (defaults to bean-depend.config.yml next to the manifest)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit with code 1 when circular dependencies are found
    #[arg(long)]
    pub fail_on_cycles: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Directory searched for a config file when `--config` is not given
    pub fn config_search_dir(&self) -> &Path {
        match self.manifest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// Merges these arguments over `config`; command-line values win.
    ///
    /// Exclusion patterns from both sources are combined.
    pub fn resolve(self, config: Option<ConfigFile>) -> Result<Options> {
        let config = config.unwrap_or_default();

        let format = match self.format {
            Some(format) => format,
            None => config.output_format()?.unwrap_or_default(),
        };

        let mut exclude = config.exclude_beans.unwrap_or_default();
        for pattern in self.exclude {
            if !exclude.contains(&pattern) {
                exclude.push(pattern);
            }
        }

        Ok(Options {
            manifest: self.manifest,
            format,
            root: self.root.or(config.root),
            max_depth: self
                .max_depth
                .or(config.max_depth)
                .unwrap_or(DEFAULT_MAX_DEPTH),
            output: self.output,
            exclude,
            fail_on_cycles: self.fail_on_cycles || config.fail_on_cycles.unwrap_or(false),
        })
    }
}

/// Effective settings of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub manifest: PathBuf,
    pub format: OutputFormat,
    pub root: Option<String>,
    pub max_depth: usize,
    pub output: Option<PathBuf>,
    pub exclude: Vec<String>,
    pub fail_on_cycles: bool,
}
