//! Runtime settings: command-line flags first, then environment, then defaults.

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tokenswap_core::{read_feed, IconBase, PriceEntry};

use crate::cli::Cli;
use crate::error::CliError;

pub const FEED_ENV: &str = "TOKENSWAP_FEED";
pub const ICON_BASE_ENV: &str = "TOKENSWAP_ICON_BASE_URL";

/// Where the price feed snapshot is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    Stdin,
    File(PathBuf),
}

impl FeedSource {
    fn from_path(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(path)
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Stdin => String::from("<stdin>"),
            Self::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<Vec<PriceEntry>, CliError> {
        match self {
            Self::Stdin => Ok(read_feed(io::stdin().lock())?),
            Self::File(path) => {
                let file = open(path)?;
                Ok(read_feed(BufReader::new(file))?)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub feed: FeedSource,
    pub icon_base: IconBase,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Self::resolve(cli.feed.clone(), cli.icon_base_url.clone(), |key| {
            env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Empty environment values count as unset.
    pub fn resolve(
        feed_flag: Option<PathBuf>,
        icon_base_flag: Option<String>,
        lookup_env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let from_env = |key: &str| lookup_env(key).filter(|value| !value.trim().is_empty());

        let feed = feed_flag
            .or_else(|| from_env(FEED_ENV).map(PathBuf::from))
            .map(FeedSource::from_path)
            .unwrap_or(FeedSource::Stdin);

        let icon_base = match icon_base_flag.or_else(|| from_env(ICON_BASE_ENV)) {
            Some(raw) => IconBase::parse(&raw)?,
            None => IconBase::default(),
        };

        Ok(Self { feed, icon_base })
    }
}

pub fn open(path: &Path) -> Result<File, CliError> {
    File::open(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}
