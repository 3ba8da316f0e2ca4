//! Schedule page generation.
//!
//! Runs the whole pipeline for one term: load the course file, compute the
//! layout, render markup and stylesheet, write both files. Rendering happens
//! entirely in memory, and both files are staged as temporaries next to their
//! targets before either is renamed into place, so a failing run leaves the
//! output directory untouched.

use log::{debug, info};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tempfile::NamedTempFile;

use crate::config::ScheduleConfig;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{parse_schedule_file, Schedule};
use crate::render::{render_html, render_stylesheet, HtmlOptions};
use crate::routes::calendar::CalendarLayout;
use crate::services::layout::LayoutEngine;

/// Name of the course file inside a term directory.
pub const SOURCE_FILE_NAME: &str = "schedule.json";

/// Academic quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Fall,
    Winter,
    Spring,
    Summer,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Fall, Season::Winter, Season::Spring, Season::Summer];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Fall => "fall",
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Season::ALL
            .into_iter()
            .find(|season| season.as_str() == lowered)
            .ok_or_else(|| {
                ScheduleError::InvalidTerm(format!(
                    "season must be one of fall, winter, spring, summer (got '{}')",
                    s
                ))
            })
    }
}

/// A season plus the last two digits of its year, e.g. `fall_24`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub season: Season,
    year: String,
}

impl Term {
    pub fn new(season: Season, year: &str) -> ScheduleResult<Self> {
        if year.len() != 2 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ScheduleError::InvalidTerm(format!(
                "year must be the last 2 digits of the year (got '{}')",
                year
            )));
        }
        Ok(Self {
            season,
            year: year.to_string(),
        })
    }

    pub fn parse(season: &str, year: &str) -> ScheduleResult<Self> {
        Self::new(season.parse()?, year)
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn directory_name(&self) -> String {
        format!("{}_{}", self.season, self.year)
    }
}

/// Input and output files of one term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermPaths {
    pub term_dir: PathBuf,
    pub source: PathBuf,
    pub html: PathBuf,
    pub css: PathBuf,
}

impl TermPaths {
    pub fn new(school_dir: &Path, term: &Term, config: &ScheduleConfig) -> Self {
        let term_dir = school_dir.join(term.directory_name());
        Self::in_directory(term_dir, config)
    }

    /// Paths for a term directory given directly.
    pub fn in_directory(term_dir: PathBuf, config: &ScheduleConfig) -> Self {
        Self {
            source: term_dir.join(SOURCE_FILE_NAME),
            html: term_dir.join(&config.render.html_name),
            css: term_dir.join(&config.render.stylesheet_name),
            term_dir,
        }
    }
}

/// Rendered artifacts, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub html: String,
    pub css: String,
}

/// Builds the weekly calendar page for a loaded schedule.
#[derive(Debug, Clone)]
pub struct ScheduleMaker {
    schedule: Schedule,
    layout: CalendarLayout,
    html_options: HtmlOptions,
    base_stylesheet: String,
}

impl ScheduleMaker {
    /// Compute the layout for `schedule` using the settings in `config`.
    pub fn new(schedule: Schedule, config: &ScheduleConfig) -> ScheduleResult<Self> {
        let engine = LayoutEngine::new(config.layout_config()?);
        let layout = engine.compute(&schedule.courses);
        let html_options = HtmlOptions {
            title: config.render.title.clone(),
            stylesheet_href: config.render.stylesheet_name.clone(),
            checksum: Some(schedule.checksum.clone()),
        };
        Ok(Self {
            schedule,
            layout,
            html_options,
            base_stylesheet: config.base_stylesheet()?,
        })
    }

    pub fn from_file<P: AsRef<Path>>(source: P, config: &ScheduleConfig) -> ScheduleResult<Self> {
        let schedule = parse_schedule_file(source, config.weekday_policy())?;
        Self::new(schedule, config)
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn layout(&self) -> &CalendarLayout {
        &self.layout
    }

    pub fn render(&self) -> RenderedPage {
        RenderedPage {
            html: render_html(&self.layout, &self.html_options),
            css: render_stylesheet(&self.base_stylesheet, &self.layout),
        }
    }

    /// Write the stylesheet and markup.
    ///
    /// Both files are fully written to temporaries first; neither target is
    /// touched until both temporaries exist.
    pub fn generate_html_page(
        &self,
        html_path: &Path,
        css_path: &Path,
    ) -> ScheduleResult<RenderedPage> {
        let page = self.render();
        let staged_html = stage(html_path, &page.html)?;
        let staged_css = stage(css_path, &page.css)?;
        persist(staged_html, html_path)?;
        persist(staged_css, css_path)?;
        info!(
            "Wrote {} events to {} and {}",
            self.layout.blocks.len(),
            html_path.display(),
            css_path.display()
        );
        Ok(page)
    }
}

/// Write `contents` to a temporary file in the directory of `target`.
fn stage(target: &Path, contents: &str) -> ScheduleResult<NamedTempFile> {
    if target.is_dir() {
        return Err(ScheduleError::io(
            target,
            io::Error::new(io::ErrorKind::AlreadyExists, "a directory is in the way"),
        ));
    }
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir).map_err(|e| ScheduleError::io(dir, e))?;
    if let Err(e) = file.write_all(contents.as_bytes()) {
        return Err(ScheduleError::io(file.path(), e));
    }
    if let Err(e) = file.as_file().sync_all() {
        return Err(ScheduleError::io(file.path(), e));
    }
    debug!("Staged {} at {}", target.display(), file.path().display());
    Ok(file)
}

fn persist(file: NamedTempFile, target: &Path) -> ScheduleResult<()> {
    file.persist(target)
        .map(|_| ())
        .map_err(|e| ScheduleError::io(target, e.error))
}

/// Load, lay out and write one term's schedule page.
pub fn generate_term(paths: &TermPaths, config: &ScheduleConfig) -> ScheduleResult<ScheduleMaker> {
    info!("Generating schedule from {}", paths.source.display());
    let maker = ScheduleMaker::from_file(&paths.source, config)?;
    maker.generate_html_page(&paths.html, &paths.css)?;
    Ok(maker)
}
