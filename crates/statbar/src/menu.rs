use std::fmt;

use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::fetch::ItemSource;
use crate::filter::select;
use crate::mute::MuteSet;
use crate::widgets::{RenderCtx, builtin_widgets};

/// Starts a new menu section when emitted on its own line.
pub const SEPARATOR: &str = "---";

pub const ISSUES_URL: &str = "https://github.com/statbar/statbar/issues";

/// Color-equivalent display category derived from a timestamp's direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Upcoming; rendered in a calm color.
    Info,
    /// Already passed; rendered in an attention color.
    Urgent,
}

impl Highlight {
    pub fn color(self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Urgent => "red",
        }
    }
}

/// One output line in the host's `text | key=value ...` convention.
#[derive(Debug, Clone, Default)]
pub struct Line {
    text: String,
    submenu: bool,
    href: Option<String>,
    color: Option<&'static str>,
    alternate: bool,
    refresh: bool,
    command: Option<(String, Vec<String>)>,
}

impl Line {
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn submenu(mut self) -> Self {
        self.submenu = true;
        self
    }

    pub fn href<U: Into<String>>(mut self, url: U) -> Self {
        self.href = Some(url.into());
        self
    }

    pub fn maybe_href(self, url: Option<&str>) -> Self {
        match url {
            Some(u) => self.href(u),
            None => self,
        }
    }

    pub fn highlight(mut self, h: Highlight) -> Self {
        self.color = Some(h.color());
        self
    }

    /// Secondary detail line, shown only under the host's modifier key.
    pub fn alternate(mut self) -> Self {
        self.alternate = true;
        self
    }

    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    /// Executable action. The host re-runs the menu afterwards, so the line
    /// also carries `terminal=false refresh=true`.
    pub fn command<E: Into<String>>(mut self, exe: E, params: Vec<String>) -> Self {
        self.command = Some((exe.into(), params));
        self
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.submenu {
            f.write_str("-- ")?;
        }
        f.write_str(&sanitize(&self.text))?;

        let mut attrs: Vec<String> = Vec::new();
        if let Some(href) = &self.href {
            attrs.push(format!("href={href}"));
        }
        if let Some(color) = self.color {
            attrs.push(format!("color={color}"));
        }
        if self.alternate {
            attrs.push("alternate=true".into());
        }
        if let Some((exe, params)) = &self.command {
            attrs.push(format!("bash=\"{exe}\""));
            for (i, p) in params.iter().enumerate() {
                attrs.push(format!("param{}={p}", i + 1));
            }
            attrs.push("terminal=false".into());
            attrs.push("refresh=true".into());
        } else if self.refresh {
            attrs.push("refresh=true".into());
        }

        if !attrs.is_empty() {
            write!(f, " | {}", attrs.join(" "))?;
        }
        Ok(())
    }
}

/// The line protocol reserves `|` and is strictly line-oriented, so text
/// from the service must not carry either.
fn sanitize(text: &str) -> String {
    text.chars()
        .filter_map(|c| match c {
            '|' => Some('¦'),
            '\n' | '\r' | '\t' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .collect()
}

/// Build the whole dropdown: icon title, one section per widget kind, and
/// the trailing developer section. A failing endpoint collapses to a single
/// error line in its own section; every other section still renders.
pub fn assemble(
    config: &Config,
    muted: &MuteSet,
    now: DateTime<Utc>,
    exe: &str,
    source: &dyn ItemSource,
) -> Vec<String> {
    let ctx = RenderCtx { config, now, exe };
    let mut out = vec![sanitize(&config.icon)];

    for widget in builtin_widgets() {
        out.push(SEPARATOR.to_string());
        match source.fetch(widget.endpoint()) {
            Ok(items) => {
                let kept = select(
                    items,
                    |it| widget.accepts(it),
                    widget.sort_key(),
                    now,
                    config.expired,
                    muted,
                );
                for item in kept {
                    match widget.render(&item, &ctx) {
                        Ok(lines) => out.extend(lines.iter().map(ToString::to_string)),
                        Err(e) => out.push(
                            Line::new(format!("Error rendering {e}"))
                                .highlight(Highlight::Urgent)
                                .to_string(),
                        ),
                    }
                }
            }
            Err(e) => out.push(
                Line::new(format!("Error loading {e}"))
                    .highlight(Highlight::Urgent)
                    .to_string(),
            ),
        }
    }

    out.push(SEPARATOR.to_string());
    out.push(Line::new(":computer: Dev").to_string());
    out.push(Line::new("Refresh").submenu().refresh().to_string());
    out.push(Line::new("Api").submenu().href(config.api.as_str()).to_string());
    out.push(Line::new("Issues").submenu().href(ISSUES_URL).to_string());
    out
}
