use chrono::{DateTime, Utc};

use crate::config::Config;
use crate::error::Result;
use crate::filter::SortKey;
use crate::menu::Line;
use crate::model::Item;

pub mod chart;
pub mod countdown;
pub mod location;
pub mod report;

/// Shared read-only state for one render pass. `now` is sampled once at
/// startup so every widget agrees on what "expired" and "today" mean.
pub struct RenderCtx<'a> {
    pub config: &'a Config,
    pub now: DateTime<Utc>,
    /// Absolute path of the running binary, for executable menu actions.
    pub exe: &'a str,
}

/// One widget kind: which endpoint it polls, which items it claims, and how
/// a surviving item turns into menu lines. Renderers never mutate the mute
/// store.
pub trait Widget {
    fn id(&self) -> &'static str;
    fn endpoint(&self) -> &'static str;
    /// Accepted-kind predicate; a set per widget, not a single kind.
    fn accepts(&self, item: &Item) -> bool;
    fn sort_key(&self) -> SortKey;
    fn render(&self, item: &Item, ctx: &RenderCtx) -> Result<Vec<Line>>;
}

/// Menu section order.
pub fn builtin_widgets() -> Vec<Box<dyn Widget>> {
    vec![
        Box::new(countdown::CountdownWidget),
        Box::new(chart::ChartWidget),
        Box::new(location::LocationWidget),
        Box::new(report::ReportWidget),
    ]
}
