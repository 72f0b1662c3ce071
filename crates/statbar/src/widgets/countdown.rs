use crate::error::{Error, Result};
use crate::filter::SortKey;
use crate::menu::Line;
use crate::model::{Item, Kind};
use crate::timefmt::{human_duration, normalize};
use crate::widgets::{RenderCtx, Widget};

/// Counts down (or up) to a target instant. Primary line shows the local
/// time, the alternate shows the magnitude-only distance from now; both are
/// colored by direction.
pub struct CountdownWidget;

impl Widget for CountdownWidget {
    fn id(&self) -> &'static str {
        "countdown"
    }

    fn endpoint(&self) -> &'static str {
        "/widget"
    }

    fn accepts(&self, item: &Item) -> bool {
        item.kind == Some(Kind::Countdown)
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Created
    }

    fn render(&self, item: &Item, ctx: &RenderCtx) -> Result<Vec<Line>> {
        let created = item.created.ok_or_else(|| {
            Error::decode(format!("countdown '{}' has no created timestamp", item.label))
        })?;
        let norm = normalize(created, ctx.now);
        let highlight = norm.direction.highlight();
        let desc = item.description.clone().unwrap_or_default();

        let primary = Line::new(format!(
            "{} - {} - {desc}",
            item.label,
            norm.local.format("%Y-%m-%d %H:%M")
        ))
        .highlight(highlight)
        .maybe_href(item.more.as_deref());

        let detail = format!("{}/widget/{}", ctx.config.base, item.id);
        let alternate = Line::new(format!(
            "{} - [{}] - {desc}",
            item.label,
            human_duration(norm.magnitude)
        ))
        .highlight(highlight)
        .alternate()
        .href(detail);

        Ok(vec![primary, alternate])
    }
}
