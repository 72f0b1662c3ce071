use crate::error::{Error, Result};
use crate::filter::SortKey;
use crate::menu::Line;
use crate::model::{Item, Kind};
use crate::timefmt::{human_duration, normalize};
use crate::widgets::{RenderCtx, Widget};

/// A place/time pairing, rendered like a countdown under a pin icon.
pub struct LocationWidget;

impl Widget for LocationWidget {
    fn id(&self) -> &'static str {
        "location"
    }

    fn endpoint(&self) -> &'static str {
        "/widget"
    }

    fn accepts(&self, item: &Item) -> bool {
        item.kind == Some(Kind::Location)
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Created
    }

    fn render(&self, item: &Item, ctx: &RenderCtx) -> Result<Vec<Line>> {
        let created = item.created.ok_or_else(|| {
            Error::decode(format!("location '{}' has no created timestamp", item.label))
        })?;
        let norm = normalize(created, ctx.now);
        let highlight = norm.direction.highlight();
        let desc = item.description.clone().unwrap_or_default();

        let primary = Line::new(format!(
            "📍 {} - {} - {desc}",
            item.label,
            norm.local.format("%Y-%m-%d %H:%M")
        ))
        .highlight(highlight)
        .maybe_href(item.more.as_deref());

        let alternate = Line::new(format!(
            "📍 {} - [{}] - {desc}",
            item.label,
            human_duration(norm.magnitude)
        ))
        .highlight(highlight)
        .alternate()
        .href(format!("{}/widget/{}", ctx.config.base, item.id));

        Ok(vec![primary, alternate])
    }
}
