use chrono::Duration;

use crate::error::{Error, Result};
use crate::filter::SortKey;
use crate::menu::Line;
use crate::model::{Item, Kind};
use crate::widgets::{RenderCtx, Widget};

/// Daily report links. Only reports dated today or yesterday appear; the
/// whitelist is literal, not a rolling 48-hour window.
pub struct ReportWidget;

impl Widget for ReportWidget {
    fn id(&self) -> &'static str {
        "report"
    }

    fn endpoint(&self) -> &'static str {
        "/report?ordering=-date"
    }

    // Report payloads predate the kind tag, so an untagged item belongs here.
    fn accepts(&self, item: &Item) -> bool {
        matches!(item.kind, None | Some(Kind::Report))
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Date
    }

    fn render(&self, item: &Item, ctx: &RenderCtx) -> Result<Vec<Line>> {
        let date = item
            .date
            .as_deref()
            .ok_or_else(|| Error::decode(format!("report '{}' has no date", item.label)))?;
        let url = item
            .url
            .as_deref()
            .ok_or_else(|| Error::decode(format!("report '{}' has no url", item.label)))?;

        let today = ctx.now.date_naive();
        let yesterday = today - Duration::days(1);
        if date != today.to_string() && date != yesterday.to_string() {
            return Ok(Vec::new());
        }

        Ok(vec![
            Line::new(format!("{} - {date}", item.label))
                .href(format!("{}{url}", ctx.config.base)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::{DateTime, Utc};

    fn config() -> Config {
        Config {
            api: "https://stats.example.com/api".into(),
            token: "t".into(),
            icon: ":bar_chart:".into(),
            base: "https://stats.example.com".into(),
            expired: true,
        }
    }

    fn report(date: &str) -> Item {
        serde_json::from_str(&format!(
            r#"{{"id": 1, "name": "Daily summary", "date": "{date}", "url": "/report/1"}}"#
        ))
        .unwrap()
    }

    fn ctx_at<'a>(cfg: &'a Config, now: &str) -> RenderCtx<'a> {
        RenderCtx {
            config: cfg,
            now: now.parse::<DateTime<Utc>>().unwrap(),
            exe: "/bin/statbar",
        }
    }

    #[test]
    fn today_and_yesterday_render_with_built_link() {
        let cfg = config();
        let ctx = ctx_at(&cfg, "2026-08-30T12:00:00Z");

        let lines = ReportWidget.render(&report("2026-08-30"), &ctx).unwrap();
        assert_eq!(
            lines[0].to_string(),
            "Daily summary - 2026-08-30 | href=https://stats.example.com/report/1"
        );
        assert_eq!(ReportWidget.render(&report("2026-08-29"), &ctx).unwrap().len(), 1);
    }

    #[test]
    fn two_days_ago_is_suppressed() {
        let cfg = config();
        let ctx = ctx_at(&cfg, "2026-08-30T12:00:00Z");
        assert!(ReportWidget.render(&report("2026-08-28"), &ctx).unwrap().is_empty());
    }

    #[test]
    fn missing_date_or_url_is_a_decode_error() {
        let cfg = config();
        let ctx = ctx_at(&cfg, "2026-08-30T12:00:00Z");
        let item: Item = serde_json::from_str(r#"{"id": 1, "name": "Broken"}"#).unwrap();
        assert!(ReportWidget.render(&item, &ctx).is_err());
    }
}
