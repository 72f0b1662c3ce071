use crate::error::{Error, Result};
use crate::filter::SortKey;
use crate::menu::Line;
use crate::model::{Item, Kind};
use crate::units::format_value;
use crate::widgets::{RenderCtx, Widget};

/// Shows one current numeric value, unit-converted for display. The
/// alternate line exposes a mute action bound to the item's id.
pub struct ChartWidget;

impl Widget for ChartWidget {
    fn id(&self) -> &'static str {
        "chart"
    }

    fn endpoint(&self) -> &'static str {
        "/widget"
    }

    fn accepts(&self, item: &Item) -> bool {
        item.kind == Some(Kind::Chart)
    }

    fn sort_key(&self) -> SortKey {
        SortKey::Label
    }

    fn render(&self, item: &Item, ctx: &RenderCtx) -> Result<Vec<Line>> {
        let value = item
            .value
            .ok_or_else(|| Error::decode(format!("chart '{}' has no value", item.label)))?;
        let text = format!("{} - {}", item.label, format_value(value, item.unit_hint()));

        let primary = Line::new(text.clone()).maybe_href(item.more.as_deref());
        let alternate = Line::new(text)
            .alternate()
            .command(ctx.exe, vec!["mute".into(), item.id_key()]);
        Ok(vec![primary, alternate])
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

    fn now() -> DateTime<Utc> {
        "2026-08-30T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn converts_value_and_binds_mute_action() {
        let cfg = config();
        let ctx = RenderCtx {
            config: &cfg,
            now: now(),
            exe: "/usr/local/bin/statbar",
        };
        let item: Item = serde_json::from_str(
            r#"{"id": 1, "kind": "chart", "label": "CPU", "value": 0.73, "unit": "percent"}"#,
        )
        .unwrap();

        let lines = ChartWidget.render(&item, &ctx).unwrap();
        assert_eq!(lines[0].to_string(), "CPU - 73%");
        let alternate = lines[1].to_string();
        assert!(alternate.starts_with("CPU - 73% | "), "got: {alternate}");
        assert!(alternate.contains("bash=\"/usr/local/bin/statbar\" param1=mute param2=1"));
        assert!(alternate.contains("alternate=true"));
    }

    #[test]
    fn unknown_unit_falls_back_to_raw_value() {
        let cfg = config();
        let ctx = RenderCtx {
            config: &cfg,
            now: now(),
            exe: "/bin/statbar",
        };
        let item: Item = serde_json::from_str(
            r#"{"id": 2, "kind": "chart", "label": "Load", "value": 5, "unit": "bogus-unit"}"#,
        )
        .unwrap();
        assert_eq!(ChartWidget.render(&item, &ctx).unwrap()[0].to_string(), "Load - 5");
    }

    #[test]
    fn missing_value_is_a_decode_error() {
        let cfg = config();
        let ctx = RenderCtx {
            config: &cfg,
            now: now(),
            exe: "/bin/statbar",
        };
        let item: Item =
            serde_json::from_str(r#"{"id": 3, "kind": "chart", "label": "Broken"}"#).unwrap();
        assert!(ChartWidget.render(&item, &ctx).is_err());
    }
}
