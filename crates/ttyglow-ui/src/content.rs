/// Dashboard text assembly.
///
/// Every row is a [`ContentLine`]: a ratatui [`Line`] whose spans carry their
/// colour as style, so measuring a row never involves escape sequences.
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use ttyglow_core::{assets::Assets, snapshot::Snapshot};

use crate::format::{format_percent, format_temperature, format_uptime_parts};

/// One logical row of dashboard text.
pub type ContentLine = Line<'static>;

/// Highlight colour for every dynamic value, as RGB channels.
pub const ACCENT_RGB: (u8, u8, u8) = (255, 78, 0);

/// Highlight colour for every dynamic value.
pub const ACCENT: Color = Color::Rgb(ACCENT_RGB.0, ACCENT_RGB.1, ACCENT_RGB.2);

/// Colour of labels, hint text, and the logo and mascot art.
pub const NEUTRAL: Color = Color::Rgb(255, 255, 255);

/// Prompt shown under the metrics.
pub const EXIT_HINT: &str = "Press any key to exit...";

/// Gap between fields sharing a row.
const FIELD_GAP: &str = "   ";

fn neutral(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(NEUTRAL))
}

fn accent(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(ACCENT))
}

/// Width of a line in terminal cells, ignoring its styling.
pub fn visible_width(line: &ContentLine) -> usize {
    line.width()
}

/// Assemble the dashboard rows in display order.
///
/// Logo, blank, hostname, blank, time, blank, usage row, uptime row, address
/// row, blank, exit hint, two blanks, mascot.
pub fn dashboard_lines(snap: &Snapshot, assets: &Assets) -> Vec<ContentLine> {
    let mut lines = Vec::with_capacity(assets.logo.len() + assets.mascot.len() + 12);

    lines.extend(assets.logo.iter().map(|row| Line::from(neutral(row.clone()))));

    lines.push(Line::default());
    lines.push(Line::from(accent(snap.hostname.clone())));
    lines.push(Line::default());
    lines.push(Line::from(accent(snap.time.clone())));
    lines.push(Line::default());

    lines.push(Line::from(vec![
        neutral("CPU: "),
        accent(format_percent(snap.cpu_pct)),
        neutral(format!("{FIELD_GAP}RAM: ")),
        accent(format_percent(snap.ram_pct)),
        neutral(format!("{FIELD_GAP}Disk: ")),
        accent(format_percent(snap.disk_pct)),
    ]));
    lines.push(uptime_line(snap));
    lines.push(Line::from(vec![
        neutral("IP: "),
        accent(snap.ip.clone()),
        neutral(format!("{FIELD_GAP}MAC: ")),
        accent(snap.mac.clone()),
    ]));

    lines.push(Line::default());
    lines.push(Line::from(neutral(EXIT_HINT)));
    lines.push(Line::default());
    lines.push(Line::default());

    lines.extend(assets.mascot.iter().map(|row| Line::from(neutral(row.clone()))));

    lines
}

fn uptime_line(snap: &Snapshot) -> ContentLine {
    let [days, hours, minutes, seconds] = format_uptime_parts(&snap.uptime);
    Line::from(vec![
        neutral("Uptime: "),
        accent(days),
        neutral(" "),
        accent(hours),
        neutral(" "),
        accent(minutes),
        neutral(" "),
        accent(seconds),
        neutral(format!("{FIELD_GAP}Temp: ")),
        accent(format_temperature(&snap.temperature_c)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use ttyglow_core::snapshot::Uptime;

    fn plain(line: &ContentLine) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn sample() -> Snapshot {
        Snapshot {
            hostname: "kiosk".into(),
            time: "12:34:56".into(),
            cpu_pct: 12.5,
            ram_pct: 40.0,
            disk_pct: 73.3,
            uptime: Uptime::from_secs(86400 + 2 * 3600 + 3 * 60 + 4),
            ip: "192.168.1.20".into(),
            mac: "aa:bb:cc:dd:ee:ff".into(),
            temperature_c: "47.5".into(),
            bytes_sent: 10,
            bytes_recv: 20,
        }
    }

    #[test]
    fn fixed_rows_without_assets() {
        let lines = dashboard_lines(&sample(), &Assets::default());
        let text: Vec<String> = lines.iter().map(plain).collect();
        assert_eq!(
            text,
            vec![
                "",
                "kiosk",
                "",
                "12:34:56",
                "",
                "CPU: 12.5%   RAM: 40.0%   Disk: 73.3%",
                "Uptime: 1d 2h 3m 4s   Temp: 47.5°C",
                "IP: 192.168.1.20   MAC: aa:bb:cc:dd:ee:ff",
                "",
                "Press any key to exit...",
                "",
                "",
            ]
        );
    }

    #[test]
    fn logo_leads_and_mascot_trails() {
        let assets = Assets {
            logo: vec!["LOGO1".into(), "LOGO2".into()],
            mascot: vec!["=^.^=".into()],
        };
        let lines = dashboard_lines(&sample(), &assets);
        assert_eq!(lines.len(), 15);
        assert_eq!(plain(&lines[0]), "LOGO1");
        assert_eq!(plain(&lines[1]), "LOGO2");
        assert_eq!(plain(&lines[3]), "kiosk");
        assert_eq!(plain(&lines[14]), "=^.^=");
    }

    #[test]
    fn dynamic_values_are_accented() {
        let lines = dashboard_lines(&sample(), &Assets::default());
        let accented: Vec<String> = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.style.fg == Some(ACCENT))
            .map(|s| s.content.to_string())
            .collect();
        assert_eq!(
            accented,
            vec![
                "kiosk",
                "12:34:56",
                "12.5%",
                "40.0%",
                "73.3%",
                "1d",
                "2h",
                "3m",
                "4s",
                "47.5°C",
                "192.168.1.20",
                "aa:bb:cc:dd:ee:ff",
            ]
        );
    }

    #[test]
    fn static_text_is_neutral() {
        let assets = Assets {
            logo: vec!["LOGO".into()],
            mascot: vec!["CAT".into()],
        };
        let lines = dashboard_lines(&sample(), &assets);
        for span in lines.iter().flat_map(|l| l.spans.iter()) {
            let text = span.content.as_ref();
            if text == "LOGO" || text == "CAT" || text.contains("CPU") || text == EXIT_HINT {
                assert_eq!(span.style.fg, Some(NEUTRAL), "{text:?}");
            }
        }
    }

    #[test]
    fn unavailable_temperature_has_no_unit() {
        let snap = Snapshot {
            temperature_c: "N/A".into(),
            ..sample()
        };
        let lines = dashboard_lines(&snap, &Assets::default());
        assert!(plain(&lines[6]).ends_with("Temp: N/A"));
    }

    #[test]
    fn width_ignores_styling() {
        let line = Line::from(vec![neutral("IP: "), accent("10.0.0.1")]);
        assert_eq!(visible_width(&line), 12);
    }
}
