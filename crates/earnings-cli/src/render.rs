//! Terminal rendering of snapshots.

use earnings_core::{format_brl, format_hour_range, EarningsSnapshot, Preferences, Theme, WorkConfig};

const BAR_WIDTH: usize = 24;

#[derive(Clone, Copy)]
enum Tone {
    Daily,
    Weekly,
    Monthly,
    Working,
    Off,
}

struct Palette {
    enabled: bool,
    theme: Theme,
}

impl Palette {
    fn new(prefs: &Preferences) -> Self {
        Self {
            enabled: prefs.color,
            theme: prefs.theme,
        }
    }

    /// blue / emerald / indigo progress tracks; bright variants on dark backgrounds.
    fn code(&self, tone: Tone) -> &'static str {
        match (self.theme, tone) {
            (Theme::Dark, Tone::Daily) => "94",
            (Theme::Dark, Tone::Weekly) => "92",
            (Theme::Dark, Tone::Monthly) => "95",
            (Theme::Light, Tone::Daily) => "34",
            (Theme::Light, Tone::Weekly) => "32",
            (Theme::Light, Tone::Monthly) => "35",
            (_, Tone::Working) => "1;32",
            (_, Tone::Off) => "33",
        }
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{text}\x1b[0m", self.code(tone))
        } else {
            text.to_string()
        }
    }
}

fn bar(pct: f64) -> String {
    let filled = ((pct / 100.0) * BAR_WIDTH as f64).round().clamp(0.0, BAR_WIDTH as f64) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn progress_line(palette: &Palette, tone: Tone, label: &str, earned: f64, target: f64, pct: f64) -> String {
    format!(
        "{label:<8} {} {:>3}%  {} / {}",
        palette.paint(tone, &bar(pct)),
        pct.round() as u32,
        format_brl(earned),
        format_brl(target),
    )
}

/// Multi-line human view of one snapshot.
pub fn snapshot(snap: &EarningsSnapshot, config: &WorkConfig, prefs: &Preferences) -> String {
    let palette = Palette::new(prefs);
    let t = &snap.targets;
    let status = if snap.is_working_now {
        palette.paint(Tone::Working, "working hours")
    } else {
        palette.paint(Tone::Off, "off hours")
    };

    let mut lines = vec![
        format!("Earned today   {}", format_brl(snap.daily_earnings)),
        format!(
            "Rate           {}/second  {}/minute",
            format_brl(t.earnings_per_second),
            format_brl(snap.earnings_per_minute())
        ),
        format!(
            "Schedule       {}  {} days/week  [{status}]",
            format_hour_range(config.work_start_hour, config.work_end_hour),
            config.days_per_week
        ),
        String::new(),
        progress_line(&palette, Tone::Daily, "Daily", snap.daily_earnings, t.daily_target, snap.daily_progress_pct()),
        progress_line(&palette, Tone::Weekly, "Weekly", snap.weekly_earnings, t.weekly_target, snap.weekly_progress_pct()),
        progress_line(&palette, Tone::Monthly, "Monthly", snap.monthly_earnings, t.monthly_target, snap.monthly_progress_pct()),
    ];
    if !snap.is_working_now {
        lines.push(String::new());
        lines.push("Currently outside the configured working hours".to_string());
    }
    lines.join("\n")
}
