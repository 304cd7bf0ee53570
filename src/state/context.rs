/// Static companion cards shown around the outfit builder:
/// style persona, weather and schedule tabs, and the daily challenge.
/// None of them are backed by real data.

use chrono::{Local, NaiveDate};

pub const PERSONA: &str = "Modern Streetwear Aesthetic";

pub const DAILY_CHALLENGE: &str = "Style a look with only neutrals + one pop of color";

/// Tabs of the "smart context" card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContextTab {
    #[default]
    Weather,
    Schedule,
}

impl ContextTab {
    pub const ALL: [ContextTab; 2] = [ContextTab::Weather, ContextTab::Schedule];

    pub fn label(self) -> &'static str {
        match self {
            ContextTab::Weather => "Weather",
            ContextTab::Schedule => "Schedule",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub summary: &'static str,
    pub advice: &'static str,
}

impl WeatherReport {
    /// Placeholder forecast
    pub fn current() -> Self {
        Self {
            summary: "Sunny, 75°F",
            advice: "Great day for lighter fabrics and shades",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schedule {
    pub date: NaiveDate,
}

impl Schedule {
    pub fn today() -> Self {
        Self {
            date: Local::now().date_naive(),
        }
    }

    pub fn heading(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }

    pub fn hint(&self) -> &'static str {
        "Plan your outfit for an upcoming event"
    }
}

/// State of the context card
#[derive(Debug, Clone)]
pub struct Context {
    pub active_tab: ContextTab,
    pub weather: WeatherReport,
    pub schedule: Schedule,
}

impl Context {
    pub fn new() -> Self {
        Self {
            active_tab: ContextTab::default(),
            weather: WeatherReport::current(),
            schedule: Schedule::today(),
        }
    }

    pub fn select_tab(&mut self, tab: ContextTab) {
        self.active_tab = tab;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_defaults_to_weather() {
        let context = Context::new();
        assert_eq!(context.active_tab, ContextTab::Weather);
        assert_eq!(context.weather.summary, "Sunny, 75°F");
    }

    #[test]
    fn test_select_tab() {
        let mut context = Context::new();
        context.select_tab(ContextTab::Schedule);
        assert_eq!(context.active_tab, ContextTab::Schedule);
    }

    #[test]
    fn test_schedule_heading() {
        let schedule = Schedule {
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
        };
        assert_eq!(schedule.heading(), "Tuesday, March 5, 2024");
    }
}
