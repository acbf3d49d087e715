use haven_mood::summary::DEFAULT_WINDOWS;
use haven_mood::week::WeekStart;
use jiff::tz::TimeZone;

pub const WEEK_START_VAR: &str = "HAVEN_WEEK_START";
pub const MOOD_WINDOWS_VAR: &str = "HAVEN_MOOD_WINDOWS";
pub const TIME_ZONE_VAR: &str = "HAVEN_TIME_ZONE";

/// Runtime settings, read once at startup.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub week_start: WeekStart,
    pub mood_windows: Vec<usize>,
    /// Zone used to decide what "today" is when a request does not say.
    pub time_zone: TimeZone,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            mood_windows: DEFAULT_WINDOWS.to_vec(),
            time_zone: TimeZone::UTC,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults; set but
    /// malformed keys are an error.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(WEEK_START_VAR) {
            config.week_start = raw
                .parse()
                .map_err(|e| eyre::eyre!("invalid {WEEK_START_VAR}: {e}"))?;
        }

        if let Some(raw) = lookup(MOOD_WINDOWS_VAR) {
            config.mood_windows = parse_windows(&raw)
                .map_err(|e| eyre::eyre!("invalid {MOOD_WINDOWS_VAR} '{raw}': {e}"))?;
        }

        if let Some(raw) = lookup(TIME_ZONE_VAR) {
            let name = raw.trim();
            config.time_zone = if name.eq_ignore_ascii_case("utc") {
                TimeZone::UTC
            } else {
                TimeZone::get(name).map_err(|e| eyre::eyre!("invalid {TIME_ZONE_VAR}: {e}"))?
            };
        }

        tracing::info!(
            week_start = ?config.week_start,
            mood_windows = ?config.mood_windows,
            time_zone = config.time_zone.iana_name().unwrap_or("UTC"),
            "config loaded"
        );
        Ok(config)
    }

    pub fn today(&self) -> jiff::civil::Date {
        jiff::Timestamp::now().to_zoned(self.time_zone.clone()).date()
    }
}

fn parse_windows(raw: &str) -> eyre::Result<Vec<usize>> {
    let windows = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<usize>() {
            Ok(0) => Err(eyre::eyre!("window sizes must be positive")),
            Ok(n) => Ok(n),
            Err(e) => Err(eyre::eyre!("'{s}' is not a window size: {e}")),
        })
        .collect::<eyre::Result<Vec<_>>>()?;

    if windows.is_empty() {
        return Err(eyre::eyre!("at least one window size is required"));
    }
    Ok(windows)
}
