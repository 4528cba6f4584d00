use serde::Deserialize;

/// Aggregate power above which a hero's card gets the featured treatment.
pub const NOTABLE_TOTAL_POWER: i64 = 400;

/// Individual stat value at or above which a bar is drawn emphasised.
pub const HIGH_STAT_THRESHOLD: i32 = 80;

const STATUS_SUCCESS: &str = "success";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Hero {
    pub id: String,
    pub name: String,
    pub powerstats: PowerStats,
    pub image: HeroImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HeroImage {
    pub url: String,
}

/// The six stats exactly as the API sends them: numbers as text, or a
/// placeholder such as `"null"` / `"N/A"` when the value is unknown.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct PowerStats {
    pub intelligence: String,
    pub strength: String,
    pub speed: String,
    pub durability: String,
    pub power: String,
    pub combat: String,
}

/// Search envelope. Error envelopes carry no `results` key, only `error`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiResponse {
    pub response: String,
    #[serde(default)]
    pub results: Vec<Hero>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.response == STATUS_SUCCESS
    }

    /// Consumes the envelope, yielding its heroes only when the API reported
    /// success and actually found someone.
    pub fn into_heroes(self) -> Option<Vec<Hero>> {
        if self.is_success() && !self.results.is_empty() {
            Some(self.results)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Intelligence,
    Strength,
    Speed,
    Durability,
    Power,
    Combat,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Intelligence,
        StatKind::Strength,
        StatKind::Speed,
        StatKind::Durability,
        StatKind::Power,
        StatKind::Combat,
    ];

    /// Bar colour, shared by every palette.
    pub fn color(self) -> u32 {
        match self {
            StatKind::Intelligence => 0x4caf50,
            StatKind::Strength => 0xf44336,
            StatKind::Speed => 0xffeb3b,
            StatKind::Durability => 0x9c27b0,
            StatKind::Power => 0x2196f3,
            StatKind::Combat => 0xff9800,
        }
    }
}

impl PowerStats {
    pub fn raw(&self, kind: StatKind) -> &str {
        match kind {
            StatKind::Intelligence => &self.intelligence,
            StatKind::Strength => &self.strength,
            StatKind::Speed => &self.speed,
            StatKind::Durability => &self.durability,
            StatKind::Power => &self.power,
            StatKind::Combat => &self.combat,
        }
    }

    pub fn value(&self, kind: StatKind) -> i32 {
        parse_stat(self.raw(kind))
    }

    pub fn total(&self) -> i64 {
        StatKind::ALL
            .iter()
            .map(|&kind| i64::from(self.value(kind)))
            .sum()
    }
}

impl Hero {
    pub fn total_power(&self) -> i64 {
        self.powerstats.total()
    }

    pub fn is_notable(&self) -> bool {
        self.total_power() > NOTABLE_TOTAL_POWER
    }
}

/// Unknown or malformed values count as zero.
pub fn parse_stat(raw: &str) -> i32 {
    raw.parse().unwrap_or(0)
}

/// Filled portion of a stat bar, always within `0.0..=1.0`.
pub fn fill_fraction(value: i32) -> f32 {
    (value as f32 / 100.0).clamp(0.0, 1.0)
}

pub fn is_high_stat(value: i32) -> bool {
    value >= HIGH_STAT_THRESHOLD
}
