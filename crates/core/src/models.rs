use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    Inr,
    Usd,
}

impl Currency {
    pub fn code(self) -> &'static str {
        match self {
            Self::Inr => "inr",
            Self::Usd => "usd",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Inr => "₹",
            Self::Usd => "$",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BestTime {
    Morning,
    Afternoon,
    Evening,
    Sunset,
}

impl BestTime {
    pub fn label(self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Sunset => "Sunset",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Bus,
    Train,
    Taxi,
    Auto,
}

impl TransportMode {
    /// Display and generation order.
    pub const ALL: [TransportMode; 4] = [Self::Bus, Self::Train, Self::Taxi, Self::Auto];

    pub fn label(self) -> &'static str {
        match self {
            Self::Bus => "Bus",
            Self::Train => "Train",
            Self::Taxi => "Taxi",
            Self::Auto => "Auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LodgingType {
    Hotel,
    Homestay,
}

impl LodgingType {
    pub fn label(self) -> &'static str {
        match self {
            Self::Hotel => "Hotel",
            Self::Homestay => "Homestay",
        }
    }
}

/// A budget or party-size value as it arrives from a form field or JSON body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Number(f64),
    Text(String),
}

/// Wire shape accepted for an [`InputValue`]. Nulls, booleans, arrays and
/// objects land in `Other` and read as an empty answer.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawInputValue {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl From<RawInputValue> for InputValue {
    fn from(raw: RawInputValue) -> Self {
        match raw {
            RawInputValue::Number(value) => Self::Number(value),
            RawInputValue::Text(value) => Self::Text(value),
            RawInputValue::Other(IgnoredAny) => Self::Text(String::new()),
        }
    }
}

impl<'de> Deserialize<'de> for InputValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawInputValue::deserialize(deserializer).map(Self::from)
    }
}

impl InputValue {
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// Party size rounded up to whole travellers, never below one.
    pub fn party_size(&self) -> u32 {
        let raw = match self {
            Self::Number(value) => *value,
            Self::Text(value) => value.trim().parse::<f64>().unwrap_or(f64::NAN),
        };

        if raw.is_finite() && raw >= 1.0 {
            raw.ceil().min(u32::MAX as f64) as u32
        } else {
            1
        }
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for InputValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for InputValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripInput {
    pub location: String,
    pub budget: InputValue,
    pub people: InputValue,
}

impl TripInput {
    pub fn new(
        location: impl Into<String>,
        budget: impl Into<InputValue>,
        people: impl Into<InputValue>,
    ) -> Self {
        Self {
            location: location.into(),
            budget: budget.into(),
            people: people.into(),
        }
    }
}

impl Default for TripInput {
    fn default() -> Self {
        Self {
            location: String::new(),
            budget: InputValue::Text(String::new()),
            people: InputValue::Number(1.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attraction {
    pub name: String,
    pub description: String,
    pub best_time: BestTime,
    pub entry_cost: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportOption {
    pub mode: TransportMode,
    pub fare: u64,
    pub time_range: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedAttraction {
    #[serde(flatten)]
    pub attraction: Attraction,
    pub transport: Vec<TransportOption>,
}

impl PlannedAttraction {
    pub fn name(&self) -> &str {
        &self.attraction.name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: LodgingType,
    pub rating: f32,
    pub location: String,
    pub capacity: u32,
    pub price: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub activities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    pub city: String,
    pub currency: Currency,
    pub attractions: Vec<PlannedAttraction>,
    pub hotels: Vec<Hotel>,
    pub days: Vec<DayPlan>,
    pub total_estimated: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub stay: u64,
    pub local_transport: u64,
    pub sightseeing: u64,
    pub total: u64,
}

/// Symbol plus comma-grouped digits. The amount is shown as-is, never converted.
pub fn format_amount(currency: Currency, amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}", currency.symbol(), grouped)
}
