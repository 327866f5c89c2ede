use crate::geometry::normalize_degrees;
use crate::rendering::glyphs::ZodiacSign;
use serde::{Deserialize, Serialize};

/// One render request. Field aliases cover the payload shape emitted by
/// the birth-chart calculation service as well as the renderer's own.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    #[serde(default, alias = "birth_info", skip_serializing_if = "Option::is_none")]
    pub person: Option<PersonInfo>,
    #[serde(default, alias = "planets")]
    pub planet_positions: Option<Vec<PlanetPosition>>,
    #[serde(default, alias = "houses")]
    pub house_cusps: Option<Vec<HouseCusp>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspects: Option<Vec<AspectEntry>>,
    /// Explicit title; takes precedence over the person line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Display-only birth data
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "date")]
    pub birth_date: Option<String>,
    #[serde(default, alias = "time")]
    pub birth_time: Option<String>,
    #[serde(default, alias = "birth_city", alias = "place")]
    pub birth_place: Option<String>,
}

impl PersonInfo {
    /// "name date time place", skipping blanks; None when nothing is set
    pub fn display_line(&self) -> Option<String> {
        let parts: Vec<&str> = [
            &self.name,
            &self.birth_date,
            &self.birth_time,
            &self.birth_place,
        ]
        .into_iter()
        .filter_map(|field| field.as_deref())
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

/// Sign reference: either a bare name or the calculator's `{name, degree}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SignField {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        degree: Option<f64>,
    },
}

impl SignField {
    pub fn name(&self) -> &str {
        match self {
            SignField::Name(name) | SignField::Detailed { name, .. } => name,
        }
    }

    pub fn degree(&self) -> Option<f64> {
        match self {
            SignField::Name(_) => None,
            SignField::Detailed { degree, .. } => *degree,
        }
    }
}

/// Longitude from an explicit value, or from a sign plus degree-in-sign
fn resolve_longitude(longitude: Option<f64>, sign: Option<&SignField>, degree: Option<f64>) -> Option<f64> {
    if let Some(lon) = longitude {
        return lon.is_finite().then(|| normalize_degrees(lon));
    }
    let sign = sign?;
    let zodiac: ZodiacSign = sign.name().parse().ok()?;
    let within = degree.or_else(|| sign.degree())?;
    within
        .is_finite()
        .then(|| normalize_degrees(zodiac.start_longitude() + within))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanetPosition {
    #[serde(default, alias = "planet")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<SignField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
    /// Explicit symbol, overriding the glyph table
    #[serde(default, alias = "symbol", skip_serializing_if = "Option::is_none")]
    pub glyph: Option<String>,
}

impl PlanetPosition {
    pub fn new(name: impl Into<String>, longitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn resolved_longitude(&self) -> Option<f64> {
        resolve_longitude(self.longitude, self.sign.as_ref(), self.degree)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    #[serde(default, alias = "house_number", alias = "number")]
    pub house: Option<u32>,
    #[serde(default, alias = "cusp_longitude", skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign: Option<SignField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degree: Option<f64>,
}

impl HouseCusp {
    pub fn new(house: u32, longitude: f64) -> Self {
        Self {
            house: Some(house),
            longitude: Some(longitude),
            ..Self::default()
        }
    }

    pub fn resolved_longitude(&self) -> Option<f64> {
        resolve_longitude(self.longitude, self.sign.as_ref(), self.degree)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AspectEntry {
    #[serde(default, alias = "planetA", alias = "planet1")]
    pub p1: Option<String>,
    #[serde(default, alias = "planetB", alias = "planet2")]
    pub p2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, alias = "strokeWidth", skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Aspect name ("Trine", ...), carried through for display only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect: Option<String>,
}

impl AspectEntry {
    pub fn between(p1: impl Into<String>, p2: impl Into<String>) -> Self {
        Self {
            p1: Some(p1.into()),
            p2: Some(p2.into()),
            ..Self::default()
        }
    }
}
