use crate::geometry::normalize_degrees;
use std::convert::Infallible;
use std::str::FromStr;

/// Symbol drawn for any name the tables do not know
pub const FALLBACK_SYMBOL: &str = "?";

/// Chart points that get a planet glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Sun, Moon, Mercury, Venus, Mars, Jupiter, Saturn, Uranus, Neptune, Pluto,
    Chiron, Lilith, NNode, SNode, Fortune,
    Ascendant, Descendant, MC, IC,
    Unknown,
}

impl Glyph {
    pub const ALL: [Glyph; 19] = [
        Glyph::Sun, Glyph::Moon, Glyph::Mercury, Glyph::Venus, Glyph::Mars,
        Glyph::Jupiter, Glyph::Saturn, Glyph::Uranus, Glyph::Neptune, Glyph::Pluto,
        Glyph::Chiron, Glyph::Lilith, Glyph::NNode, Glyph::SNode, Glyph::Fortune,
        Glyph::Ascendant, Glyph::Descendant, Glyph::MC, Glyph::IC,
    ];

    /// Resolve a planet identifier as supplied by callers ("Sun", "ASC",
    /// "north_node", ...). Matching ignores case, spaces, dashes and
    /// underscores.
    pub fn from_name(name: &str) -> Glyph {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "sun" => Glyph::Sun,
            "moon" => Glyph::Moon,
            "mercury" => Glyph::Mercury,
            "venus" => Glyph::Venus,
            "mars" => Glyph::Mars,
            "jupiter" => Glyph::Jupiter,
            "saturn" => Glyph::Saturn,
            "uranus" => Glyph::Uranus,
            "neptune" => Glyph::Neptune,
            "pluto" => Glyph::Pluto,
            "chiron" => Glyph::Chiron,
            "lilith" | "blackmoon" | "blackmoonlilith" => Glyph::Lilith,
            "nnode" | "northnode" | "truenode" | "meannode" => Glyph::NNode,
            "snode" | "southnode" => Glyph::SNode,
            "fortune" | "partoffortune" => Glyph::Fortune,
            "as" | "asc" | "ascendant" => Glyph::Ascendant,
            "ds" | "dc" | "dsc" | "desc" | "descendant" => Glyph::Descendant,
            "mc" | "midheaven" => Glyph::MC,
            "ic" | "imumcoeli" => Glyph::IC,
            _ => Glyph::Unknown,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Sun => "\u{2609}",
            Glyph::Moon => "\u{263D}",
            Glyph::Mercury => "\u{263F}",
            Glyph::Venus => "\u{2640}",
            Glyph::Mars => "\u{2642}",
            Glyph::Jupiter => "\u{2643}",
            Glyph::Saturn => "\u{2644}",
            Glyph::Uranus => "\u{2645}",
            Glyph::Neptune => "\u{2646}",
            Glyph::Pluto => "\u{2647}",
            Glyph::Chiron => "\u{26B7}",
            Glyph::Lilith => "\u{26B8}",
            Glyph::NNode => "\u{260A}",
            Glyph::SNode => "\u{260B}",
            Glyph::Fortune => "\u{2297}",
            Glyph::Ascendant => "AC",
            Glyph::Descendant => "DC",
            Glyph::MC => "MC",
            Glyph::IC => "IC",
            Glyph::Unknown => FALLBACK_SYMBOL,
        }
    }
}

impl FromStr for Glyph {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Glyph::from_name(s))
    }
}

/// The twelve signs of the tropical zodiac, in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ZodiacSign {
    Aries, Taurus, Gemini, Cancer, Leo, Virgo,
    Libra, Scorpio, Sagittarius, Capricorn, Aquarius, Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries, ZodiacSign::Taurus, ZodiacSign::Gemini,
        ZodiacSign::Cancer, ZodiacSign::Leo, ZodiacSign::Virgo,
        ZodiacSign::Libra, ZodiacSign::Scorpio, ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn, ZodiacSign::Aquarius, ZodiacSign::Pisces,
    ];

    /// Width of every sign in degrees
    pub const SPAN: f64 = 30.0;

    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Sign containing a longitude (any value, wrapped into [0, 360))
    pub fn from_longitude(longitude: f64) -> ZodiacSign {
        let index = (normalize_degrees(longitude) / Self::SPAN).floor() as usize;
        Self::ALL[index.min(11)]
    }

    pub fn start_longitude(&self) -> f64 {
        f64::from(self.index()) * Self::SPAN
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "\u{2648}",
            ZodiacSign::Taurus => "\u{2649}",
            ZodiacSign::Gemini => "\u{264A}",
            ZodiacSign::Cancer => "\u{264B}",
            ZodiacSign::Leo => "\u{264C}",
            ZodiacSign::Virgo => "\u{264D}",
            ZodiacSign::Libra => "\u{264E}",
            ZodiacSign::Scorpio => "\u{264F}",
            ZodiacSign::Sagittarius => "\u{2650}",
            ZodiacSign::Capricorn => "\u{2651}",
            ZodiacSign::Aquarius => "\u{2652}",
            ZodiacSign::Pisces => "\u{2653}",
        }
    }
}

impl FromStr for ZodiacSign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ZodiacSign::ALL
            .iter()
            .copied()
            .find(|sign| sign.name().eq_ignore_ascii_case(wanted) || sign.symbol() == wanted)
            .ok_or_else(|| format!("unknown zodiac sign: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planet_names_resolve_loosely() {
        assert_eq!(Glyph::from_name("Sun"), Glyph::Sun);
        assert_eq!(Glyph::from_name("ASC"), Glyph::Ascendant);
        assert_eq!(Glyph::from_name("north_node"), Glyph::NNode);
        assert_eq!(Glyph::from_name("Part of Fortune"), Glyph::Fortune);
        assert_eq!(Glyph::from_name("Vulcan"), Glyph::Unknown);
        assert_eq!(Glyph::Unknown.symbol(), FALLBACK_SYMBOL);
    }

    #[test]
    fn every_known_glyph_has_a_real_symbol() {
        for glyph in Glyph::ALL {
            assert_ne!(glyph.symbol(), FALLBACK_SYMBOL, "{glyph:?}");
        }
    }

    #[test]
    fn sign_lookup_by_longitude() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(32.33), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(359.99), ZodiacSign::Pisces);
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(-15.0), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_parsing_accepts_any_case_and_symbols() {
        assert_eq!("TAURUS".parse::<ZodiacSign>(), Ok(ZodiacSign::Taurus));
        assert_eq!("\u{2653}".parse::<ZodiacSign>(), Ok(ZodiacSign::Pisces));
        assert!("Ophiuchus".parse::<ZodiacSign>().is_err());
    }
}
