use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A platform and locale partition ("shard") of the game's data.
///
/// Each region maps to a fixed identifier used verbatim as a path segment,
/// e.g. [`Region::PcEurope`] is `pc-eu`. The serialized form is the
/// identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "xbox-as")]
    XboxAsia,
    #[serde(rename = "xbox-eu")]
    XboxEurope,
    #[serde(rename = "xbox-na")]
    XboxNorthAmerica,
    #[serde(rename = "xbox-oc")]
    XboxOceania,
    #[serde(rename = "pc-krjp")]
    PcKoreaJapan,
    #[serde(rename = "pc-jp")]
    PcJapan,
    #[serde(rename = "pc-na")]
    PcNorthAmerica,
    #[serde(rename = "pc-eu")]
    PcEurope,
    #[serde(rename = "pc-ru")]
    PcRussia,
    #[serde(rename = "pc-oc")]
    PcOceania,
    #[serde(rename = "pc-kakao")]
    PcKakao,
    #[serde(rename = "pc-sea")]
    PcSouthEastAsia,
    #[serde(rename = "pc-sa")]
    PcSouthAmerica,
    #[serde(rename = "pc-as")]
    PcAsia,
    #[serde(rename = "pc-tournament")]
    PcTournament,
    #[serde(rename = "steam")]
    Steam,
    #[serde(rename = "kakao")]
    Kakao,
}

impl Region {
    /// Returns the identifier used as the shard path segment.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::XboxAsia => "xbox-as",
            Self::XboxEurope => "xbox-eu",
            Self::XboxNorthAmerica => "xbox-na",
            Self::XboxOceania => "xbox-oc",
            Self::PcKoreaJapan => "pc-krjp",
            Self::PcJapan => "pc-jp",
            Self::PcNorthAmerica => "pc-na",
            Self::PcEurope => "pc-eu",
            Self::PcRussia => "pc-ru",
            Self::PcOceania => "pc-oc",
            Self::PcKakao => "pc-kakao",
            Self::PcSouthEastAsia => "pc-sea",
            Self::PcSouthAmerica => "pc-sa",
            Self::PcAsia => "pc-as",
            Self::PcTournament => "pc-tournament",
            Self::Steam => "steam",
            Self::Kakao => "kakao",
        }
    }
}

impl Display for Region {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "xbox-as" => Ok(Self::XboxAsia),
            "xbox-eu" => Ok(Self::XboxEurope),
            "xbox-na" => Ok(Self::XboxNorthAmerica),
            "xbox-oc" => Ok(Self::XboxOceania),
            "pc-krjp" => Ok(Self::PcKoreaJapan),
            "pc-jp" => Ok(Self::PcJapan),
            "pc-na" => Ok(Self::PcNorthAmerica),
            "pc-eu" => Ok(Self::PcEurope),
            "pc-ru" => Ok(Self::PcRussia),
            "pc-oc" => Ok(Self::PcOceania),
            "pc-kakao" => Ok(Self::PcKakao),
            "pc-sea" => Ok(Self::PcSouthEastAsia),
            "pc-sa" => Ok(Self::PcSouthAmerica),
            "pc-as" => Ok(Self::PcAsia),
            "pc-tournament" => Ok(Self::PcTournament),
            "steam" => Ok(Self::Steam),
            "kakao" => Ok(Self::Kakao),
            _ => Err(UnknownRegion(s.to_owned())),
        }
    }
}

/// Error returned when parsing a string that is not a region identifier.
#[derive(Clone, Debug, Error)]
#[error("unknown region: {0}")]
pub struct UnknownRegion(String);

#[cfg(test)]
mod tests {
    use super::Region;

    use serde_test::{assert_tokens, Token};

    #[test]
    fn test_identifiers() {
        assert_eq!(Region::Steam.identifier(), "steam");
        assert_eq!(Region::PcEurope.identifier(), "pc-eu");
        assert_eq!(Region::XboxNorthAmerica.identifier(), "xbox-na");
        assert_eq!(Region::PcKoreaJapan.identifier(), "pc-krjp");
        assert_eq!(Region::PcTournament.identifier(), "pc-tournament");
    }

    #[test]
    fn test_display_matches_identifier() {
        assert_eq!(Region::PcSouthEastAsia.to_string(), "pc-sea");
        assert_eq!(Region::Kakao.to_string(), "kakao");
    }

    #[test]
    fn test_from_str() {
        assert_eq!("pc-eu".parse::<Region>().unwrap(), Region::PcEurope);
        assert_eq!("steam".parse::<Region>().unwrap(), Region::Steam);
        assert!("pc-mars".parse::<Region>().is_err());
    }

    #[test]
    fn test_serde() {
        assert_tokens(
            &Region::PcEurope,
            &[Token::UnitVariant {
                name: "Region",
                variant: "pc-eu",
            }],
        );

        assert_tokens(
            &Region::Steam,
            &[Token::UnitVariant {
                name: "Region",
                variant: "steam",
            }],
        );
    }
}
