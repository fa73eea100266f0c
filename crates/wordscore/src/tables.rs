// Built-in lookup tables.
//
// Tables are ordered slices so that pipelines apply them in a fixed,
// reproducible order. A name that contains another name must come first
// ("ROMANIA" before "OMAN").

/// Country names, ranked by national financial assets, mapped to their
/// ISO 3166-1 alpha-3 codes.
pub const COUNTRY_ABBREVIATIONS: &[(&str, &str)] = &[
    ("UNITED STATES", "USA"),
    ("CHINA", "CHN"),
    ("JAPAN", "JPN"),
    ("GERMANY", "DEU"),
    ("UNITED KINGDOM", "GBR"),
    ("FRANCE", "FRA"),
    ("INDIA", "IND"),
    ("CANADA", "CAN"),
    ("ITALY", "ITA"),
    ("AUSTRALIA", "AUS"),
    ("SOUTH KOREA", "KOR"),
    ("SWITZERLAND", "CHE"),
    ("NETHERLANDS", "NLD"),
    ("BRAZIL", "BRA"),
    ("SPAIN", "ESP"),
    ("RUSSIA", "RUS"),
    ("MEXICO", "MEX"),
    ("INDONESIA", "IDN"),
    ("SAUDI ARABIA", "SAU"),
    ("TURKEY", "TUR"),
    ("TAIWAN", "TWN"),
    ("SWEDEN", "SWE"),
    ("BELGIUM", "BEL"),
    ("POLAND", "POL"),
    ("THAILAND", "THA"),
    ("AUSTRIA", "AUT"),
    ("NORWAY", "NOR"),
    ("UNITED ARAB EMIRATES", "ARE"),
    ("IRAN", "IRN"),
    ("SINGAPORE", "SGP"),
    ("ISRAEL", "ISR"),
    ("HONG KONG", "HKG"),
    ("MALAYSIA", "MYS"),
    ("DENMARK", "DNK"),
    ("SOUTH AFRICA", "ZAF"),
    ("PHILIPPINES", "PHL"),
    ("EGYPT", "EGY"),
    ("VIETNAM", "VNM"),
    ("PAKISTAN", "PAK"),
    ("ARGENTINA", "ARG"),
    ("COLOMBIA", "COL"),
    ("CHILE", "CHL"),
    ("BANGLADESH", "BGD"),
    ("FINLAND", "FIN"),
    ("NIGERIA", "NGA"),
    ("IRELAND", "IRL"),
    ("PORTUGAL", "PRT"),
    ("GREECE", "GRC"),
    ("CZECH REPUBLIC", "CZE"),
    ("ROMANIA", "ROU"),
    ("PERU", "PER"),
    ("NEW ZEALAND", "NZL"),
    ("IRAQ", "IRQ"),
    ("QATAR", "QAT"),
    ("KAZAKHSTAN", "KAZ"),
    ("HUNGARY", "HUN"),
    ("UKRAINE", "UKR"),
    ("KUWAIT", "KWT"),
    ("MOROCCO", "MAR"),
    ("SLOVAKIA", "SVK"),
    ("SRI LANKA", "LKA"),
    ("ECUADOR", "ECU"),
    ("ANGOLA", "AGO"),
    ("OMAN", "OMN"),
    ("CUBA", "CUB"),
    ("BELARUS", "BLR"),
    ("AZERBAIJAN", "AZE"),
    ("SUDAN", "SDN"),
    ("DOMINICAN REPUBLIC", "DOM"),
    ("LUXEMBOURG", "LUX"),
    ("MYANMAR", "MMR"),
    ("UZBEKISTAN", "UZB"),
    ("KENYA", "KEN"),
    ("GUATEMALA", "GTM"),
    ("BULGARIA", "BGR"),
    ("TUNISIA", "TUN"),
    ("SERBIA", "SRB"),
    ("ETHIOPIA", "ETH"),
    ("CROATIA", "HRV"),
    ("LEBANON", "LBN"),
    ("LITHUANIA", "LTU"),
    ("SLOVENIA", "SVN"),
    ("GHANA", "GHA"),
    ("TANZANIA", "TZA"),
    ("PANAMA", "PAN"),
    ("COSTA RICA", "CRI"),
    ("JORDAN", "JOR"),
    ("BOLIVIA", "BOL"),
    ("PARAGUAY", "PRY"),
    ("URUGUAY", "URY"),
    ("CAMEROON", "CMR"),
    ("EL SALVADOR", "SLV"),
    ("UGANDA", "UGA"),
    ("NEPAL", "NPL"),
    ("HONDURAS", "HND"),
    ("CYPRUS", "CYP"),
    ("ICELAND", "ISL"),
    ("ZAMBIA", "ZMB"),
    ("CAMBODIA", "KHM"),
    ("SENEGAL", "SEN"),
];

/// Common words with a conventional short form.
pub const WORD_ABBREVIATIONS: &[(&str, &str)] = &[("INTERNATIONAL", "INTL")];

/// Words too common to help tell names apart ("Pacific Venture",
/// "Atlantic Venture"). Removal is case-sensitive, so each casing that
/// should be dropped is listed.
pub const COMMON_WORDS: &[&str] = &["Venture", "VENTURE"];

/// Every built-in abbreviation: countries first, then common words.
pub fn common_abbreviations() -> impl Iterator<Item = (&'static str, &'static str)> {
    COUNTRY_ABBREVIATIONS
        .iter()
        .chain(WORD_ABBREVIATIONS)
        .copied()
}
