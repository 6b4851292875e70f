//! Airport code lookups used to tag rows for the market drill-down.

pub const UNKNOWN_MARKET: &str = "Unknown Market";

pub const AIRPORT_TO_MARKET: &[(&str, &str)] = &[
    ("ATL", "Atlanta"),
    ("AUS", "Austin"),
    ("BNA", "Nashville"),
    ("BTR", "Baton Rouge"),
    ("BWI", "Baltimore / Washington"),
    ("CAK", "Akron / Canton"),
    ("CLE", "Cleveland"),
    ("CMH", "Columbus"),
    ("CRP", "Corpus Christi"),
    ("DAB", "Daytona Beach"),
    ("DCA", "Washington DC"),
    ("DEN", "Denver"),
    ("DTW", "Detroit"),
    ("ELP", "El Paso"),
    ("EWR", "New Jersey"),
    ("FAR", "Fargo"),
    ("FAT", "Fresno"),
    ("FLL", "Ft. Lauderdale"),
    ("GSO", "Greensboro"),
    ("HNL", "Honolulu"),
    ("HSV", "Huntsville"),
    ("IAD", "Washington DC"),
    ("ICT", "Wichita"),
    ("JAN", "Jackson (MS)"),
    ("JFK", "New York"),
    ("LBB", "Lubbock"),
    ("LGA", "New York"),
    ("MDT", "Harrisburg"),
    ("MDW", "Chicago"),
    ("MSP", "Minneapolis / St Paul"),
    ("MSY", "New Orleans"),
    ("OMA", "Omaha"),
    ("ORD", "Chicago"),
    ("PBI", "Palm Beach"),
    ("PHL", "Philadelphia"),
    ("PSC", "Tri-Cities"),
    ("RDU", "Raleigh-Durham"),
    ("ROA", "Roanoke–Blacksburg"),
    ("SAN", "San Diego"),
    ("SEA", "Seattle"),
    ("SFO", "San Francisco"),
    ("SMF", "Sacramento"),
    ("SWF", "Hudson Valley / NY"),
    ("TLH", "Tallahassee"),
    ("VPS", "Destin-Fort Walton"),
];

pub const AIRPORT_LONG_NAME: &[(&str, &str)] = &[
    ("ATL", "Hartsfield-Jackson Atlanta International Airport"),
    ("AUS", "Austin-Bergstrom International Airport"),
    ("BNA", "Nashville International Airport"),
    ("BTR", "Baton Rouge Metropolitan Airport"),
    ("BWI", "Baltimore/Washington International Thurgood Marshall Airport"),
    ("CAK", "Akron-Canton Airport"),
    ("CLE", "Cleveland-Hopkins International Airport"),
    ("CMH", "John Glenn Columbus International Airport"),
    ("CRP", "Corpus Christi International Airport"),
    ("DAB", "Daytona Beach International Airport"),
    ("DCA", "Ronald Reagan Washington National Airport"),
    ("DEN", "Denver International Airport"),
    ("DTW", "Detroit Metropolitan Wayne County Airport"),
    ("ELP", "El Paso International Airport"),
    ("EWR", "Newark Liberty International Airport"),
    ("FAR", "Hector International Airport"),
    ("FAT", "Fresno Yosemite International Airport"),
    ("FLL", "Ft. Lauderdale-Hollywood International Airport"),
    ("GSO", "Piedmont Triad International Airport"),
    ("HNL", "Daniel K. Inouye International Airport"),
    ("HSV", "Huntsville International Airport"),
    ("IAD", "Washington Dulles International Airport"),
    ("ICT", "Wichita Dwight D. Eisenhower National Airport"),
    ("JAN", "Jackson-Medgar Wiley Evers International Airport"),
    ("JFK", "John F. Kennedy International Airport"),
    ("LBB", "Lubbock Preston Smith International Airport"),
    ("LGA", "LaGuardia Airport"),
    ("MDT", "Harrisburg International Airport"),
    ("MDW", "Chicago Midway International Airport"),
    ("MSP", "Minneapolis-St. Paul International Airport"),
    ("MSY", "Louis Armstrong New Orleans International Airport"),
    ("OMA", "Omaha Eppley Airfield"),
    ("ORD", "Chicago O’Hare International Airport"),
    ("PBI", "Palm Beach International Airport"),
    ("PHL", "Philadelphia International Airport"),
    ("PSC", "Tri-Cities Airport"),
    ("RDU", "Raleigh-Durham International Airport"),
    ("ROA", "Roanoke-Blacksburg Regional Airport"),
    ("SAN", "San Diego International Airport"),
    ("SEA", "Seattle-Tacoma International Airport"),
    ("SFO", "San Francisco International Airport"),
    ("SMF", "Sacramento International Airport"),
    ("SWF", "New York Stewart International Airport"),
    ("TLH", "Tallahassee International Airport"),
    ("VPS", "Destin-Fort Walton Beach Airport"),
];

fn lookup(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// "ATL_CONCOURSE_B" -> "ATL". Blank codes yield None.
pub fn extract_airport(network_code: &str) -> Option<String> {
    let trimmed = network_code.trim();
    if trimmed.is_empty() {
        return None;
    }
    let prefix = trimmed.split('_').next()?.trim();
    if prefix.is_empty() {
        return None;
    }
    Some(prefix.to_uppercase())
}

/// Market label for an airport code. Unknown codes label themselves.
pub fn market_label(airport: Option<&str>) -> String {
    let Some(code) = airport.map(str::trim).filter(|c| !c.is_empty()) else {
        return UNKNOWN_MARKET.to_string();
    };
    let code = code.to_uppercase();
    lookup(AIRPORT_TO_MARKET, &code)
        .map(str::to_string)
        .unwrap_or(code)
}

pub fn long_name(airport: &str) -> Option<&'static str> {
    lookup(AIRPORT_LONG_NAME, airport.trim())
}
