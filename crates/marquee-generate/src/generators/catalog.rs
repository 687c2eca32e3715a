//! Fixed value lists used by the enumerated field rules.

/// Rating codes across jurisdictions (MPA, BBFC, CBFC, ACB, TV Parental
/// Guidelines, ESRB and others).
pub const AGE_CERTIFICATIONS: &[&str] = &[
    "G", "PG", "PG-13", "R", "NC-17", "U", "U/A", "A", "S", "AL", "6", "9", "12", "12A", "15",
    "18", "18R", "R18", "R21", "M", "MA15+", "R16", "R18+", "X18", "T", "E", "E10+", "EC", "C",
    "CA", "GP", "M/PG", "TV-Y", "TV-Y7", "TV-G", "TV-PG", "TV-14", "TV-MA",
];

/// Production and cast roles.
pub const ROLES: &[&str] = &[
    "Director",
    "Producer",
    "Screenwriter",
    "Actor",
    "Actress",
    "Cinematographer",
    "Film Editor",
    "Production Designer",
    "Costume Designer",
    "Music Composer",
];
