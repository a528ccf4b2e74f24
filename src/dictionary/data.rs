//! Built-in phrase tables.
//!
//! The two tables are authored independently and are not exact inverses.

pub const FRENCH_TO_WOLOF: &[(&str, &str)] = &[
    ("bonjour", "asalaam aleekum"),
    ("comment allez-vous", "naka nga def"),
    ("merci", "jërejëf"),
    ("au revoir", "ba beneen"),
    ("oui", "waaw"),
    ("non", "déedéet"),
    ("comment vous appelez-vous", "naka nga tudd"),
    ("je m'appelle", "maa ngi tudd"),
    ("eau", "ndox"),
    ("pain", "mburu"),
    ("maison", "kër"),
    ("famille", "waa kër"),
    ("enfant", "xale"),
    ("mère", "yaay"),
    ("père", "baay"),
    ("frère", "mag"),
    ("sœur", "rakk"),
    ("ami", "xarit"),
    ("école", "ekol"),
    ("travail", "liggéey"),
    ("argent", "xaalis"),
    ("temps", "waxtu"),
    ("jour", "bës"),
    ("nuit", "guddi"),
    ("manger", "lekk"),
    ("boire", "naan"),
    ("dormir", "nelaw"),
    ("parler", "wax"),
    ("écouter", "dégg"),
    ("voir", "gis"),
    ("venir", "ñëw"),
    ("aller", "dem"),
];

pub const WOLOF_TO_FRENCH: &[(&str, &str)] = &[
    ("asalaam aleekum", "bonjour"),
    ("naka nga def", "comment allez-vous"),
    ("jërejëf", "merci"),
    ("ba beneen", "au revoir"),
    ("waaw", "oui"),
    ("déedéet", "non"),
    ("naka nga tudd", "comment vous appelez-vous"),
    ("maa ngi tudd", "je m'appelle"),
    ("ndox", "eau"),
    ("mburu", "pain"),
    ("kër", "maison"),
    ("waa kër", "famille"),
    ("xale", "enfant"),
    ("yaay", "mère"),
    ("baay", "père"),
    ("mag", "frère"),
    ("rakk", "sœur"),
    ("xarit", "ami"),
    ("ekol", "école"),
    ("liggéey", "travail"),
    ("xaalis", "argent"),
    ("waxtu", "temps"),
    ("bës", "jour"),
    ("guddi", "nuit"),
    ("lekk", "manger"),
    ("naan", "boire"),
    ("nelaw", "dormir"),
    ("wax", "parler"),
    ("dégg", "écouter"),
    ("gis", "voir"),
    ("ñëw", "venir"),
    ("dem", "aller"),
];
