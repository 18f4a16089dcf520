//! Tag registry
//!
//! The closed vocabulary of GEDCOM record codes with their human-readable
//! labels. Codes outside the vocabulary are kept verbatim as [`Tag::Custom`].

use serde::{Serialize, Serializer};
use std::fmt;

/// Declares the official tags together with their codes and labels.
macro_rules! official_tags {
    ($( $(#[$meta:meta])* $variant:ident => ($code:literal, $label:literal) ),* $(,)?) => {
        /// A GEDCOM record type code
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum Tag {
            $( $(#[$meta])* $variant, )*
            /// Any code outside the official vocabulary, usually prefixed with `_`
            Custom(String),
        }

        impl Tag {
            /// Every official tag, in declaration order
            pub const OFFICIAL: &'static [Tag] = &[$(Tag::$variant),*];

            /// Look up a raw code. Unknown codes become [`Tag::Custom`].
            #[must_use]
            pub fn from_code(code: &str) -> Self {
                match code {
                    $( $code => Self::$variant, )*
                    other => Self::Custom(other.to_string()),
                }
            }

            /// The raw code as it appears in GEDCOM text
            #[must_use]
            pub fn code(&self) -> &str {
                match self {
                    $( Self::$variant => $code, )*
                    Self::Custom(code) => code,
                }
            }

            fn label(&self) -> Option<&'static str> {
                match self {
                    $( Self::$variant => Some($label), )*
                    Self::Custom(_) => None,
                }
            }
        }
    };
}

official_tags! {
    Abbreviation => ("ABBR", "Abbreviation"),
    Address => ("ADDR", "Address"),
    Adoption => ("ADOP", "Adoption"),
    Age => ("AGE", "Age"),
    Alias => ("ALIA", "Alias"),
    Baptism => ("BAPM", "Baptism"),
    BarMitzvah => ("BARM", "Bar Mitzvah"),
    BasMitzvah => ("BASM", "Bas Mitzvah"),
    /// Birth event
    Birth => ("BIRT", "Birth"),
    Burial => ("BURI", "Burial"),
    Cause => ("CAUS", "Cause"),
    Census => ("CENS", "Census"),
    Change => ("CHAN", "Change"),
    Character => ("CHAR", "Character"),
    /// Child link inside a family record
    Child => ("CHIL", "Child"),
    Christening => ("CHR", "Christening"),
    City => ("CITY", "City"),
    Concatenation => ("CONC", "Concatenation"),
    Confirmation => ("CONF", "Confirmation"),
    Continued => ("CONT", "Continued"),
    Copyright => ("COPR", "Copyright"),
    Corporate => ("CORP", "Corporate"),
    Cremation => ("CREM", "Cremation"),
    Country => ("CTRY", "Country"),
    Data => ("DATA", "Data"),
    /// Event date
    Date => ("DATE", "Date"),
    /// Death event
    Death => ("DEAT", "Death"),
    Destination => ("DEST", "Destination"),
    Divorce => ("DIV", "Divorce"),
    Education => ("EDUC", "Education"),
    Emigration => ("EMIG", "Emigration"),
    Engagement => ("ENGA", "Engagement"),
    Event => ("EVEN", "Event"),
    /// Family record
    Family => ("FAM", "Family"),
    /// Link from an individual to the family it is a child of
    FamilyChild => ("FAMC", "Family Child"),
    /// Link from an individual to a family it is a spouse in
    FamilySpouse => ("FAMS", "Family Spouse"),
    File => ("FILE", "File"),
    Format => ("FORM", "Format"),
    GedcomFormat => ("GEDC", "GEDCOM Format"),
    /// Name override: given name
    GivenName => ("GIVN", "Given Name"),
    Graduation => ("GRAD", "Graduation"),
    Header => ("HEAD", "Header"),
    Husband => ("HUSB", "Husband"),
    Immigration => ("IMMI", "Immigration"),
    /// Person record
    Individual => ("INDI", "Individual"),
    Language => ("LANG", "Language"),
    Marriage => ("MARR", "Marriage"),
    Name => ("NAME", "Name"),
    Nationality => ("NATI", "Nationality"),
    Naturalization => ("NATU", "Naturalization"),
    Nickname => ("NICK", "Nickname"),
    Note => ("NOTE", "Note"),
    /// Name override: prefix such as "Dr"
    NamePrefix => ("NPFX", "Name Prefix"),
    /// Name override: suffix such as "Jr."
    NameSuffix => ("NSFX", "Name Suffix"),
    Object => ("OBJE", "Object"),
    Occupation => ("OCCU", "Occupation"),
    Page => ("PAGE", "Page"),
    Pedigree => ("PEDI", "Pedigree"),
    Phone => ("PHON", "Phone"),
    /// Event place
    Place => ("PLAC", "Place"),
    PostalCode => ("POST", "Postal Code"),
    Probate => ("PROB", "Probate"),
    Publication => ("PUBL", "Publication"),
    Quality => ("QUAY", "Quality Of Data"),
    Reference => ("REFN", "Reference"),
    Religion => ("RELI", "Religion"),
    Repository => ("REPO", "Repository"),
    Residence => ("RESI", "Residence"),
    Retirement => ("RETI", "Retirement"),
    RecordId => ("RIN", "Record ID Number"),
    Sex => ("SEX", "Sex"),
    Source => ("SOUR", "Source"),
    /// Name override: surname prefix such as "van"
    SurnamePrefix => ("SPFX", "Surname Prefix"),
    State => ("STAE", "State"),
    Submitter => ("SUBM", "Submitter"),
    Submission => ("SUBN", "Submission"),
    /// Name override: surname
    Surname => ("SURN", "Surname"),
    Text => ("TEXT", "Text"),
    Time => ("TIME", "Time"),
    /// Name override: title such as "Duke"
    Title => ("TITL", "Title"),
    Trailer => ("TRLR", "Trailer"),
    Type => ("TYPE", "Type"),
    Version => ("VERS", "Version"),
    Wife => ("WIFE", "Wife"),
    Will => ("WILL", "Will"),
}

impl Tag {
    /// Whether the tag belongs to the official vocabulary
    #[must_use]
    pub const fn is_official(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    /// Human-readable label. Custom tags describe themselves by their code.
    #[must_use]
    pub fn describe(&self) -> String {
        self.label()
            .map_or_else(|| self.code().to_string(), str::to_string)
    }

    /// Tags whose first value overrides a part of a parsed name
    #[must_use]
    pub const fn is_name_part(&self) -> bool {
        matches!(
            self,
            Self::GivenName
                | Self::Surname
                | Self::SurnamePrefix
                | Self::NamePrefix
                | Self::NameSuffix
                | Self::Title
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl From<&str> for Tag {
    fn from(code: &str) -> Self {
        Self::from_code(code)
    }
}

impl Serialize for Tag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

/// Whether the tag belongs to the official vocabulary
#[must_use]
pub const fn is_official(tag: &Tag) -> bool {
    tag.is_official()
}

/// Human-readable label for a tag
#[must_use]
pub fn describe(tag: &Tag) -> String {
    tag.describe()
}
