use serde::{Deserialize, Serialize};

use crate::vocab::{VocabParseError, Vocabulary, parse_strict};

/// What a creator did on a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Writer,
    Artist,
    Penciller,
    Inker,
    Colourist,
    Letterer,
    CoverArtist,
    Editor,
    AssistantEditor,
    AssociateEditor,
    ConsultingEditor,
    EditorInChief,
    Translator,
    Designer,
    Production,
    Other,
}

const ALL_ROLES: &[Role] = &[
    Role::Writer,
    Role::Artist,
    Role::Penciller,
    Role::Inker,
    Role::Colourist,
    Role::Letterer,
    Role::CoverArtist,
    Role::Editor,
    Role::AssistantEditor,
    Role::AssociateEditor,
    Role::ConsultingEditor,
    Role::EditorInChief,
    Role::Translator,
    Role::Designer,
    Role::Production,
    Role::Other,
];

impl Vocabulary for Role {
    fn all() -> &'static [Self] {
        ALL_ROLES
    }

    fn title(&self) -> &'static str {
        match self {
            Self::Writer => "Writer",
            Self::Artist => "Artist",
            Self::Penciller => "Penciller",
            Self::Inker => "Inker",
            Self::Colourist => "Colourist",
            Self::Letterer => "Letterer",
            Self::CoverArtist => "Cover Artist",
            Self::Editor => "Editor",
            Self::AssistantEditor => "Assistant Editor",
            Self::AssociateEditor => "Associate Editor",
            Self::ConsultingEditor => "Consulting Editor",
            Self::EditorInChief => "Editor In Chief",
            Self::Translator => "Translator",
            Self::Designer => "Designer",
            Self::Production => "Production",
            Self::Other => "Other",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Writer => &["script", "scripter", "story", "plot", "author"],
            Self::Artist => &["illustrator"],
            Self::Penciller => &["penciler", "pencils", "breakdowns", "layouts"],
            Self::Inker => &["inks", "embellisher", "finishes"],
            Self::Colourist => &["colorist", "colors", "colours", "color separations"],
            Self::Letterer => &["letters"],
            Self::CoverArtist => &["cover", "covers"],
            Self::EditorInChief => &["eic", "editor-in-chief"],
            Self::Designer => &["logo design", "design"],
            _ => &[],
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.title())
    }
}

impl std::str::FromStr for Role {
    type Err = VocabParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_strict("role", s)
    }
}

impl TryFrom<String> for Role {
    type Error = VocabParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.title().to_string()
    }
}
